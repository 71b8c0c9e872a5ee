//! Playlist identifier extraction from user-supplied URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, PlaylistId, Result};

#[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
static LIST_PARAM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"list=([A-Za-z0-9_-]+)").unwrap());

/// Extract the playlist ID from a URL.
///
/// The first `list=<id>` occurrence anywhere in the input wins, so both
/// `https://www.youtube.com/playlist?list=PL...` and watch URLs such as
/// `https://youtu.be/abc?si=x&list=PL...&index=3` are accepted.
pub fn extract_playlist_id(url: &str) -> Result<PlaylistId> {
    let url = url.trim();
    LIST_PARAM_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
        .and_then(|id| PlaylistId::new(id.as_str()))
}
