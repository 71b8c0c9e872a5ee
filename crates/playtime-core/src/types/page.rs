//! One fetched batch of playlist membership.

use serde::{Deserialize, Serialize};

use super::VideoId;

/// A page of playlist items plus the token needed to fetch the next one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Video IDs in playlist order.
    pub items: Vec<VideoId>,
    /// Continuation token. Absent or empty on the last page.
    pub next_page_token: Option<String>,
}

impl Page {
    pub fn new(items: Vec<VideoId>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token,
        }
    }

    /// The token to pass back verbatim, or `None` if this is the last page.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_last(&self) -> bool {
        self.next_token().is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
