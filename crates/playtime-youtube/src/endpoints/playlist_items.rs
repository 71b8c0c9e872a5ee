//! `playlistItems` endpoint: playlist membership, one page at a time.

use playtime_core::{Page, PlaylistId, Result};
use tracing::debug;

use crate::{types::PlaylistItemsResponse, YouTubeClient};

impl YouTubeClient {
    /// Fetch one page of a playlist's video IDs.
    ///
    /// # Arguments
    /// * `playlist` - The playlist to enumerate
    /// * `page_token` - `None` for the first page, otherwise the previous
    ///   page's continuation token
    pub async fn playlist_items(
        &self,
        playlist: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<Page> {
        let page_size = self.config.page_size.to_string();
        let mut params = vec![
            ("part", "contentDetails"),
            ("maxResults", page_size.as_str()),
            ("playlistId", playlist.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: PlaylistItemsResponse = self.get("playlistItems", &params).await?;
        let page = Page::from(response);

        debug!(
            "Fetched {} items of {playlist} (last page: {})",
            page.len(),
            page.is_last()
        );

        Ok(page)
    }
}
