//! Data API response structures.

use playtime_core::{Page, VideoId};
use serde::Deserialize;

/// Response of `GET playlistItems?part=contentDetails`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

impl From<PlaylistItemsResponse> for Page {
    fn from(response: PlaylistItemsResponse) -> Self {
        let items = response
            .items
            .into_iter()
            .map(|item| VideoId::new(item.content_details.video_id))
            .collect();
        Self::new(items, response.next_page_token)
    }
}

/// Response of `GET videos?part=contentDetails`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub content_details: VideoContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    /// ISO 8601 duration such as `PT4M13S`.
    pub duration: String,
}

/// Error envelope returned alongside non-success status codes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub reason: Option<String>,
}

impl ApiErrorResponse {
    /// Human readable summary: the message, followed by the first reason
    /// code when there is one.
    pub fn summary(&self) -> Option<String> {
        let message = self.error.message.as_deref()?;
        let reason = self.error.errors.iter().find_map(|e| e.reason.as_deref());
        Some(match reason {
            Some(reason) => format!("{message} ({reason})"),
            None => message.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_items_to_page() {
        let json = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "items": [
                {"kind": "youtube#playlistItem", "contentDetails": {"videoId": "dQw4w9WgXcQ", "videoPublishedAt": "2009-10-25T06:57:33Z"}},
                {"kind": "youtube#playlistItem", "contentDetails": {"videoId": "9bZkp7q19f0"}}
            ],
            "pageInfo": {"totalResults": 2, "resultsPerPage": 50}
        }"#;
        let page: Page = serde_json::from_str::<PlaylistItemsResponse>(json).unwrap().into();

        assert_eq!(
            page.items,
            vec![VideoId::new("dQw4w9WgXcQ"), VideoId::new("9bZkp7q19f0")]
        );
        assert_eq!(page.next_token(), Some("EAAaBlBUOkNESQ"));
    }

    #[test]
    fn test_last_page_without_token() {
        let page: Page = serde_json::from_str::<PlaylistItemsResponse>(r#"{"items": []}"#)
            .unwrap()
            .into();
        assert!(page.is_empty());
        assert!(page.is_last());
    }

    #[test]
    fn test_videos_response() {
        let json = r#"{"items": [{"id": "x", "contentDetails": {"duration": "PT4M13S", "dimension": "2d"}}]}"#;
        let response: VideosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items[0].content_details.duration, "PT4M13S");

        let empty: VideosResponse = serde_json::from_str(r#"{"kind": "youtube#videoListResponse"}"#).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_api_error_summary() {
        let json = r#"{"error": {"code": 403, "message": "The request cannot be completed because you have exceeded your quota.", "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]}}"#;
        let response: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.code, Some(403));
        assert_eq!(
            response.summary().unwrap(),
            "The request cannot be completed because you have exceeded your quota. (quotaExceeded)"
        );
    }
}
