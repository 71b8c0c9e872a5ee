//! `videos` endpoint: per-video duration lookup.

use playtime_core::{iso8601, ElapsedTime, Error, Result, VideoId};
use tracing::debug;

use crate::{types::VideosResponse, YouTubeClient};

impl YouTubeClient {
    /// Get the duration of a single video.
    pub async fn video_duration(&self, video: &VideoId) -> Result<ElapsedTime> {
        let params = [("part", "contentDetails"), ("id", video.as_str())];
        let response: VideosResponse = self.get("videos", &params).await?;

        let duration = parse_video_duration(video, &response)?;
        debug!("Video {video}: {duration}");
        Ok(duration)
    }
}

/// Pull the duration of `video` out of a `videos` response.
///
/// Private, deleted and region-blocked videos come back as an empty item
/// list, reported as [`Error::ItemNotFound`].
pub fn parse_video_duration(video: &VideoId, response: &VideosResponse) -> Result<ElapsedTime> {
    let item = response
        .items
        .first()
        .ok_or_else(|| Error::ItemNotFound(video.to_string()))?;
    iso8601::parse_duration(&item.content_details.duration)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response(json: &str) -> VideosResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_video_duration() {
        let video = VideoId::new("dQw4w9WgXcQ");
        let r = response(r#"{"items": [{"contentDetails": {"duration": "PT3M33S"}}]}"#);
        assert_eq!(parse_video_duration(&video, &r).unwrap().as_seconds(), 213);
    }

    #[test]
    fn test_video_not_found() {
        let video = VideoId::new("deleted0000");
        let r = response(r#"{"items": []}"#);
        assert!(matches!(
            parse_video_duration(&video, &r),
            Err(Error::ItemNotFound(id)) if id == "deleted0000"
        ));
    }

    #[test]
    fn test_malformed_duration() {
        let video = VideoId::new("x");
        let r = response(r#"{"items": [{"contentDetails": {"duration": "PTxM"}}]}"#);
        assert!(matches!(
            parse_video_duration(&video, &r),
            Err(Error::MalformedDuration(_))
        ));
    }
}
