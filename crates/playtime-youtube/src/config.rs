//! Client configuration for the `YouTube` Data API.

use std::time::Duration;

use playtime_core::{Error, Result};
use url::Url;

/// Public endpoint of the `YouTube` Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Largest page the `playlistItems` endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request a [`crate::YouTubeClient`] makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root. Always ends in `/` so endpoint names join beneath it.
    pub base_url: Url,
    /// Items requested per `playlistItems` page.
    pub page_size: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Point the client at a different API root, e.g. a local mirror.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::InvalidArgument(format!("base URL {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidArgument(format!(
                "base URL {base_url:?} cannot carry endpoint paths"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(Error::InvalidArgument(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::InvalidArgument(
                "timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    #[allow(clippy::unwrap_used)] // DEFAULT_BASE_URL is a valid constant
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            page_size: MAX_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("playtime/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/youtube/v3")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/youtube/v3/");
        assert_eq!(
            config.base_url.join("videos").unwrap().as_str(),
            "http://127.0.0.1:8080/youtube/v3/videos"
        );
    }

    #[test]
    fn test_invalid_settings() {
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
        assert!(ClientConfig::default().with_base_url("mailto:x@y.z").is_err());
        assert!(ClientConfig::default().with_page_size(0).is_err());
        assert!(ClientConfig::default().with_page_size(51).is_err());
        assert_eq!(ClientConfig::default().with_page_size(10).unwrap().page_size, 10);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let config = ClientConfig::default()
            .with_timeout(Duration::from_millis(1500))
            .unwrap();
        assert_eq!(config.timeout, Duration::from_millis(1500));
    }
}
