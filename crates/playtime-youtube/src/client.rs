//! `YouTube` Data API client implementation.

use std::sync::Arc;

use dashmap::DashMap;
use playtime_core::{
    Catalog, ElapsedTime, Error, FetchError, Page, PlaylistId, Result, VideoId,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::types::ApiErrorResponse;

/// `YouTube` Data API v3 client.
///
/// Cloning is cheap; clones share the HTTP connection pool and the response
/// cache.
#[derive(Clone)]
pub struct YouTubeClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// API key sent as the `key` query parameter.
    api_key: String,
    /// Endpoint root, page size and timeout.
    pub(crate) config: ClientConfig,
    /// Successful response bodies for this run, keyed by request digest.
    cache: Arc<DashMap<String, Vec<u8>>>,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("config", &self.config)
            .field("cache_size", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Create a client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with explicit settings.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidArgument("API key is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            config,
            cache: Arc::new(DashMap::new()),
        })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request to a Data API endpoint.
    pub(crate) async fn get<R>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params)?;
        let cache_key = self.cache_key(&url);

        let cached = self.cache.get(&cache_key).map(|entry| entry.value().clone());
        if let Some(cached) = cached {
            debug!("Cache hit for {endpoint}");
            return decode(&cached);
        }

        let mut logged = url.clone();
        logged.query_pairs_mut().clear().extend_pairs(params);
        debug!("GET {logged}");

        let body = self.do_request(url).await.inspect_err(|e| {
            warn!("Request to {endpoint} failed: {e}");
        })?;

        let value = decode(&body)?;
        self.cache.insert(cache_key, body);
        Ok(value)
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .config
            .base_url
            .join(endpoint)
            .map_err(|e| Error::InvalidArgument(format!("endpoint {endpoint:?}: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn do_request(&self, url: Url) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::ConnectionFailed(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body).into());
        }

        response.bytes().await.map(|b| b.to_vec()).map_err(|e| {
            FetchError::Network(format!("Failed to read response body: {e}")).into()
        })
    }

    fn cache_key(&self, url: &Url) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_str().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Clear the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Get the number of cached entries.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Map a non-success response to [`FetchError::Status`], preferring the API's
/// own error summary over the raw body.
fn status_error(status: u16, body: String) -> FetchError {
    let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .ok()
        .and_then(|e| e.summary())
        .unwrap_or(body);
    FetchError::Status { status, message }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    serde_json::from_slice(body)
        .map_err(|e| FetchError::Decode(format!("Failed to parse response: {e}")).into())
}

impl Catalog for YouTubeClient {
    async fn fetch_page(&self, playlist: &PlaylistId, page_token: Option<&str>) -> Result<Page> {
        self.playlist_items(playlist, page_token).await
    }

    async fn resolve_duration(&self, video: &VideoId) -> Result<ElapsedTime> {
        self.video_duration(video).await
    }
}
