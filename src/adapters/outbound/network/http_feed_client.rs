use crate::ports::outbound::FeedSource;
use crate::shared::error::DashboardError;
use crate::shared::security::{validate_payload_size, MAX_FEED_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use std::time::Duration;

/// Default request timeout for feed fetches
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HttpFeedClient adapter for fetching the evidence feed over HTTP(S)
///
/// This adapter implements the FeedSource port. Every fetch is a fresh GET
/// sent with no-cache headers, so a reload always sees the producer's
/// current feed.
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedClient {
    /// Creates a client for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("evidence-dashboard/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(Self::no_cache_headers())
            .build()?;

        Ok(Self::from_client(url, client))
    }

    /// Wraps an already configured reqwest client
    pub fn from_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn no_cache_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers
    }

    fn unavailable(&self, status: Option<u16>, details: impl Into<String>) -> anyhow::Error {
        DashboardError::FeedUnavailable {
            location: self.url.clone(),
            status,
            details: details.into(),
        }
        .into()
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.unavailable(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(self.unavailable(Some(status.as_u16()), reason));
        }

        // Security: reject oversized feeds before buffering the body
        if let Some(length) = response.content_length() {
            validate_payload_size(length, &self.url, MAX_FEED_SIZE)
                .map_err(|e| self.unavailable(None, e.to_string()))?;
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.unavailable(None, format!("failed to read response body: {}", e)))?;
        validate_payload_size(body.len() as u64, &self.url, MAX_FEED_SIZE)
            .map_err(|e| self.unavailable(None, e.to_string()))?;

        String::from_utf8(body.to_vec()).map_err(|e| {
            DashboardError::FeedMalformed {
                location: self.url.clone(),
                details: format!("invalid UTF-8: {}", e.utf8_error()),
            }
            .into()
        })
    }
}
