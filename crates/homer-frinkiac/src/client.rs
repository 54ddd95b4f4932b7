//! Frinkiac HTTP client.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{header, Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use homer_models::{CaptionSet, Frame};

use crate::error::{FrinkiacError, FrinkiacResult};
use crate::urls::RendererUrls;

/// Frinkiac returns long tails of weak matches; only the head is useful.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Configuration for the Frinkiac client.
#[derive(Debug, Clone)]
pub struct FrinkiacConfig {
    /// Base URL of the service
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header (Frinkiac rejects some default agents)
    pub user_agent: String,
}

impl Default for FrinkiacConfig {
    fn default() -> Self {
        Self {
            base_url: "https://frinkiac.com".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

impl FrinkiacConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FRINKIAC_URL")
                .unwrap_or_else(|_| "https://frinkiac.com".to_string()),
            timeout: Duration::from_secs(
                std::env::var("FRINKIAC_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(15),
            ),
            user_agent: std::env::var("FRINKIAC_USER_AGENT")
                .unwrap_or_else(|_| "Mozilla/5.0".to_string()),
        }
    }
}

/// Client for the Frinkiac search, caption and image endpoints.
pub struct FrinkiacClient {
    http: Client,
    urls: RendererUrls,
}

impl FrinkiacClient {
    /// Create a new Frinkiac client.
    pub fn new(config: FrinkiacConfig) -> FrinkiacResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(FrinkiacError::Network)?;

        Ok(Self {
            http,
            urls: RendererUrls::new(config.base_url),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> FrinkiacResult<Self> {
        Self::new(FrinkiacConfig::from_env())
    }

    /// URL builder sharing this client's base URL.
    pub fn urls(&self) -> &RendererUrls {
        &self.urls
    }

    /// Search subtitles for `query`, best match first.
    ///
    /// A body that is not a JSON array yields an empty list, and entries
    /// without an episode/timestamp are skipped.
    pub async fn search(&self, query: &str) -> FrinkiacResult<Vec<Frame>> {
        let url = format!("{}/api/search", self.urls.base_url());
        debug!(query = %query, "Searching Frinkiac");

        let response = self.http.get(&url).query(&[("q", query)]).send().await?;
        let body: Value = Self::check(response).await?.json().await?;

        let Value::Array(entries) = body else {
            warn!(query = %query, "Frinkiac search returned a non-array body");
            return Ok(Vec::new());
        };

        let frames: Vec<Frame> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .take(MAX_SEARCH_RESULTS)
            .collect();

        debug!(query = %query, count = frames.len(), "Frinkiac search complete");
        Ok(frames)
    }

    /// Fetch the subtitle lines around a frame.
    pub async fn caption(&self, episode: &str, timestamp: i64) -> FrinkiacResult<CaptionSet> {
        let url = format!("{}/api/caption", self.urls.base_url());
        let timestamp = timestamp.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("e", episode), ("t", timestamp.as_str())])
            .send()
            .await?;

        let text = Self::check(response).await?.text().await?;
        let caption: CaptionSet = serde_json::from_str(&text)?;
        Ok(caption)
    }

    /// Download an image served by Frinkiac. Other origins are rejected.
    pub async fn download_image(&self, url: &str) -> FrinkiacResult<Bytes> {
        let url = self.urls.ensure_same_origin(url)?;

        let response = Self::check(self.http.get(url).send().await?).await?;
        if !is_image(response.headers().get(header::CONTENT_TYPE)) {
            return Err(FrinkiacError::InvalidResponse("not an image".to_string()));
        }

        let bytes = response.bytes().await?;

        if bytes.is_empty() {
            return Err(FrinkiacError::InvalidResponse("empty image body".to_string()));
        }

        Ok(bytes)
    }

    /// Check that Frinkiac answers at all. Failures are logged, never returned.
    pub async fn health_check(&self) -> bool {
        match self.http.head(self.urls.base_url()).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Frinkiac health check failed: {}", response.status());
                false
            }
            Err(e) => {
                warn!("Frinkiac health check error: {}", e);
                false
            }
        }
    }

    async fn check(response: Response) -> FrinkiacResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(FrinkiacError::Status { status, body })
    }
}

fn is_image(content_type: Option<&header::HeaderValue>) -> bool {
    content_type
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("image/"))
        .unwrap_or(false)
}
