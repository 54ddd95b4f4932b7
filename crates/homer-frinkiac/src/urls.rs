//! Renderer URL construction.
//!
//! Frinkiac composites captions server-side; the only protocol is the URL
//! shape, so this module never performs I/O.

use url::Url;

use crate::error::{FrinkiacError, FrinkiacResult};

/// Builds image and meme URLs against a Frinkiac base URL.
#[derive(Debug, Clone)]
pub struct RendererUrls {
    base_url: String,
}

impl RendererUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Captioned meme render. `lines` is the already-wrapped overlay text.
    pub fn meme_url(&self, episode: &str, timestamp: i64, lines: &str) -> String {
        format!(
            "{}/meme/{}/{}.jpg?lines={}",
            self.base_url,
            urlencoding::encode(episode),
            timestamp,
            urlencoding::encode(lines)
        )
    }

    /// Plain medium-size frame image.
    pub fn image_url(&self, episode: &str, timestamp: i64) -> String {
        format!(
            "{}/img/{}/{}/medium.jpg",
            self.base_url,
            urlencoding::encode(episode),
            timestamp
        )
    }

    /// Check that `candidate` points at the same origin as the base URL.
    pub fn ensure_same_origin(&self, candidate: &str) -> FrinkiacResult<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| FrinkiacError::InvalidUrl(format!("bad base URL: {}", e)))?;
        let parsed = Url::parse(candidate.trim())
            .map_err(|e| FrinkiacError::InvalidUrl(format!("{}: {}", candidate, e)))?;

        if parsed.origin() != base.origin() {
            return Err(FrinkiacError::InvalidUrl(format!(
                "{} is not served by {}",
                candidate, self.base_url
            )));
        }

        Ok(parsed)
    }
}
