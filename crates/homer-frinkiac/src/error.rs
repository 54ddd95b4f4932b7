//! Frinkiac client error types.

use thiserror::Error;

pub type FrinkiacResult<T> = Result<T, FrinkiacError>;

#[derive(Debug, Error)]
pub enum FrinkiacError {
    #[error("Frinkiac {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrinkiacError {
    /// True when the upstream service could not be reached or answered with a failure.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, FrinkiacError::InvalidUrl(_))
    }
}
