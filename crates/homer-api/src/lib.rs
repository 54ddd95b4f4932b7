//! Axum HTTP API for the Simpsons meme search.
//!
//! This crate provides:
//! - Scenario search, interpretation and punchline endpoints
//! - Frinkiac search/caption/image proxies
//! - Rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod security;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
