//! Prometheus metrics for the API server.

use std::time::Instant;

use anyhow::Context;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and return the handle that renders it.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    pub const HTTP_REQUESTS_TOTAL: &str = "homer_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "homer_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "homer_http_requests_in_flight";
    pub const RATE_LIMIT_HITS_TOTAL: &str = "homer_rate_limit_hits_total";
    pub const DOWNLOADS_TOTAL: &str = "homer_downloads_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", route_label(path).to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", route_label(endpoint).to_string())];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Record a proxied image download.
pub fn record_download(success: bool) {
    let labels = [("outcome", if success { "ok" } else { "error" }.to_string())];
    counter!(names::DOWNLOADS_TOTAL, &labels).increment(1);
}

/// Collapse a request path into a bounded label set.
///
/// Static file paths are arbitrary, so they share one label.
fn route_label(path: &str) -> &str {
    const KNOWN: &[&str] = &[
        "/api/interpret",
        "/api/search",
        "/api/caption",
        "/api/download",
        "/api/bestquote",
        "/api/memes",
        "/api/presets",
        "/api/schema",
        "/health",
        "/healthz",
        "/ready",
        "/metrics",
    ];

    let trimmed = path.trim_end_matches('/');
    KNOWN
        .iter()
        .find(|known| **known == trimmed)
        .copied()
        .unwrap_or(if trimmed.starts_with("/api/") { "/api/other" } else { "static" })
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    record_http_request(&method, &path, status, start.elapsed().as_secs_f64());

    response
}
