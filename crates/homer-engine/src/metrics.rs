//! Pipeline metrics.

use metrics::{counter, histogram};

/// Metric names as constants for consistency.
pub mod names {
    pub const UPSTREAM_CALLS_TOTAL: &str = "homer_upstream_calls_total";
    pub const FALLBACKS_TOTAL: &str = "homer_fallbacks_total";
    pub const SHORTLIST_SIZE: &str = "homer_shortlist_size";
    pub const CARDS_RENDERED: &str = "homer_cards_rendered";
}

/// Record one call to an external service.
pub fn record_upstream_call(service: &'static str, success: bool) {
    let labels = [
        ("service", service.to_string()),
        ("outcome", if success { "ok" } else { "error" }.to_string()),
    ];
    counter!(names::UPSTREAM_CALLS_TOTAL, &labels).increment(1);
}

/// Record a stage degrading to its fallback value.
pub fn record_fallback(stage: &'static str) {
    let labels = [("stage", stage.to_string())];
    counter!(names::FALLBACKS_TOTAL, &labels).increment(1);
}

pub fn record_shortlist(size: usize) {
    histogram!(names::SHORTLIST_SIZE).record(size as f64);
}

pub fn record_cards(count: usize) {
    histogram!(names::CARDS_RENDERED).record(count as f64);
}
