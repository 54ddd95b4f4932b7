//! Best-effort results.
//!
//! Stages that talk to flaky services never fail the search. They return an
//! `Outcome`, which always carries a usable value and records whether that
//! value came from the service or from the stage's deterministic fallback.

use std::fmt::Display;

use tracing::warn;

use crate::metrics;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The external call succeeded
    Generated(T),
    /// The stage degraded to its default value
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Self::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Generated(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Convert a fallible result into an `Outcome`.
pub trait OrFallback<T> {
    /// On error, log it against `stage`, count it, and use `fallback()`.
    fn or_fallback(self, stage: &'static str, fallback: impl FnOnce() -> T) -> Outcome<T>;
}

impl<T, E: Display> OrFallback<T> for Result<T, E> {
    fn or_fallback(self, stage: &'static str, fallback: impl FnOnce() -> T) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Generated(value),
            Err(e) => {
                warn!(stage, error = %e, "Falling back");
                metrics::record_fallback(stage);
                Outcome::fallback(fallback(), e.to_string())
            }
        }
    }
}
