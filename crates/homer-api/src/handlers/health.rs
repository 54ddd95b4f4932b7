//! Health check handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub frinkiac: CheckStatus,
    pub llm: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl CheckStatus {
    fn ok(latency_ms: Option<u64>, detail: Option<String>) -> Self {
        Self {
            status: "ok".to_string(),
            detail,
            latency_ms,
        }
    }

    fn error(msg: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            detail: Some(msg.into()),
            latency_ms: None,
        }
    }

    fn disabled(msg: impl Into<String>) -> Self {
        Self {
            status: "disabled".to_string(),
            detail: Some(msg.into()),
            latency_ms: None,
        }
    }
}

/// Readiness check endpoint (readiness probe).
///
/// Only Frinkiac is required. A missing LLM key is reported but does not
/// make the service unready, since every generation step has a fallback.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let frinkiac = {
        let start = Instant::now();
        if state.frinkiac.health_check().await {
            CheckStatus::ok(Some(start.elapsed().as_millis() as u64), None)
        } else {
            CheckStatus::error("Frinkiac did not answer successfully")
        }
    };

    let llm = match &state.llm_model {
        Some(model) => CheckStatus::ok(None, Some(model.clone())),
        None => CheckStatus::disabled("ANTHROPIC_API_KEY not set"),
    };

    let is_ready = frinkiac.status == "ok";
    let response = ReadinessResponse {
        status: if is_ready { "ready" } else { "degraded" }.to_string(),
        checks: ReadinessChecks { frinkiac, llm },
    };

    if is_ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
