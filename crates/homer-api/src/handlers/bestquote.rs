//! Punchline rewriting handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::security::{sanitize_caption, sanitize_scenario, MAX_CAPTIONS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BestQuoteRequest {
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub captions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BestQuoteResponse {
    pub quotes: Vec<String>,
}

/// Rewrite captions into punchlines for a scenario, one per caption.
pub async fn best_quote(
    State(state): State<AppState>,
    payload: Result<Json<BestQuoteRequest>, JsonRejection>,
) -> ApiResult<Json<BestQuoteResponse>> {
    let Json(request) = payload?;

    if request.captions.len() > MAX_CAPTIONS {
        return Err(ApiError::bad_request(format!(
            "At most {MAX_CAPTIONS} captions per request"
        )));
    }

    if request.captions.is_empty() {
        return Ok(Json(BestQuoteResponse { quotes: vec![] }));
    }

    let scenario = sanitize_scenario(&request.scenario);
    let captions: Vec<String> = request.captions.iter().map(|c| sanitize_caption(c)).collect();

    let quotes = state
        .pipeline
        .punchlines()
        .select(&scenario, &captions)
        .await
        .into_value();

    Ok(Json(BestQuoteResponse { quotes }))
}
