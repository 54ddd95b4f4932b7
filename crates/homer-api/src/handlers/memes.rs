//! Full scenario search handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use homer_models::SearchReport;

use crate::error::{ApiError, ApiResult};
use crate::security::sanitize_scenario;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MemesQuery {
    pub q: Option<String>,
    pub max: Option<usize>,
}

/// Scenario → ranked meme cards.
pub async fn memes(
    State(state): State<AppState>,
    Query(params): Query<MemesQuery>,
) -> ApiResult<Json<SearchReport>> {
    let scenario = params.q.as_deref().map(sanitize_scenario).unwrap_or_default();
    if scenario.is_empty() {
        return Err(ApiError::bad_request("Missing query parameter 'q'"));
    }

    let max_results = state.config.clamp_results(params.max);
    info!(scenario = %scenario, max_results, "Meme search requested");

    let report = state.pipeline.run(&scenario, max_results).await?;
    Ok(Json(report))
}
