//! Scenario interpretation handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::security::sanitize_scenario;
use crate::state::AppState;

/// `?q=` query parameter shared by the text endpoints.
#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub q: Option<String>,
}

impl TextQuery {
    /// Sanitized, non-empty `q`.
    pub fn require(&self) -> ApiResult<String> {
        let q = self.q.as_deref().map(sanitize_scenario).unwrap_or_default();
        if q.is_empty() {
            return Err(ApiError::bad_request("Missing query parameter 'q'"));
        }
        Ok(q)
    }
}

#[derive(Debug, Serialize)]
pub struct InterpretResponse {
    pub queries: Vec<String>,
}

/// Expand a scenario into search phrases.
pub async fn interpret(
    State(state): State<AppState>,
    Query(params): Query<TextQuery>,
) -> ApiResult<Json<InterpretResponse>> {
    let scenario = params.require()?;
    let queries = state.pipeline.expander().expand(&scenario).await.into_value();
    Ok(Json(InterpretResponse { queries }))
}
