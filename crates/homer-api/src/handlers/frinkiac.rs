//! Frinkiac proxy handlers.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::warn;

use homer_models::{CaptionSet, Frame};

use crate::error::{ApiError, ApiResult};
use crate::handlers::interpret::TextQuery;
use crate::metrics;
use crate::security::{is_valid_episode_id, parse_timestamp};
use crate::state::AppState;

/// Filename offered to the browser for downloaded memes.
pub const DOWNLOAD_FILENAME: &str = "simpsons-meme.jpg";

/// Search subtitles, at most `MAX_SEARCH_RESULTS` frames.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<TextQuery>,
) -> ApiResult<Json<Vec<Frame>>> {
    let q = params.require()?;
    let frames = state.frinkiac.search(&q).await.map_err(|e| {
        warn!(query = %q, error = %e, "Search proxy failed");
        ApiError::from(e)
    })?;
    Ok(Json(frames))
}

#[derive(Debug, Deserialize)]
pub struct CaptionQuery {
    pub e: Option<String>,
    pub t: Option<String>,
}

/// Caption lookup for one frame.
pub async fn caption(
    State(state): State<AppState>,
    Query(params): Query<CaptionQuery>,
) -> ApiResult<Json<CaptionSet>> {
    let episode = params
        .e
        .as_deref()
        .map(str::trim)
        .filter(|e| is_valid_episode_id(e))
        .ok_or_else(|| ApiError::bad_request("Missing or invalid parameter 'e'"))?;
    let timestamp = params
        .t
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or_else(|| ApiError::bad_request("Missing or invalid parameter 't'"))?;

    let caption = state.frinkiac.caption(episode, timestamp).await.map_err(|e| {
        warn!(episode = %episode, timestamp, error = %e, "Caption proxy failed");
        ApiError::from(e)
    })?;
    Ok(Json(caption))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub url: Option<String>,
}

/// Re-serve a Frinkiac image as a file download.
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<DownloadQuery>,
) -> ApiResult<impl IntoResponse> {
    let url = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing query parameter 'url'"))?;

    let result = state.frinkiac.download_image(&url).await;
    metrics::record_download(result.is_ok());
    let bytes = result.map_err(|e| {
        warn!(url = %url, error = %e, "Download proxy failed");
        ApiError::from(e)
    })?;

    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        bytes,
    ))
}
