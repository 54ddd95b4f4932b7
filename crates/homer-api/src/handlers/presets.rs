//! Static catalog handlers.

use axum::Json;
use schemars::schema::RootSchema;
use schemars::schema_for;

use homer_models::{Preset, SearchReport, PRESETS};

/// One-click scenarios for the landing page.
pub async fn presets() -> Json<&'static [Preset]> {
    Json(PRESETS)
}

/// JSON Schema of the `/api/memes` response.
pub async fn report_schema() -> Json<RootSchema> {
    Json(schema_for!(SearchReport))
}
