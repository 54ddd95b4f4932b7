//! Concurrent calls with isolated failures.

use futures::future::join_all;
use tracing::warn;

use homer_models::{CaptionSet, Frame};

use crate::error::EngineResult;
use crate::sources::FrameCatalog;

/// Run every query concurrently. A failed query contributes an empty list.
pub async fn search_all(catalog: &dyn FrameCatalog, queries: &[String]) -> Vec<Vec<Frame>> {
    let searches = queries.iter().map(|query| async move {
        match catalog.search(query).await {
            Ok(frames) => frames,
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed; query contributes nothing");
                Vec::new()
            }
        }
    });

    join_all(searches).await
}

/// Fetch captions for every frame concurrently, one result per frame.
pub async fn fetch_captions(
    catalog: &dyn FrameCatalog,
    frames: &[Frame],
) -> Vec<EngineResult<CaptionSet>> {
    let fetches = frames.iter().map(|frame| async move {
        let result = catalog.caption(frame).await;
        if let Err(e) = &result {
            warn!(frame = %frame, error = %e, "Caption fetch failed; frame will be dropped");
        }
        result
    });

    join_all(fetches).await
}
