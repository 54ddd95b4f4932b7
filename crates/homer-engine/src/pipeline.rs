//! End-to-end scenario search.
//!
//! scenario → expand → search (parallel) → aggregate → captions (parallel)
//! → punchlines → cards
//!
//! Only an unusable scenario is an error. Every external failure degrades to
//! a smaller result, and an empty result is a normal `SearchStatus::Empty`.

use std::sync::Arc;

use tracing::info;

use homer_frinkiac::RendererUrls;
use homer_models::SearchReport;

use crate::aggregate::Aggregator;
use crate::error::{EngineError, EngineResult};
use crate::expand::QueryExpander;
use crate::fanout::{fetch_captions, search_all};
use crate::metrics;
use crate::present::build_card;
use crate::punchline::PunchlineSelector;
use crate::sources::{FrameCatalog, TextGenerator};
use crate::text::pick_quote;

/// Orchestrates one scenario search.
#[derive(Clone)]
pub struct MemePipeline {
    catalog: Arc<dyn FrameCatalog>,
    expander: QueryExpander,
    punchlines: PunchlineSelector,
    urls: RendererUrls,
}

impl MemePipeline {
    /// Build a pipeline. `generator` is optional; without it both generation
    /// steps pass their input through.
    pub fn new(
        catalog: Arc<dyn FrameCatalog>,
        generator: Option<Arc<dyn TextGenerator>>,
        urls: RendererUrls,
    ) -> Self {
        Self {
            catalog,
            expander: QueryExpander::new(generator.clone()),
            punchlines: PunchlineSelector::new(generator),
            urls,
        }
    }

    pub fn expander(&self) -> &QueryExpander {
        &self.expander
    }

    pub fn punchlines(&self) -> &PunchlineSelector {
        &self.punchlines
    }

    /// Run the whole search for `scenario`, returning at most `max_results` cards.
    pub async fn run(&self, scenario: &str, max_results: usize) -> EngineResult<SearchReport> {
        let scenario = scenario.trim();
        if scenario.is_empty() {
            return Err(EngineError::InvalidInput("scenario is empty".to_string()));
        }

        let expanded = self.expander.expand(scenario).await;
        let queries_fell_back = expanded.is_fallback();
        let queries = expanded.into_value();

        let lists = search_all(self.catalog.as_ref(), &queries).await;
        let frames = Aggregator::new(max_results).aggregate(&lists);
        metrics::record_shortlist(frames.len());

        info!(
            queries = queries.len(),
            candidates = lists.iter().map(Vec::len).sum::<usize>(),
            shortlisted = frames.len(),
            "Aggregated search results"
        );

        if frames.is_empty() {
            metrics::record_cards(0);
            return Ok(SearchReport::new(scenario, queries, queries_fell_back, false, vec![]));
        }

        let captions = fetch_captions(self.catalog.as_ref(), &frames).await;
        let raw_quotes: Vec<String> = captions
            .iter()
            .map(|c| c.as_ref().map(pick_quote).unwrap_or_default())
            .collect();

        let selected = self.punchlines.select(scenario, &raw_quotes).await;
        let punchlines_fell_back = selected.is_fallback();
        let quotes = selected.into_value();

        let cards: Vec<_> = frames
            .iter()
            .zip(&captions)
            .zip(&quotes)
            .filter_map(|((frame, caption), quote)| {
                let caption = caption.as_ref().ok()?;
                build_card(&self.urls, frame, caption, quote)
            })
            .collect();

        metrics::record_cards(cards.len());
        info!(cards = cards.len(), "Search complete");

        Ok(SearchReport::new(
            scenario,
            queries,
            queries_fell_back,
            punchlines_fell_back,
            cards,
        ))
    }
}
