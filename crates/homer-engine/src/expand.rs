//! Scenario → subtitle-style search phrases.

use std::sync::Arc;

use tracing::{debug, info};

use homer_llm::extract_string_array;
use homer_llm::prompts::{expand_queries_prompt, EXPAND_MAX_TOKENS};

use crate::error::{EngineError, EngineResult};
use crate::outcome::{OrFallback, Outcome};
use crate::sources::TextGenerator;

/// Never send more than this many queries to Frinkiac per search.
pub const MAX_QUERIES: usize = 5;

/// Expands a free-text scenario into several short search queries.
///
/// Without a generator, or whenever generation fails, the scenario itself is
/// the only query.
#[derive(Clone)]
pub struct QueryExpander {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl QueryExpander {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub async fn expand(&self, scenario: &str) -> Outcome<Vec<String>> {
        let passthrough = || vec![scenario.to_string()];

        let Some(generator) = &self.generator else {
            debug!("No text generator configured; passing scenario through");
            return Outcome::fallback(passthrough(), "text generation not configured");
        };

        let outcome = expand_with(generator.as_ref(), scenario)
            .await
            .or_fallback("expand", passthrough);

        if let Outcome::Generated(queries) = &outcome {
            info!(count = queries.len(), queries = ?queries, "Expanded scenario");
        }
        outcome
    }
}

async fn expand_with(generator: &dyn TextGenerator, scenario: &str) -> EngineResult<Vec<String>> {
    let text = generator
        .generate(&expand_queries_prompt(scenario), EXPAND_MAX_TOKENS)
        .await?;

    let queries: Vec<String> = extract_string_array(&text)
        .ok_or_else(|| EngineError::Malformed("no JSON array in response".to_string()))?
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .take(MAX_QUERIES)
        .collect();

    if queries.is_empty() {
        return Err(EngineError::Malformed("empty query list".to_string()));
    }

    Ok(queries)
}
