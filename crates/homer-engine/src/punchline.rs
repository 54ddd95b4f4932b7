//! Raw subtitle spans → short punchlines.

use std::sync::Arc;

use tracing::{debug, info};

use homer_llm::extract_string_array;
use homer_llm::prompts::{punchlines_prompt, PUNCHLINE_MAX_TOKENS};

use crate::error::{EngineError, EngineResult};
use crate::outcome::{OrFallback, Outcome};
use crate::sources::TextGenerator;
use crate::text::{normalize, truncate_words, MAX_QUOTE_CHARS};

/// Rewrites raw captions into punchier quotes, one per position.
///
/// The output always has the same length as the input. Positions the model
/// leaves empty keep their raw caption, and any failure returns the raw
/// captions unchanged.
#[derive(Clone)]
pub struct PunchlineSelector {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl PunchlineSelector {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub async fn select(&self, scenario: &str, captions: &[String]) -> Outcome<Vec<String>> {
        let raw = || captions.to_vec();

        let Some(generator) = &self.generator else {
            debug!("No text generator configured; keeping raw captions");
            return Outcome::fallback(raw(), "text generation not configured");
        };

        if captions.iter().all(|c| c.is_empty()) {
            return Outcome::fallback(raw(), "no captions to rewrite");
        }

        let outcome = select_with(generator.as_ref(), scenario, captions)
            .await
            .or_fallback("punchline", raw);

        if !outcome.is_fallback() {
            info!(count = captions.len(), "Rewrote captions into punchlines");
        }
        outcome
    }
}

async fn select_with(
    generator: &dyn TextGenerator,
    scenario: &str,
    captions: &[String],
) -> EngineResult<Vec<String>> {
    let prompt = punchlines_prompt(scenario, captions, MAX_QUOTE_CHARS);
    let text = generator.generate(&prompt, PUNCHLINE_MAX_TOKENS).await?;

    let quotes = extract_string_array(&text)
        .ok_or_else(|| EngineError::Malformed("no JSON array in response".to_string()))?;

    if quotes.len() != captions.len() {
        return Err(EngineError::Malformed(format!(
            "expected {} quotes, got {}",
            captions.len(),
            quotes.len()
        )));
    }

    Ok(quotes
        .into_iter()
        .zip(captions)
        .map(|(quote, raw)| merge(&quote, raw))
        .collect())
}

/// Pick the final text for one position.
fn merge(quote: &str, raw: &str) -> String {
    let quote = normalize(quote);
    if quote.is_empty() {
        raw.to_string()
    } else {
        truncate_words(&quote, MAX_QUOTE_CHARS)
    }
}
