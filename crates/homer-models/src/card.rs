//! Meme card and search report models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A shortlisted frame paired with its display quote and renderer URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MemeCard {
    /// Episode identifier
    pub episode: String,

    /// Milliseconds from the start of the episode
    pub timestamp: i64,

    /// Episode title (empty when unknown)
    pub title: String,

    /// Quote rendered onto the frame
    pub quote: String,

    /// Captioned meme image
    pub meme_url: String,

    /// Plain frame, used when the captioned render fails to load
    pub image_url: String,
}

/// Terminal state of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// At least one card was rendered
    Found,
    /// Aggregation or presentation produced nothing to show
    Empty,
}

/// Result of one end-to-end scenario search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchReport {
    pub status: SearchStatus,

    /// Scenario as submitted
    pub scenario: String,

    /// Search phrases actually sent to Frinkiac
    pub queries: Vec<String>,

    /// True when the queries are the pass-through fallback
    pub queries_fell_back: bool,

    /// True when quotes are raw captions rather than rewritten punchlines
    pub punchlines_fell_back: bool,

    /// Cards in display order
    pub cards: Vec<MemeCard>,
}

impl SearchReport {
    /// Build a report, deriving the status from the card count.
    pub fn new(
        scenario: impl Into<String>,
        queries: Vec<String>,
        queries_fell_back: bool,
        punchlines_fell_back: bool,
        cards: Vec<MemeCard>,
    ) -> Self {
        let status = if cards.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Found
        };

        Self {
            status,
            scenario: scenario.into(),
            queries,
            queries_fell_back,
            punchlines_fell_back,
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status == SearchStatus::Empty
    }
}
