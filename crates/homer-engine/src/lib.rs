//! Scenario search engine.
//!
//! Turns a free-text scenario into a ranked list of captioned Simpsons frames:
//! - Query expansion through an optional text generator
//! - Concurrent Frinkiac searches merged by rank fusion
//! - Caption lookup and punchline rewriting
//! - Card assembly with overlay-safe quotes

pub mod aggregate;
pub mod error;
pub mod expand;
pub mod fanout;
pub mod metrics;
pub mod outcome;
pub mod pipeline;
pub mod present;
pub mod punchline;
pub mod sources;
pub mod text;

#[cfg(test)]
mod testing;

pub use aggregate::{aggregate, Aggregator, DEFAULT_MAX_RESULTS, MIN_GAP_MS};
pub use error::{EngineError, EngineResult};
pub use expand::{QueryExpander, MAX_QUERIES};
pub use outcome::{OrFallback, Outcome};
pub use pipeline::MemePipeline;
pub use punchline::PunchlineSelector;
pub use sources::{FrameCatalog, TextGenerator};
