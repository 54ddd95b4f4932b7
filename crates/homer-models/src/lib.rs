//! Shared data models for Homer's Meme Machine.
//!
//! This crate provides Serde-serializable types for:
//! - Frames returned by the Frinkiac search API
//! - Caption sets (subtitles + episode metadata)
//! - Meme cards and search reports returned to clients
//! - Preset one-click scenarios

pub mod caption;
pub mod card;
pub mod frame;
pub mod preset;

// Re-export common types
pub use caption::{CaptionSet, EpisodeInfo, Subtitle};
pub use card::{MemeCard, SearchReport, SearchStatus};
pub use frame::{Frame, FrameKey, SearchResult};
pub use preset::{Preset, PRESETS};
