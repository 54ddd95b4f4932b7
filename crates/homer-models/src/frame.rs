//! Frame models.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single still moment from an episode.
///
/// Field names follow Frinkiac's JSON (`Episode`, `Timestamp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Frame {
    /// Frinkiac's internal row id, carried through but never used for identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Episode identifier (e.g. `S07E12`)
    pub episode: String,

    /// Milliseconds from the start of the episode
    pub timestamp: i64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(episode: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: None,
            episode: episode.into(),
            timestamp,
        }
    }

    /// Identity key used for deduplication.
    pub fn key(&self) -> FrameKey {
        FrameKey {
            episode: self.episode.clone(),
            timestamp: self.timestamp,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.episode, self.timestamp)
    }
}

/// Composite (episode, timestamp) key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameKey {
    pub episode: String,
    pub timestamp: i64,
}

/// Frames returned for one query, best match first.
pub type SearchResult = Vec<Frame>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_frinkiac_frame() {
        let json = r#"{"Id": 1034567, "Episode": "S05E10", "Timestamp": 461210}"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.id, Some(1034567));
        assert_eq!(frame.episode, "S05E10");
        assert_eq!(frame.timestamp, 461210);
    }

    #[test]
    fn test_key_ignores_id() {
        let mut a = Frame::new("S05E10", 461210);
        let b = Frame::new("S05E10", 461210);
        a.id = Some(7);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_serialize_skips_missing_id() {
        let json = serde_json::to_value(Frame::new("S01E01", 1000)).unwrap();
        assert_eq!(json, serde_json::json!({"Episode": "S01E01", "Timestamp": 1000}));
    }
}
