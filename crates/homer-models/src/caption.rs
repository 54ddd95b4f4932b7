//! Caption models (Frinkiac `/api/caption` payload).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One subtitle line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Subtitle {
    /// Spoken text
    #[serde(default)]
    pub content: String,

    /// Start offset in milliseconds
    #[serde(default)]
    pub start_timestamp: i64,

    /// End offset in milliseconds
    #[serde(default)]
    pub end_timestamp: i64,
}

impl Subtitle {
    pub fn new(content: impl Into<String>, start_timestamp: i64, end_timestamp: i64) -> Self {
        Self {
            content: content.into(),
            start_timestamp,
            end_timestamp,
        }
    }
}

/// Episode metadata attached to a caption set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EpisodeInfo {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_air_date: Option<String>,
}

/// Subtitle lines covering a frame's context, plus episode metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CaptionSet {
    #[serde(default)]
    pub episode: EpisodeInfo,

    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
}

impl CaptionSet {
    pub fn new(episode: EpisodeInfo, subtitles: Vec<Subtitle>) -> Self {
        Self { episode, subtitles }
    }

    /// Episode title, empty when Frinkiac omitted it.
    pub fn title(&self) -> &str {
        &self.episode.title
    }
}
