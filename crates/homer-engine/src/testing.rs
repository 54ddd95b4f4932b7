//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use homer_models::{CaptionSet, EpisodeInfo, Frame, Subtitle};

use homer_frinkiac::FrinkiacError;
use homer_llm::LlmError;

use crate::error::{EngineError, EngineResult};
use crate::sources::{FrameCatalog, TextGenerator};

/// Replies with a fixed answer (or error) and counts calls.
pub struct ScriptedGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _max_tokens: u32) -> EngineResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply.clone().map_err(|message| {
            EngineError::Generation(LlmError::Api {
                status: 503,
                message,
            })
        })
    }
}

/// Catalog backed by maps; unknown queries and frames fail.
#[derive(Default)]
pub struct MapCatalog {
    pub results: HashMap<String, Vec<Frame>>,
    pub captions: HashMap<(String, i64), CaptionSet>,
}

impl MapCatalog {
    pub fn with_results(mut self, query: &str, frames: Vec<Frame>) -> Self {
        self.results.insert(query.to_string(), frames);
        self
    }

    pub fn with_caption(mut self, frame: &Frame, lines: &[&str]) -> Self {
        let subtitles = lines
            .iter()
            .enumerate()
            .map(|(i, line)| Subtitle::new(*line, frame.timestamp + i as i64 * 1000, 0))
            .collect();
        let episode = EpisodeInfo {
            key: frame.episode.clone(),
            title: format!("Episode {}", frame.episode),
            ..Default::default()
        };
        self.captions.insert(
            (frame.episode.clone(), frame.timestamp),
            CaptionSet::new(episode, subtitles),
        );
        self
    }
}

#[async_trait]
impl FrameCatalog for MapCatalog {
    async fn search(&self, query: &str) -> EngineResult<Vec<Frame>> {
        self.results
            .get(query)
            .cloned()
            .ok_or_else(|| not_found(format!("no results scripted for {query}")))
    }

    async fn caption(&self, frame: &Frame) -> EngineResult<CaptionSet> {
        self.captions
            .get(&(frame.episode.clone(), frame.timestamp))
            .cloned()
            .ok_or_else(|| not_found(format!("no caption scripted for {frame}")))
    }
}

fn not_found(body: String) -> EngineError {
    FrinkiacError::Status { status: 404, body }.into()
}
