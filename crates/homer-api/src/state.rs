//! Application state.

use std::sync::Arc;

use anyhow::Context;

use homer_engine::{FrameCatalog, MemePipeline, TextGenerator};
use homer_frinkiac::FrinkiacClient;
use homer_llm::AnthropicClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub frinkiac: Arc<FrinkiacClient>,
    pub pipeline: Arc<MemePipeline>,
    /// Model name when text generation is configured
    pub llm_model: Option<String>,
}

impl AppState {
    /// Create application state from environment variables.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let frinkiac = FrinkiacClient::from_env().context("failed to build Frinkiac client")?;
        let llm = AnthropicClient::from_env().context("failed to build Anthropic client")?;
        Ok(Self::from_parts(config, frinkiac, llm))
    }

    /// Assemble state from already-built clients.
    pub fn from_parts(
        config: ApiConfig,
        frinkiac: FrinkiacClient,
        llm: Option<AnthropicClient>,
    ) -> Self {
        let frinkiac = Arc::new(frinkiac);
        let urls = frinkiac.urls().clone();
        let llm_model = llm.as_ref().map(|c| c.model().to_string());

        let catalog: Arc<dyn FrameCatalog> = frinkiac.clone();
        let generator = llm.map(|c| Arc::new(c) as Arc<dyn TextGenerator>);

        Self {
            config,
            frinkiac,
            pipeline: Arc::new(MemePipeline::new(catalog, generator, urls)),
            llm_model,
        }
    }
}
