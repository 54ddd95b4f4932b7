//! External collaborators the pipeline depends on.

use async_trait::async_trait;

use homer_frinkiac::FrinkiacClient;
use homer_llm::AnthropicClient;
use homer_models::{CaptionSet, Frame};

use crate::error::EngineResult;
use crate::metrics;

/// Frame search and caption lookup.
#[async_trait]
pub trait FrameCatalog: Send + Sync {
    /// Frames matching `query`, best first.
    async fn search(&self, query: &str) -> EngineResult<Vec<Frame>>;

    /// Subtitle context for one frame.
    async fn caption(&self, frame: &Frame) -> EngineResult<CaptionSet>;
}

/// Single-prompt text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> EngineResult<String>;
}

#[async_trait]
impl FrameCatalog for FrinkiacClient {
    async fn search(&self, query: &str) -> EngineResult<Vec<Frame>> {
        let result = FrinkiacClient::search(self, query).await;
        metrics::record_upstream_call("frinkiac_search", result.is_ok());
        Ok(result?)
    }

    async fn caption(&self, frame: &Frame) -> EngineResult<CaptionSet> {
        let result = FrinkiacClient::caption(self, &frame.episode, frame.timestamp).await;
        metrics::record_upstream_call("frinkiac_caption", result.is_ok());
        Ok(result?)
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> EngineResult<String> {
        let result = self.complete(prompt, max_tokens).await;
        metrics::record_upstream_call("anthropic", result.is_ok());
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use homer_frinkiac::FrinkiacConfig;
    use homer_models::SearchStatus;
    use wiremock::matchers::{path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::pipeline::MemePipeline;

    #[tokio::test]
    async fn test_frinkiac_backed_pipeline() {
        let server = MockServer::start().await;
        Mock::given(path("/api/search"))
            .and(query_param("q", "donuts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"Id": 1, "Episode": "S05E10", "Timestamp": 461210},
                {"Episode": "S05E10"},
                {"Id": 2, "Episode": "S07E04", "Timestamp": 12000}
            ])))
            .mount(&server)
            .await;
        Mock::given(path("/api/caption"))
            .and(query_param("e", "S05E10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Episode": {"Key": "S05E10", "Title": "$pringfield"},
                "Subtitles": [{"Content": "Mmm... donuts.", "StartTimestamp": 459000}]
            })))
            .mount(&server)
            .await;
        Mock::given(path("/api/caption"))
            .and(query_param("e", "S07E04"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = FrinkiacClient::new(FrinkiacConfig {
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap();
        let urls = client.urls().clone();
        let pipeline = MemePipeline::new(Arc::new(client), None, urls);

        let report = pipeline.run("donuts", 12).await.unwrap();
        assert_eq!(report.status, SearchStatus::Found);
        assert_eq!(report.cards.len(), 1);
        assert_eq!(report.cards[0].title, "$pringfield");
        assert!(report.cards[0]
            .meme_url
            .starts_with(&format!("{}/meme/S05E10/461210.jpg", server.uri())));
    }
}
