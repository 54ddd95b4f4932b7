//! Anthropic Messages API client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LlmError, LlmResult};

/// Configuration for the Anthropic client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key; `None` means the generation steps run in pass-through mode
    pub api_key: Option<String>,
    /// Base URL for API requests
    pub base_url: String,
    /// Model used for every call
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: AnthropicClient::DEFAULT_BASE_URL.to_string(),
            model: AnthropicClient::DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

impl LlmConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            base_url: std::env::var("ANTHROPIC_URL")
                .unwrap_or_else(|_| AnthropicClient::DEFAULT_BASE_URL.to_string()),
            model: std::env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| AnthropicClient::DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("ANTHROPIC_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            ),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Single-turn text completion against the Anthropic Messages API.
pub struct AnthropicClient {
    api_key: String,
    base_url: String,
    model: String,
    http: Client,
}

impl AnthropicClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";
    pub const DEFAULT_MODEL: &'static str = "claude-haiku-4-5-20251001";
    pub const API_VERSION: &'static str = "2023-06-01";

    /// Create a client. Fails with `NotConfigured` when no key is set.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let api_key = config.api_key.ok_or(LlmError::NotConfigured)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            http,
        })
    }

    /// Create from environment variables; `None` when no key is configured.
    pub fn from_env() -> LlmResult<Option<Self>> {
        match Self::new(LlmConfig::from_env()) {
            Ok(client) => Ok(Some(client)),
            Err(LlmError::NotConfigured) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one user message and return the concatenated text blocks.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> LlmResult<String> {
        let url = format!("{}/v1/messages", self.base_url);
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, max_tokens, "Sending Anthropic request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", Self::API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)?;
        let text: String = parsed
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .filter_map(|block| block.text)
            .collect();

        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse("no text content".to_string()));
        }

        Ok(text)
    }
}
