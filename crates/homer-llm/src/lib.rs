//! Anthropic Messages API client and prompt templates.
//!
//! This crate provides:
//! - A single-turn completion client (`AnthropicClient`)
//! - Extraction of JSON string arrays from free-form model output
//! - Prompt templates for query expansion and punchline rewriting
//!
//! Running without `ANTHROPIC_API_KEY` is a supported mode; callers get
//! `LlmError::NotConfigured` and fall back to pass-through behavior.

pub mod client;
pub mod error;
pub mod extract;
pub mod prompts;

pub use client::{AnthropicClient, LlmConfig};
pub use error::{LlmError, LlmResult};
pub use extract::extract_string_array;
