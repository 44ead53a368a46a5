//! Summarization relay
//!
//! Turns a transcript into a Markdown meeting summary with one round trip to
//! a chat-completion provider:
//! - `prompt` builds the fixed instruction template
//! - `provider` holds the `CompletionProvider` seam and the HTTP client

pub mod prompt;
pub mod provider;

pub use prompt::{build_messages, ChatMessage, CompletionRequest, Role, SUMMARY_SECTIONS};
pub use provider::{ChatCompletionClient, CompletionProvider};

use crate::config::LlmConfig;
use crate::error::{RelayError, RelayResult};
use std::sync::Arc;
use tracing::info;

pub struct Summarizer {
    provider: Arc<dyn CompletionProvider>,
    api_key: Option<String>,
    model: String,
}

impl Summarizer {
    pub fn new(config: &LlmConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Summarizer backed by the HTTP chat-completions client
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config, Arc::new(ChatCompletionClient::new(&config.base_url)))
    }

    /// Summarize `text` (already checked non-blank by the caller)
    pub async fn summarize(&self, text: &str, prompt: Option<&str>) -> RelayResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| RelayError::Configuration("GROQ_API_KEY is not configured".to_string()))?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: build_messages(text, prompt),
            temperature: prompt::TEMPERATURE,
        };

        info!(
            "Summarizing transcript ({} chars) with {} via {}",
            text.chars().count(),
            self.model,
            self.provider.name()
        );

        self.provider.complete(api_key, &request).await
    }
}
