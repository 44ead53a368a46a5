use super::prompt::CompletionRequest;
use crate::error::{RelayError, RelayResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Chat-completion backend used by the summarizer
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion with `api_key` and return the generated text
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> RelayResult<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Pull the first choice's content out of a completion body
pub fn parse_completion(body: &[u8]) -> RelayResult<String> {
    let resp: ChatCompletionResponse = serde_json::from_slice(body)
        .map_err(|e| RelayError::Upstream(format!("Invalid completion response: {}", e)))?;

    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| RelayError::Upstream("No summary returned from provider".to_string()))
}

/// Provider's own `error.message`, if the body carries one
fn provider_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ProviderErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}

/// OpenAI-compatible `/chat/completions` client (Groq by default)
pub struct ChatCompletionClient {
    http: Client,
    endpoint: String,
}

impl ChatCompletionClient {
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CompletionProvider for ChatCompletionClient {
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> RelayResult<String> {
        debug!(
            "POST {} (model={}, messages={})",
            self.endpoint,
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let reason = provider_error_message(&body).unwrap_or_else(|| status.to_string());
            return Err(RelayError::Upstream(reason));
        }

        let content = parse_completion(&body)?;
        info!(
            "Completion received from {} ({} chars)",
            self.endpoint,
            content.chars().count()
        );
        Ok(content)
    }

    fn name(&self) -> &str {
        "chat-completions"
    }
}
