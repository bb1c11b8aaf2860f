//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: nothing else talks to the completion provider directly.
//! Targets an OpenAI-compatible `/chat/completions` endpoint (OpenRouter by
//! default). One request per call: no retries, no streaming.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
}

impl ChatCompletionResponse {
    /// Message content of the first choice, or `""` when any link is missing.
    pub fn first_content(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A backend able to answer a chat-completion request.
///
/// `ResumeAnalyzer` holds an `Arc<dyn ChatCompletion>`; production wires in
/// `LlmClient`, tests wire in canned replies.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletionResponse, LlmError>;
}

/// HTTP client for the configured completion endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    timeout: std::time::Duration,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(config.request_timeout).build()?,
            api_key: config.api_key().map(str::to_string),
            endpoint: format!("{}/chat/completions", config.openrouter_base_url),
            timeout: config.request_timeout,
        })
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| self.classify(e))?;

        debug!(
            model = %request.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            prompt_tokens = completion.usage.as_ref().and_then(|u| u.prompt_tokens),
            completion_tokens = completion.usage.as_ref().and_then(|u| u.completion_tokens),
            "LLM call succeeded"
        );

        Ok(completion)
    }
}

impl LlmClient {
    fn classify(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Http(err)
        }
    }
}
