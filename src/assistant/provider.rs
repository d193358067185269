// src/assistant/provider.rs

use crate::assistant::CompletionError;
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

/// Generative text boundary: one prompt in, one answer out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Calls an OpenAI-compatible chat completions endpoint.
pub struct OpenAiCompletionProvider {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompletionProvider {
    pub fn new(config: &AppConfig) -> Result<Self, CompletionError> {
        let http_client = Client::builder()
            .timeout(config.completion_timeout)
            .build()
            .map_err(|e| CompletionError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.completion_base_url.trim_end_matches('/').to_string(),
            model: config.completion_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Config("COMPLETION_API_KEY not set".into()))?;

        let start = Instant::now();
        let request = ChatRequest {
            model: &self.model,
            messages: [RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timed_out = e.is_timeout(), "Completion request failed");
                CompletionError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api(format!("HTTP {status}: {error_text}")));
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CompletionError::Api("Empty completion".into()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis() as u64,
            "Completion received"
        );

        Ok(content)
    }
}
