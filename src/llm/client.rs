//! OpenAI-compatible chat-completions client with bounded retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ModelError;
use crate::llm::ModelClient;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 1000;

#[derive(Serialize, Debug)]
struct ChatMessageBody {
    role: String,
    content: String,
}

#[derive(Serialize, Debug)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessageBody>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client from configuration. Returns `None` when credentials
    /// are absent — the caller treats that as the checked "no model"
    /// condition, not an error.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    async fn send_once(&self, body: &ChatRequest) -> Result<String, ModelError> {
        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else if e.is_connect() {
                    ModelError::Connect
                } else {
                    ModelError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 => ModelError::Auth,
                403 => ModelError::Forbidden,
                429 => ModelError::RateLimited,
                s @ 500..=599 => ModelError::Server { status: s, body },
                s => ModelError::Http { status: s, body },
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| ModelError::Malformed("no choices in response".to_string()))?;

        if content.trim().is_empty() {
            return Err(ModelError::EmptyContent);
        }

        Ok(content)
    }

    fn retryable(error: &ModelError) -> bool {
        matches!(
            error,
            ModelError::Timeout
                | ModelError::Connect
                | ModelError::RateLimited
                | ModelError::Server { .. }
                | ModelError::Network(_)
        )
    }
}

#[async_trait::async_trait]
impl ModelClient for OpenAiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessageBody {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessageBody {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens,
            temperature,
        };

        let mut last_error = ModelError::EmptyContent;
        for attempt in 1..=MAX_RETRIES {
            match self.send_once(&body).await {
                Ok(content) => return Ok(content),
                Err(e) => {
                    if attempt == MAX_RETRIES || !Self::retryable(&e) {
                        return Err(e);
                    }
                    tracing::warn!(attempt, error = %e, "model call failed, retrying");
                    last_error = e;
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64))
                        .await;
                }
            }
        }

        Err(last_error)
    }
}
