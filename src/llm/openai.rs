//! OpenAI chat-completion client
//!
//! Async HTTP client for the chat/completions endpoint. Only the first
//! returned choice is used.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Config, Message, PostulaError, Result};
use crate::llm::traits::ChatProvider;

/// Chat-completion API client
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

/// Chat-completion response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

/// Message inside a completion choice
#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiClient {
    /// Create a client from configuration
    ///
    /// Fails when no API credential is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .openai
            .api_key
            .clone()
            .ok_or_else(|| PostulaError::config("OPENAI_API_KEY not set"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai.timeout_secs))
            .build()
            .map_err(PostulaError::Http)?;

        Ok(Self {
            client,
            base_url: config.openai.base_url.clone(),
            api_key,
            model: config.openai.model.clone(),
        })
    }

    /// Model identifier this client sends
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn chat(&self, messages: &[Message]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PostulaError::service(format!(
                "chat completion failed with {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PostulaError::service("completion list was empty"))?;

        Ok(choice.message.content.trim().to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
