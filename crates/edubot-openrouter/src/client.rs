//! OpenRouter chat client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use edubot_core::{ChatMessage, ChatModel, Error, MessageInput, Result};

use crate::config::OpenRouterConfig;

/// OpenRouter chat-completions client
pub struct OpenRouterClient {
    config: OpenRouterConfig,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client from configuration
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new OpenRouter client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenRouterConfig::from_env()?;
        Self::new(config)
    }

    /// Normalize heterogeneous message inputs into canonical wire messages
    pub(crate) fn map_messages(inputs: Vec<MessageInput>) -> Vec<ChatMessage> {
        inputs.into_iter().map(MessageInput::normalize).collect()
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(&self, messages: Vec<MessageInput>) -> Result<String> {
        let mapped = Self::map_messages(messages);

        let request_body = ChatRequest {
            model: &self.config.model,
            messages: &mapped,
        };

        let url = format!("{}/chat/completions", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Provider(format!(
                "OpenRouter API error ({status}): {error_text}"
            )));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("OpenRouter response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
