//! OpenRouter configuration

use serde::{Deserialize, Serialize};
use std::env;

use edubot_core::{Error, Result};

/// Configuration for the OpenRouter chat client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl OpenRouterConfig {
    /// Default chat model used for answer generation
    pub const DEFAULT_MODEL: &'static str = "openai/gpt-4o";

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENROUTER_API_KEY").map_err(|_| {
            Error::Configuration("OPENROUTER_API_KEY environment variable not found".to_string())
        })?;

        let api_url = env::var("OPENROUTER_API_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());

        let model =
            env::var("OPENROUTER_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: "https://openrouter.ai/api/v1".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }
}
