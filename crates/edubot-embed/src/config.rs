//! Embedding provider configuration

use serde::{Deserialize, Serialize};
use std::env;

use edubot_core::{Error, Result};

/// Configuration for the HuggingFace Inference API embedding client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfConfig {
    pub api_token: String,
    pub api_url: String,
    pub model: String,
}

impl HfConfig {
    /// Default embedding model; its vector width must match the vector index.
    pub const DEFAULT_MODEL: &'static str = "sentence-transformers/all-MiniLM-L6-v2";

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = env::var("HF_API_TOKEN")
            .or_else(|_| env::var("HUGGINGFACE_API_TOKEN"))
            .map_err(|_| {
                Error::Configuration(
                    "HF_API_TOKEN or HUGGINGFACE_API_TOKEN environment variable not found"
                        .to_string(),
                )
            })?;

        let api_url = env::var("HF_API_URL")
            .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string());

        let model = env::var("HF_EMBED_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        Ok(Self {
            api_token,
            api_url,
            model,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            api_url: "https://api-inference.huggingface.co".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }
}
