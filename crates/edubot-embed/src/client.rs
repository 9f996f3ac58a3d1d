//! HuggingFace Inference API embedding client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

use edubot_core::{EMBEDDING_DIM, EmbeddingProvider, Error, Result};

use crate::config::HfConfig;

/// Embedding client backed by the HuggingFace feature-extraction pipeline
pub struct HfEmbeddings {
    config: HfConfig,
    client: Client,
    dimension: usize,
}

impl HfEmbeddings {
    /// Create a new embedding client from configuration
    pub fn new(config: HfConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(Self {
            config,
            client,
            dimension: EMBEDDING_DIM,
        })
    }

    /// Create a new embedding client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = HfConfig::from_env()?;
        Self::new(config)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/pipeline/feature-extraction/{}",
            self.config.api_url, self.config.model
        )
    }
}

#[async_trait]
impl EmbeddingProvider for HfEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Provider("embedding response was empty".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_token)
            .json(&json!({
                "inputs": texts,
                "options": { "wait_for_model": true },
            }))
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
                "embedding request failed ({status}): {error_text}"
            )));
        }

        let vectors: Vec<Vec<f32>> = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        if vectors.len() != texts.len() {
            return Err(Error::Provider(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        for vector in &vectors {
            if vector.len() != self.dimension {
                return Err(Error::Provider(format!(
                    "expected {}-dimension embedding, got {}",
                    self.dimension,
                    vector.len()
                )));
            }
        }

        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
