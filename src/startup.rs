//! Explicit startup: build the pipeline components from environment
//! configuration once, then hand them to the callers. No ambient globals.

use anyhow::Result;
use std::sync::Arc;

use edubot_embed::HfEmbeddings;
use edubot_openrouter::OpenRouterClient;
use edubot_rag::QdrantIndex;

/// Immutable bundle of the external collaborators the pipelines need
pub struct AppContext {
    pub embeddings: Arc<HfEmbeddings>,
    pub index: Arc<QdrantIndex>,
    pub llm: Arc<OpenRouterClient>,
}

impl AppContext {
    /// Read configuration from the environment and construct every client.
    /// Missing required secrets fail here, before any pipeline runs.
    pub fn from_env() -> Result<Self> {
        let embeddings = Arc::new(HfEmbeddings::from_env()?);
        let index = Arc::new(QdrantIndex::from_env()?);
        let llm = Arc::new(OpenRouterClient::from_env()?);

        Ok(Self {
            embeddings,
            index,
            llm,
        })
    }
}
