//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Vector width of the default embedding model
/// (`sentence-transformers/all-MiniLM-L6-v2`).
pub const EMBEDDING_DIM: usize = 384;

/// Trait for embedding providers
///
/// Turns text into fixed-dimension vectors. Implementations must be
/// deterministic for a fixed model version; the ingestion and query phases
/// rely on both sides producing vectors from the same model.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts, preserving order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Vector width produced by this provider
    fn dimension(&self) -> usize;
}
