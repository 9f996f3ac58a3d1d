//! Similarity retriever over the vector index

use std::sync::Arc;

use edubot_core::{EmbeddingProvider, Result, RetrievedChunk, VectorIndex};

/// Retrieves the chunks most similar to a query.
///
/// Embeds the query, then runs a cosine similarity search against the
/// configured index. Results come back most similar first; ties fall in the
/// store's internal order, which is stable but arbitrary.
pub struct Retriever<E: EmbeddingProvider, V: VectorIndex> {
    embeddings: Arc<E>,
    index: Arc<V>,
    top_k: usize,
}

impl<E: EmbeddingProvider, V: VectorIndex> Retriever<E, V> {
    /// Default number of chunks retrieved per query
    pub const DEFAULT_TOP_K: usize = 3;

    pub fn new(embeddings: Arc<E>, index: Arc<V>) -> Self {
        Self {
            embeddings,
            index,
            top_k: Self::DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Return the top-K chunks most similar to `query`
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedChunk>> {
        let vector = self.embeddings.embed(query).await?;
        self.index.search(vector, self.top_k).await
    }
}
