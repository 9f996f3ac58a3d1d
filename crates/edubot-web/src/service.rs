//! Query service abstraction between the router and the RAG chain

use async_trait::async_trait;

use edubot_core::{ChatModel, EmbeddingProvider, Result, VectorIndex};
use edubot_rag::RagChain;

/// The single operation the HTTP boundary needs from the pipeline
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String>;
}

#[async_trait]
impl<E, V, L> QueryService for RagChain<E, V, L>
where
    E: EmbeddingProvider + 'static,
    V: VectorIndex + 'static,
    L: ChatModel + 'static,
{
    async fn answer(&self, question: &str) -> Result<String> {
        RagChain::answer(self, question).await
    }
}
