//! Vector index builder: chunk, embed, and persist documents

use std::sync::Arc;

use edubot_core::{Document, EmbeddingProvider, Error, NewRecord, Result, VectorIndex};

use crate::chunker::TextChunker;

/// Summary of one ingestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub documents: usize,
    pub chunks_indexed: usize,
}

/// Builds the vector index from a document corpus.
///
/// Runs ensure-index, chunking, embedding, and upsert in strict sequence.
/// Any failure aborts the run; previously written batches are not rolled
/// back. Re-running against an existing index appends duplicate records.
pub struct IndexBuilder<E: EmbeddingProvider, V: VectorIndex> {
    embeddings: Arc<E>,
    index: Arc<V>,
    chunker: TextChunker,
    batch_size: usize,
}

impl<E: EmbeddingProvider, V: VectorIndex> IndexBuilder<E, V> {
    const DEFAULT_BATCH_SIZE: usize = 32;

    /// Create an index builder with the default chunker (500-char windows,
    /// 20-char overlap)
    pub fn new(embeddings: Arc<E>, index: Arc<V>) -> Self {
        Self {
            embeddings,
            index,
            chunker: TextChunker::default(),
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }

    /// Create with a custom chunker
    pub fn with_chunker(embeddings: Arc<E>, index: Arc<V>, chunker: TextChunker) -> Self {
        Self {
            embeddings,
            index,
            chunker,
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }

    /// Run the full ingestion pipeline over `documents`
    pub async fn build(&self, documents: &[Document]) -> Result<IngestReport> {
        self.index
            .ensure_index(self.embeddings.dimension())
            .await?;

        let chunks = self.chunker.split_documents(documents);
        let mut chunks_indexed = 0;

        for batch in chunks.chunks(self.batch_size) {
            let texts: Vec<String> = batch.iter().map(|chunk| chunk.text.clone()).collect();
            let vectors = self.embeddings.embed_batch(&texts).await?;

            if vectors.len() != batch.len() {
                return Err(Error::Provider(format!(
                    "embedding batch size mismatch: sent {}, received {}",
                    batch.len(),
                    vectors.len()
                )));
            }

            let records: Vec<NewRecord> = batch
                .iter()
                .zip(vectors)
                .map(|(chunk, embedding)| NewRecord {
                    embedding,
                    text: chunk.text.clone(),
                    source: chunk.source.clone(),
                })
                .collect();

            chunks_indexed += self.index.upsert(records).await?;
            tracing::debug!(chunks_indexed, "indexed batch");
        }

        tracing::info!(
            documents = documents.len(),
            chunks_indexed,
            "ingestion complete"
        );

        Ok(IngestReport {
            documents: documents.len(),
            chunks_indexed,
        })
    }
}
