//! Vector index trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A record to be written into the vector index.
///
/// The index assigns an identifier on write; callers only supply the
/// embedding and the chunk it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub embedding: Vec<f32>,
    pub text: String,
    pub source: String,
}

/// A record as persisted in the vector index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedRecord {
    pub id: String,
    pub embedding: Vec<f32>,
    pub text: String,
    pub source: String,
}

/// A chunk returned from a similarity search, with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub source: String,
    pub score: f32,
}

/// Trait for vector indexes (e.g. Qdrant)
///
/// Cosine similarity over fixed-dimension vectors. The index name, dimension,
/// and metric must match exactly between the ingestion and query phases, or
/// retrieval silently degrades. Writes are additive; records are never
/// updated or deleted and re-ingesting a corpus appends duplicates.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Idempotently create the index for `dimension`-length cosine vectors.
    /// No-op when the index already exists.
    async fn ensure_index(&self, dimension: usize) -> Result<()>;

    /// Write records into the index, generating an identifier per record.
    /// Returns the number of records written. No partial-write rollback.
    async fn upsert(&self, records: Vec<NewRecord>) -> Result<usize>;

    /// Return the `top_k` records most similar to `vector`, most similar
    /// first. Fewer than `top_k` results when the index holds fewer records.
    async fn search(&self, vector: Vec<f32>, top_k: usize) -> Result<Vec<RetrievedChunk>>;
}
