//! Vector index implementations

use async_trait::async_trait;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder, UpsertPointsBuilder,
    VectorParamsBuilder, value::Kind,
};
use qdrant_client::{Payload, Qdrant};
use std::env;
use std::sync::RwLock;
use uuid::Uuid;

use edubot_core::{Error, IndexedRecord, NewRecord, Result, RetrievedChunk, VectorIndex};

/// Configuration for the Qdrant-backed vector index
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub collection: String,
}

impl QdrantConfig {
    /// Index name shared by the ingestion and query phases
    pub const DEFAULT_COLLECTION: &'static str = "educational-chatbot";

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("QDRANT_URL").unwrap_or_else(|_| "http://localhost:6334".to_string());
        let api_key = env::var("QDRANT_API_KEY").ok();
        let collection =
            env::var("QDRANT_COLLECTION").unwrap_or_else(|_| Self::DEFAULT_COLLECTION.to_string());

        Ok(Self {
            url,
            api_key,
            collection,
        })
    }
}

/// Qdrant vector index over cosine similarity
pub struct QdrantIndex {
    client: Qdrant,
    collection: String,
}

impl QdrantIndex {
    /// Create a new Qdrant index client from configuration
    pub fn new(config: QdrantConfig) -> Result<Self> {
        let mut builder = Qdrant::from_url(&config.url);
        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Index(e.to_string()))?;

        Ok(Self {
            client,
            collection: config.collection,
        })
    }

    /// Create a new Qdrant index client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(QdrantConfig::from_env()?)
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn payload_str(
        payload: &std::collections::HashMap<String, qdrant_client::qdrant::Value>,
        key: &str,
    ) -> String {
        match payload.get(key).and_then(|value| value.kind.as_ref()) {
            Some(Kind::StringValue(s)) => s.clone(),
            _ => String::new(),
        }
    }
}

#[async_trait]
impl VectorIndex for QdrantIndex {
    async fn ensure_index(&self, dimension: usize) -> Result<()> {
        let exists = self
            .client
            .collection_exists(&self.collection)
            .await
            .map_err(|e| Error::Index(e.to_string()))?;

        if exists {
            return Ok(());
        }

        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(dimension as u64, Distance::Cosine)),
            )
            .await
            .map_err(|e| Error::Index(format!("failed to create collection: {e}")))?;

        tracing::info!(collection = %self.collection, dimension, "created vector index");
        Ok(())
    }

    async fn upsert(&self, records: Vec<NewRecord>) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let points: Vec<PointStruct> = records
            .into_iter()
            .map(|record| {
                let mut payload = Payload::new();
                payload.insert("text", record.text);
                payload.insert("source", record.source);
                PointStruct::new(Uuid::new_v4().to_string(), record.embedding, payload)
            })
            .collect();

        let count = points.len();

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
            .await
            .map_err(|e| Error::Index(e.to_string()))?;

        Ok(count)
    }

    async fn search(&self, vector: Vec<f32>, top_k: usize) -> Result<Vec<RetrievedChunk>> {
        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, vector, top_k as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| Error::Index(e.to_string()))?;

        Ok(response
            .result
            .into_iter()
            .map(|point| RetrievedChunk {
                text: Self::payload_str(&point.payload, "text"),
                source: Self::payload_str(&point.payload, "source"),
                score: point.score,
            })
            .collect())
    }
}

/// In-memory vector index used by tests and offline runs.
///
/// Same contract as the Qdrant index: cosine similarity, additive writes,
/// descending-score search.
pub struct InMemoryIndex {
    records: RwLock<Vec<IndexedRecord>>,
    dimension: RwLock<Option<usize>>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            dimension: RwLock::new(None),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

impl Default for InMemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    async fn ensure_index(&self, dimension: usize) -> Result<()> {
        let mut dim = self
            .dimension
            .write()
            .map_err(|e| Error::Index(format!("lock error: {e}")))?;

        match *dim {
            Some(existing) if existing != dimension => Err(Error::Index(format!(
                "index already exists with dimension {existing}, requested {dimension}"
            ))),
            _ => {
                *dim = Some(dimension);
                Ok(())
            }
        }
    }

    async fn upsert(&self, new_records: Vec<NewRecord>) -> Result<usize> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::Index(format!("lock error: {e}")))?;

        let count = new_records.len();
        for record in new_records {
            records.push(IndexedRecord {
                id: Uuid::new_v4().to_string(),
                embedding: record.embedding,
                text: record.text,
                source: record.source,
            });
        }

        Ok(count)
    }

    async fn search(&self, vector: Vec<f32>, top_k: usize) -> Result<Vec<RetrievedChunk>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::Index(format!("lock error: {e}")))?;

        let mut scored: Vec<RetrievedChunk> = records
            .iter()
            .map(|record| RetrievedChunk {
                text: record.text.clone(),
                source: record.source.clone(),
                score: Self::cosine_similarity(&vector, &record.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);

        Ok(scored)
    }
}
