//! RAG (Retrieval-Augmented Generation) pipeline for Edubot
//!
//! This crate provides the ingestion pipeline (PDF loading, chunking, index
//! building) and the query pipeline (retrieval and answer orchestration).

mod chunker;
mod engine;
mod indexer;
mod loader;
mod retriever;
mod vector_store;

#[cfg(test)]
mod tests;

pub use chunker::TextChunker;
pub use engine::{RagChain, SYSTEM_PROMPT};
pub use indexer::{IndexBuilder, IngestReport};
pub use loader::{LoadedPage, load_pdf_dir, strip_page_metadata};
pub use retriever::Retriever;
pub use vector_store::{InMemoryIndex, QdrantConfig, QdrantIndex};

// Re-export core types for convenience
pub use edubot_core::{
    Chunk, Document, EmbeddingProvider, Error, NewRecord, Result, RetrievedChunk, VectorIndex,
};
