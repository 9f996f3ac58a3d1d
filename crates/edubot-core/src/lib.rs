//! Core traits and types for Edubot
//!
//! This crate defines the fundamental traits and types used across the Edubot system.
//! It provides capability-facing interfaces for embedding providers, chat models,
//! and vector indexes, making the pipeline test-friendly and extensible.

pub mod chat;
pub mod document;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod vector_index;

pub use chat::{ChatMessage, ChatRole, MessageInput};
pub use document::{Chunk, Document};
pub use embedding::{EMBEDDING_DIM, EmbeddingProvider};
pub use error::{Error, Result};
pub use llm::ChatModel;
pub use vector_index::{IndexedRecord, NewRecord, RetrievedChunk, VectorIndex};
