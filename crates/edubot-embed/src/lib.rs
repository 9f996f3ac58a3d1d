//! Hosted embedding provider for Edubot
//!
//! This crate provides the HuggingFace Inference API implementation of the
//! EmbeddingProvider trait, defaulting to the MiniLM sentence-transformer.

mod client;
mod config;


pub use client::HfEmbeddings;
pub use config::HfConfig;

// Re-export core types for convenience
pub use edubot_core::{EMBEDDING_DIM, EmbeddingProvider, Error, Result};
