//! Document and chunk types shared across the ingestion and query pipelines

use serde::{Deserialize, Serialize};

/// A unit of source text with its origin.
///
/// The loader produces one `Document` per PDF page; `source` is the file path
/// of the PDF the page came from. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub source: String,
}

impl Document {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// A bounded-size slice of a `Document`, the atomic unit of indexing and retrieval.
///
/// Every chunk carries the `source` of its parent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub source: String,
}
