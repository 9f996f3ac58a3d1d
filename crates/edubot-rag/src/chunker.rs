//! Overlapping-window text chunker with natural break preference

use edubot_core::{Chunk, Document};

/// Splits documents into overlapping fixed-size character windows.
///
/// Window boundaries prefer natural text breaks, in order: paragraph break,
/// sentence end, word boundary, hard character cut. A break candidate is only
/// taken if it keeps the chunk at least half the window size, so pathological
/// input cannot produce a stream of tiny chunks. Deterministic for a fixed
/// input and configuration.
#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 20,
        }
    }
}

impl TextChunker {
    /// Create a chunker with a custom window size and overlap.
    ///
    /// `chunk_overlap` must be smaller than half of `chunk_size` so that
    /// every step makes forward progress.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        assert!(
            chunk_overlap < chunk_size / 2,
            "chunk_overlap must be smaller than half the chunk size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split a single document into chunks carrying its source
    pub fn split(&self, document: &Document) -> Vec<Chunk> {
        let chars: Vec<char> = document.text.chars().collect();

        if chars.is_empty() {
            return Vec::new();
        }

        if chars.len() <= self.chunk_size {
            return vec![Chunk {
                text: document.text.clone(),
                source: document.source.clone(),
            }];
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        loop {
            let hard_end = start + self.chunk_size;
            if hard_end >= chars.len() {
                chunks.push(Chunk {
                    text: chars[start..].iter().collect(),
                    source: document.source.clone(),
                });
                break;
            }

            // Do not break before the midpoint of the window.
            let min_end = start + self.chunk_size / 2;
            let end = find_break(&chars, min_end, hard_end).unwrap_or(hard_end);

            chunks.push(Chunk {
                text: chars[start..end].iter().collect(),
                source: document.source.clone(),
            });

            start = end - self.chunk_overlap;
        }

        chunks
    }

    /// Split a sequence of documents, preserving document order
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Chunk> {
        documents.iter().flat_map(|doc| self.split(doc)).collect()
    }
}

/// Find the best break position in `chars[min_end..hard_end]`, scanning
/// backwards from the hard cut. Returns the index one past the break.
fn find_break(chars: &[char], min_end: usize, hard_end: usize) -> Option<usize> {
    // Paragraph break: a blank line.
    for i in (min_end..hard_end).rev() {
        if i >= 1 && chars[i] == '\n' && chars[i - 1] == '\n' {
            return Some(i + 1);
        }
    }

    // Sentence end: terminal punctuation followed by whitespace.
    for i in (min_end..hard_end).rev() {
        if matches!(chars[i], '.' | '!' | '?')
            && chars.get(i + 1).is_some_and(|c| c.is_whitespace())
        {
            return Some(i + 1);
        }
    }

    // Word boundary.
    for i in (min_end..hard_end).rev() {
        if chars[i].is_whitespace() {
            return Some(i + 1);
        }
    }

    None
}
