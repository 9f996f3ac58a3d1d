//! RAG chain: retrieval plus answer generation

use std::sync::Arc;

use edubot_core::{ChatModel, EmbeddingProvider, Error, MessageInput, Result, RetrievedChunk,
    VectorIndex};

use crate::retriever::Retriever;

/// Instruction template for the answering model. `{context}` is replaced
/// with the retrieved chunk texts.
pub const SYSTEM_PROMPT: &str = "You are an assistant for answering questions about educational \
material. Use the following pieces of retrieved context to answer the question. If the answer is \
not in the context, say that you don't know. Keep the answer concise.\n\nContext:\n{context}";

/// Composes the retriever and the chat model into a single
/// question-answering operation.
///
/// Holds no per-request state; each call runs retrieval, prompt assembly,
/// and generation in strict sequence.
pub struct RagChain<E: EmbeddingProvider, V: VectorIndex, L: ChatModel> {
    retriever: Retriever<E, V>,
    llm: Arc<L>,
}

impl<E: EmbeddingProvider, V: VectorIndex, L: ChatModel> RagChain<E, V, L> {
    pub fn new(retriever: Retriever<E, V>, llm: Arc<L>) -> Self {
        Self { retriever, llm }
    }

    /// Answer `question` using retrieved context
    pub async fn answer(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(Error::InvalidInput("question must not be empty".to_string()));
        }

        let chunks = self.retriever.retrieve(question).await?;
        let context = build_context(&chunks);
        let system_prompt = SYSTEM_PROMPT.replace("{context}", &context);

        let messages = vec![
            MessageInput::system(system_prompt),
            MessageInput::from(question),
        ];

        let raw = self.llm.complete(messages).await?;
        Ok(extract_answer(&raw))
    }

    /// Return the retrieved context chunks for `question` without invoking
    /// the chat model
    pub async fn retrieve(&self, question: &str) -> Result<Vec<RetrievedChunk>> {
        self.retriever.retrieve(question).await
    }
}

/// Interpolate retrieved chunks into a numbered context block
pub(crate) fn build_context(chunks: &[RetrievedChunk]) -> String {
    if chunks.is_empty() {
        return String::new();
    }

    let mut context = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        context.push_str(&format!("{}. [{}] {}\n\n", i + 1, chunk.source, chunk.text));
    }
    context
}

/// Unwrap a structured model reply: prefer an `answer` field, then
/// `output_text`, otherwise return the raw text unchanged.
pub(crate) fn extract_answer(raw: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(raw) {
        if let Some(answer) = map.get("answer").and_then(|v| v.as_str()) {
            return answer.to_string();
        }
        if let Some(output) = map.get("output_text").and_then(|v| v.as_str()) {
            return output.to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_numbered_and_sourced() {
        let chunks = vec![
            RetrievedChunk {
                text: "The mitochondria is the powerhouse of the cell.".to_string(),
                source: "data/cell.pdf".to_string(),
                score: 0.9,
            },
            RetrievedChunk {
                text: "Ribosomes synthesize proteins.".to_string(),
                source: "data/cell.pdf".to_string(),
                score: 0.5,
            },
        ];

        let context = build_context(&chunks);
        assert!(context.starts_with("1. [data/cell.pdf] The mitochondria"));
        assert!(context.contains("2. [data/cell.pdf] Ribosomes"));
    }

    #[test]
    fn empty_retrieval_gives_empty_context() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn extract_answer_prefers_answer_field() {
        assert_eq!(
            extract_answer(r#"{"answer": "42", "output_text": "other"}"#),
            "42"
        );
        assert_eq!(extract_answer(r#"{"output_text": "fallback"}"#), "fallback");
        assert_eq!(extract_answer(r#"{"unrelated": true}"#), r#"{"unrelated": true}"#);
        assert_eq!(extract_answer("plain text answer"), "plain text answer");
    }
}
