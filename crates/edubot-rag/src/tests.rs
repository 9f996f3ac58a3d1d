//! Pipeline tests over stub providers

#[cfg(test)]
mod pipeline_tests {
    use crate::{IndexBuilder, InMemoryIndex, RagChain, Retriever};
    use async_trait::async_trait;
    use edubot_core::{
        ChatMessage, ChatModel, Document, EmbeddingProvider, Error, MessageInput, Result,
    };
    use std::sync::{Arc, Mutex};

    /// Deterministic keyword-count embeddings over a tiny vocabulary.
    struct StubEmbeddings;

    const VOCAB: &[&str] = &[
        "mitochondria",
        "powerhouse",
        "cell",
        "photosynthesis",
        "chlorophyll",
        "ribosome",
        "protein",
        "energy",
    ];

    impl StubEmbeddings {
        fn vector(text: &str) -> Vec<f32> {
            let lowered = text.to_lowercase();
            VOCAB
                .iter()
                .map(|word| lowered.matches(word).count() as f32)
                .collect()
        }
    }

    #[async_trait]
    impl EmbeddingProvider for StubEmbeddings {
        async fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(Self::vector(text))
        }

        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|t| Self::vector(t)).collect())
        }

        fn dimension(&self) -> usize {
            VOCAB.len()
        }
    }

    /// Chat model that records the messages it receives and returns a canned
    /// reply.
    struct StubChatModel {
        reply: String,
        received: Mutex<Vec<ChatMessage>>,
    }

    impl StubChatModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                received: Mutex::new(Vec::new()),
            }
        }

        fn received(&self) -> Vec<ChatMessage> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for StubChatModel {
        async fn complete(&self, messages: Vec<MessageInput>) -> Result<String> {
            let normalized: Vec<ChatMessage> =
                messages.into_iter().map(MessageInput::normalize).collect();
            *self.received.lock().unwrap() = normalized;
            Ok(self.reply.clone())
        }

        fn model_id(&self) -> &str {
            "stub/test-model"
        }
    }

    /// Chat model that always fails like an unauthorized provider.
    struct FailingChatModel;

    #[async_trait]
    impl ChatModel for FailingChatModel {
        async fn complete(&self, _messages: Vec<MessageInput>) -> Result<String> {
            Err(Error::Provider(
                "OpenRouter API error (401 Unauthorized): invalid token".to_string(),
            ))
        }

        fn model_id(&self) -> &str {
            "stub/failing-model"
        }
    }

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(
                "The mitochondria is the powerhouse of the cell.",
                "data/cell.pdf",
            ),
            Document::new(
                "Photosynthesis uses chlorophyll to capture light energy.",
                "data/plants.pdf",
            ),
        ]
    }

    async fn seeded_index(
        embeddings: Arc<StubEmbeddings>,
    ) -> Arc<InMemoryIndex> {
        let index = Arc::new(InMemoryIndex::new());
        let builder = IndexBuilder::new(embeddings, index.clone());
        builder.build(&corpus()).await.unwrap();
        index
    }

    #[tokio::test]
    async fn short_document_ingests_as_one_record() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = Arc::new(InMemoryIndex::new());
        let builder = IndexBuilder::new(embeddings, index.clone());

        let documents = vec![Document::new(
            "The mitochondria is the powerhouse of the cell.",
            "data/cell.pdf",
        )];
        let report = builder.build(&documents).await.unwrap();

        assert_eq!(report.documents, 1);
        assert_eq!(report.chunks_indexed, 1);
        assert_eq!(index.len(), 1);
    }

    #[tokio::test]
    async fn long_document_ingests_as_many_records() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = Arc::new(InMemoryIndex::new());
        let builder = IndexBuilder::new(embeddings.clone(), index.clone());

        let text = "Every cell converts energy through its mitochondria. ".repeat(40);
        let report = builder
            .build(&[Document::new(text, "data/long.pdf")])
            .await
            .unwrap();

        assert!(report.chunks_indexed > 1);
        assert_eq!(index.len(), report.chunks_indexed);
    }

    #[tokio::test]
    async fn retrieval_ranks_the_matching_chunk_first() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = seeded_index(embeddings.clone()).await;

        let retriever = Retriever::new(embeddings, index);
        let results = retriever
            .retrieve("What is the powerhouse of the cell?")
            .await
            .unwrap();

        assert!(!results.is_empty());
        assert!(results[0].text.contains("mitochondria"));
        assert_eq!(results[0].source, "data/cell.pdf");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn chain_answers_from_retrieved_context() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = seeded_index(embeddings.clone()).await;

        let llm = Arc::new(StubChatModel::new(
            "The mitochondria is the powerhouse of the cell.",
        ));
        let chain = RagChain::new(Retriever::new(embeddings, index), llm.clone());

        let answer = chain
            .answer("What is the powerhouse of the cell?")
            .await
            .unwrap();
        assert!(answer.contains("mitochondria"));

        let received = llm.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].role.as_str(), "system");
        assert!(received[0].content.contains("mitochondria"));
        assert_eq!(received[1].role.as_str(), "user");
        assert_eq!(received[1].content, "What is the powerhouse of the cell?");
    }

    #[tokio::test]
    async fn structured_reply_is_unwrapped() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = seeded_index(embeddings.clone()).await;

        let llm = Arc::new(StubChatModel::new(r#"{"answer": "The mitochondria."}"#));
        let chain = RagChain::new(Retriever::new(embeddings, index), llm);

        let answer = chain.answer("powerhouse?").await.unwrap();
        assert_eq!(answer, "The mitochondria.");
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_provider_error() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = seeded_index(embeddings.clone()).await;

        let chain = RagChain::new(
            Retriever::new(embeddings, index),
            Arc::new(FailingChatModel),
        );

        let result = chain.answer("What is the powerhouse of the cell?").await;
        assert!(matches!(result, Err(Error::Provider(_))));
    }

    #[tokio::test]
    async fn empty_question_is_rejected_before_retrieval() {
        let embeddings = Arc::new(StubEmbeddings);
        let index = Arc::new(InMemoryIndex::new());
        let chain = RagChain::new(
            Retriever::new(embeddings, index),
            Arc::new(FailingChatModel),
        );

        let result = chain.answer("   ").await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
