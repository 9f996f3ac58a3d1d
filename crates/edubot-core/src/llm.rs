//! Chat model trait

use async_trait::async_trait;

use crate::chat::MessageInput;
use crate::Result;

/// Trait for hosted chat-completion models (e.g. OpenRouter, OpenAI)
///
/// Implementations normalize the message inputs, issue a single synchronous
/// request, and return the top-choice answer text. Streaming and
/// multi-candidate responses are out of scope.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run a chat completion over the given messages and return the answer text
    async fn complete(&self, messages: Vec<MessageInput>) -> Result<String>;

    /// The model identifier requests are issued against
    fn model_id(&self) -> &str;
}
