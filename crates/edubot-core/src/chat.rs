//! Chat message types and normalization of heterogeneous message inputs

use serde::{Deserialize, Serialize};

/// Canonical chat roles accepted by chat-completion APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    /// Parse a role string, falling back to `User` for anything unrecognized.
    pub fn parse_or_user(role: &str) -> Self {
        match role {
            "system" => ChatRole::System,
            "assistant" => ChatRole::Assistant,
            "user" => ChatRole::User,
            _ => ChatRole::User,
        }
    }
}

/// A message in canonical `{role, content}` form, ready for the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }
}

/// A message-like input before normalization.
///
/// Callers may hand the chat model plain strings, tagged message objects
/// (`human`/`ai`/`system` kinds), loose role/content mappings, or arbitrary
/// JSON values. `normalize` folds all of these into a `ChatMessage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageInput {
    PlainText(String),
    Tagged {
        kind: String,
        content: String,
    },
    RoleContent {
        role: Option<String>,
        content: Option<String>,
    },
    Opaque(serde_json::Value),
}

impl MessageInput {
    /// Normalize into a canonical `ChatMessage`.
    ///
    /// Total over all variants; first matching rule wins:
    /// 1. plain text becomes a `user` message,
    /// 2. tagged messages map `human` -> `user`, `ai` -> `assistant`,
    ///    `system` -> `system`, and any other tag to `user`,
    /// 3. role/content mappings use their role (defaulting to `user`) and
    ///    content (defaulting to empty),
    /// 4. anything else becomes a `user` message holding its string form.
    pub fn normalize(self) -> ChatMessage {
        match self {
            MessageInput::PlainText(content) => ChatMessage::user(content),
            MessageInput::Tagged { kind, content } => {
                let role = match kind.as_str() {
                    "human" => ChatRole::User,
                    "ai" => ChatRole::Assistant,
                    "system" => ChatRole::System,
                    _ => ChatRole::User,
                };
                ChatMessage::new(role, content)
            }
            MessageInput::RoleContent { role, content } => {
                let role = role
                    .as_deref()
                    .map(ChatRole::parse_or_user)
                    .unwrap_or(ChatRole::User);
                ChatMessage::new(role, content.unwrap_or_default())
            }
            MessageInput::Opaque(value) => {
                let content = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                ChatMessage::user(content)
            }
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        MessageInput::Tagged {
            kind: "system".to_string(),
            content: content.into(),
        }
    }
}

impl From<&str> for MessageInput {
    fn from(text: &str) -> Self {
        MessageInput::PlainText(text.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(text: String) -> Self {
        MessageInput::PlainText(text)
    }
}
