//! OpenRouter integration for Edubot
//!
//! This crate provides the OpenRouter implementation of the ChatModel trait.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;

// Re-export core types for convenience
pub use edubot_core::{ChatMessage, ChatModel, ChatRole, Error, MessageInput, Result};
