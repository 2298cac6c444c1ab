//! Chat provider trait for abstracting the generation backend
//!
//! Lets the email drafter run against a test double instead of the
//! hosted service.

use async_trait::async_trait;

use crate::core::{Message, Result};

/// Trait for chat-completion providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a single completion for the given messages
    async fn chat(&self, messages: &[Message]) -> Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
