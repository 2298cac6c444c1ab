//! LLM module - generation service integration
//!
//! Provides the chat-provider abstraction, the OpenAI client, and the
//! AIDA email drafter built on top of them.

pub mod drafter;
pub mod openai;
pub mod traits;

pub use drafter::EmailDrafter;
pub use openai::OpenAiClient;
pub use traits::ChatProvider;
