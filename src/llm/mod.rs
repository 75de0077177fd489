//! LLM — chat-completions adapter for the assistant.
//!
//! DESIGN
//! ======
//! The responder depends only on the [`LlmChat`] trait. The concrete
//! [`OpenRouterClient`] is built once at startup from [`LlmConfig`] and
//! shared behind an `Arc`; tests substitute in-memory mocks.

pub mod config;
pub mod openrouter;
pub mod types;

pub use config::LlmConfig;
pub use openrouter::OpenRouterClient;
pub use types::LlmChat;
