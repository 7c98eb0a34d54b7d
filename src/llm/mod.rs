//! LLM provider layer
//!
//! A unified `ChatProvider` interface over the two chat backends this
//! service can front: Google Gemini (REST generateContent) and IBM Watsonx
//! (IAM token exchange + chat endpoint).

pub mod auth;
pub mod core;
pub mod gemini;
pub mod watsonx;

// Re-export commonly used types
pub use core::{
    error::LlmError,
    provider::{create_provider, ChatProvider},
};
