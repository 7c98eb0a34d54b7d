//! Google Gemini provider

pub mod client;
pub mod types;

pub use client::{compose_prompt, GeminiClient, NO_RESPONSE_FALLBACK};
