//! IBM Watsonx provider

pub mod client;
pub mod types;

pub use client::{compose_messages, WatsonxClient, NO_RESPONSE_FALLBACK};
