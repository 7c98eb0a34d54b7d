// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// LLM provider layer
pub mod llm;
