//! Watsonx-specific request and response types
//!
//! These map to the `/ml/v1/text/chat` contract. As with the Gemini types,
//! every response nesting level defaults so a partial body still
//! deserializes and extraction walks the remains.

use serde::{Deserialize, Serialize};

/// Request to the Watsonx chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// System message followed by the user message
    pub messages: Vec<ChatMessage>,
    pub project_id: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

/// A role-tagged chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the chat endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One generated choice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// Message body of a choice; missing content reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`; absent only when `choices` is empty.
    /// A present choice with a missing message or content extracts as an
    /// empty string, matching the upstream contract's lenient reading.
    pub fn extract_text(&self) -> Option<String> {
        self.choices
            .first()
            .map(|choice| choice.message.content.clone())
    }
}
