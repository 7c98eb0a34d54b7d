// Wire types shared by both chat endpoints

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate` (JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
}

/// Body of `POST /generate` (form-encoded); same single field as the JSON
/// endpoint, parsed from `application/x-www-form-urlencoded`. A missing
/// field reads as empty, which the validation step then rejects.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub user_input: String,
}

/// Reply envelope returned by both endpoints; always populated, even when
/// the text carries a fallback or error description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// 500-level envelope used only by the JSON endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
