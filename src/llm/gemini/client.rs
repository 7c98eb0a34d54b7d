//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::llm::core::{error::LlmError, provider::ChatProvider};

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Model served by this backend
const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Fixed sampling parameters; deliberately not caller-configurable.
const GENERATION_TEMPERATURE: f64 = 0.7;
const GENERATION_TOP_K: u32 = 40;
const GENERATION_TOP_P: f64 = 0.95;
const GENERATION_MAX_OUTPUT_TOKENS: u32 = 256;

/// Reply text when the response body lacks the expected candidate path
pub const NO_RESPONSE_FALLBACK: &str = "No response to display.";

/// Client for the Gemini generateContent REST endpoint
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

/// Combine the configured system prompt with the user input.
///
/// Gemini takes one flat prompt string: `"<system>\n\n<user>"` when a system
/// prompt is configured, the user input verbatim otherwise.
pub fn compose_prompt(system_prompt: Option<&str>, user_input: &str) -> String {
    match system_prompt {
        Some(system) if !system.is_empty() => format!("{}\n\n{}", system, user_input),
        _ => user_input.to_string(),
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            // Default transport settings; no timeout override, no retries.
            http_client: Client::new(),
            config,
        }
    }

    /// Build the generation endpoint URL with the API key as a query parameter
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_base, GEMINI_MODEL, self.config.api_key
        )
    }

    fn build_request_body(&self, user_input: &str) -> GenerateContentRequest {
        let prompt = compose_prompt(self.config.system_prompt.as_deref(), user_input);
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
                top_k: GENERATION_TOP_K,
                top_p: GENERATION_TOP_P,
                max_output_tokens: GENERATION_MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn generate_reply(&self, user_input: &str) -> Result<String, LlmError> {
        let body = self.build_request_body(user_input);

        let response = self
            .http_client
            .post(self.build_endpoint_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        // A non-200 status is reported as reply text, not as an error.
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Ok(format!(
                "An error occurred: {} - {}",
                status.as_u16(),
                body
            ));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed
            .extract_text()
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".to_string(),
            system_prompt: None,
            api_base: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    #[test]
    fn test_compose_prompt_with_system() {
        assert_eq!(compose_prompt(Some("S"), "U"), "S\n\nU");
    }

    #[test]
    fn test_compose_prompt_without_system() {
        assert_eq!(compose_prompt(None, "U"), "U");
    }

    #[test]
    fn test_compose_prompt_empty_system() {
        assert_eq!(compose_prompt(Some(""), "U"), "U");
    }

    #[test]
    fn test_endpoint_url_format() {
        let client = GeminiClient::new(test_config());
        let url = client.build_endpoint_url();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_request_body_fixed_generation_params() {
        let client = GeminiClient::new(test_config());
        let body = client.build_request_body("hi");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["generationConfig"]["temperature"], 0.7);
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["topP"], 0.95);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 256);
    }

    #[test]
    fn test_request_body_includes_system_prompt() {
        let mut config = test_config();
        config.system_prompt = Some("Be supportive.".to_string());
        let client = GeminiClient::new(config);
        let body = client.build_request_body("I feel stressed");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Be supportive.\n\nI feel stressed"
        );
    }
}
