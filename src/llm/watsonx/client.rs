//! Watsonx client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{WatsonxConfig, WATSONX_MODEL_ID};
use crate::llm::auth::IamTokenClient;
use crate::llm::core::{error::LlmError, provider::ChatProvider};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Fixed sampling parameters; deliberately not caller-configurable.
const GENERATION_MAX_TOKENS: u32 = 1024;
const GENERATION_TEMPERATURE: f64 = 0.7;
const GENERATION_TOP_P: f64 = 1.0;

/// Reply text when the response carries no choices
pub const NO_RESPONSE_FALLBACK: &str = "The model gave no response.";

/// Client for the Watsonx chat endpoint
///
/// Every inbound request costs two outbound calls: the IAM token exchange,
/// then the chat call with the fresh bearer token.
pub struct WatsonxClient {
    http_client: Client,
    token_client: IamTokenClient,
    config: WatsonxConfig,
}

/// Build the two-message payload list.
///
/// The system message is emitted even when no system prompt is configured
/// (content empty); the upstream contract tolerates it and the behavior is
/// kept rather than hardened.
pub fn compose_messages(system_prompt: Option<&str>, user_input: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt.unwrap_or_default()),
        ChatMessage::user(user_input),
    ]
}

impl WatsonxClient {
    pub fn new(config: WatsonxConfig) -> Self {
        // Default transport settings; no timeout override, no retries.
        let http_client = Client::new();
        let token_client = IamTokenClient::new(http_client.clone(), config.iam_url.clone());
        Self {
            http_client,
            token_client,
            config,
        }
    }

    fn build_request_body(&self, user_input: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: compose_messages(self.config.system_prompt.as_deref(), user_input),
            project_id: self.config.project_id.clone(),
            model_id: WATSONX_MODEL_ID.to_string(),
            max_tokens: GENERATION_MAX_TOKENS,
            temperature: GENERATION_TEMPERATURE,
            top_p: GENERATION_TOP_P,
        }
    }
}

#[async_trait]
impl ChatProvider for WatsonxClient {
    async fn generate_reply(&self, user_input: &str) -> Result<String, LlmError> {
        // Fresh token per request. An absent token is not detected here;
        // the chat call fails upstream and surfaces through the body parse.
        let token = self.token_client.fetch_token(&self.config.api_key).await?;

        let body = self.build_request_body(user_input);

        let response = self
            .http_client
            .post(&self.config.chat_url)
            .header(
                "Authorization",
                format!("Bearer {}", token.unwrap_or_default()),
            )
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        // Status is not checked; the body shape decides. A non-JSON error
        // body fails the decode and escapes as an error.
        let parsed: ChatCompletionResponse = response.json().await?;
        Ok(parsed
            .extract_text()
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WatsonxConfig {
        WatsonxConfig {
            api_key: "test-key".to_string(),
            project_id: "proj-1".to_string(),
            system_prompt: Some("Be supportive.".to_string()),
            chat_url: "https://jp-tok.ml.cloud.ibm.com/ml/v1/text/chat?version=2023-05-29"
                .to_string(),
            iam_url: "https://iam.cloud.ibm.com/identity/token".to_string(),
        }
    }

    #[test]
    fn test_compose_messages_with_system() {
        let messages = compose_messages(Some("S"), "U");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "S");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "U");
    }

    #[test]
    fn test_compose_messages_without_system_keeps_empty_system() {
        let messages = compose_messages(None, "U");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "");
    }

    #[test]
    fn test_request_body_fixed_params() {
        let client = WatsonxClient::new(test_config());
        let body = client.build_request_body("hi");
        assert_eq!(body.model_id, "ibm/granite-3-8b-instruct");
        assert_eq!(body.project_id, "proj-1");
        assert_eq!(body.max_tokens, 1024);
        assert_eq!(body.temperature, 0.7);
        assert_eq!(body.top_p, 1.0);
        assert_eq!(body.messages[0].content, "Be supportive.");
    }
}
