//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::error::LlmError;
use crate::config::ProviderConfig;
use crate::llm::gemini::GeminiClient;
use crate::llm::watsonx::WatsonxClient;

/// Main interface both chat backends implement
///
/// One call covers the whole translation shim: compose the provider-specific
/// prompt from the raw user input, issue exactly one chat request (plus the
/// IAM token exchange on the Watsonx path), and extract plain text from the
/// nested response, substituting the provider's fallback string when the
/// expected keys are absent.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Produce the reply text for one user message.
    ///
    /// `Ok` covers provider-level failures that are reported as text (a
    /// non-200 Gemini status, a missing response path); `Err` is reserved
    /// for transport and decoding failures that escape the shim and are
    /// surfaced by the HTTP layer per endpoint.
    async fn generate_reply(&self, user_input: &str) -> Result<String, LlmError>;
}

/// Create the chat provider selected by the configuration
///
/// # Example
///
/// ```rust,no_run
/// use mentalmate::config::{Config, ProviderConfig, GeminiConfig};
/// use mentalmate::llm::create_provider;
///
/// let config = Config {
///     port: 8080,
///     backend_url: None,
///     provider: ProviderConfig::Gemini(GeminiConfig {
///         api_key: "key".to_string(),
///         system_prompt: None,
///         api_base: "https://generativelanguage.googleapis.com".to_string(),
///     }),
/// };
/// let provider = create_provider(&config.provider);
/// ```
pub fn create_provider(provider: &ProviderConfig) -> Box<dyn ChatProvider> {
    match provider {
        ProviderConfig::Gemini(config) => Box::new(GeminiClient::new(config.clone())),
        ProviderConfig::Watsonx(config) => Box::new(WatsonxClient::new(config.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeminiConfig, WatsonxConfig};

    #[test]
    fn test_create_provider_gemini() {
        let provider = create_provider(&ProviderConfig::Gemini(GeminiConfig {
            api_key: "test-key".to_string(),
            system_prompt: None,
            api_base: "https://generativelanguage.googleapis.com".to_string(),
        }));
        assert!(std::any::type_name_of_val(&*provider).contains("GeminiClient"));
    }

    #[test]
    fn test_create_provider_watsonx() {
        let provider = create_provider(&ProviderConfig::Watsonx(WatsonxConfig {
            api_key: "test-key".to_string(),
            project_id: "test-project".to_string(),
            system_prompt: Some("Be kind.".to_string()),
            chat_url: "https://jp-tok.ml.cloud.ibm.com/ml/v1/text/chat?version=2023-05-29"
                .to_string(),
            iam_url: "https://iam.cloud.ibm.com/identity/token".to_string(),
        }));
        assert!(std::any::type_name_of_val(&*provider).contains("WatsonxClient"));
    }
}
