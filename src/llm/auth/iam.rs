//! IBM IAM token exchange
//!
//! Watsonx authenticates with a short-lived bearer token exchanged from a
//! long-lived API key. The token is fetched fresh for every inbound chat
//! request and discarded afterwards; there is no caching, reuse, or expiry
//! tracking.

use reqwest::Client;
use serde::Deserialize;

use crate::llm::core::error::LlmError;

const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Exchanges an IBM Cloud API key for a bearer token
pub struct IamTokenClient {
    http_client: Client,
    iam_url: String,
}

/// Token-exchange response; IAM returns more fields (expiry, refresh token)
/// but only the access token is consumed.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl IamTokenClient {
    pub fn new(http_client: Client, iam_url: String) -> Self {
        Self {
            http_client,
            iam_url,
        }
    }

    /// Exchange the API key for a bearer token.
    ///
    /// Returns `Ok(None)` when the identity endpoint answers with a body
    /// that lacks `access_token`; the caller passes the absent token through
    /// to the chat call, which then fails with an upstream authorization
    /// error. Transport failures and non-JSON bodies are `Err`.
    pub async fn fetch_token(&self, api_key: &str) -> Result<Option<String>, LlmError> {
        let response = self
            .http_client
            .post(&self.iam_url)
            .form(&[("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)])
            .send()
            .await?;

        let body: TokenResponse = response.json().await.map_err(|e| {
            LlmError::AuthenticationError(format!("Failed to decode IAM token response: {}", e))
        })?;

        Ok(body.access_token)
    }
}
