//! Environment-backed configuration
//!
//! All credentials, endpoint overrides, and the system prompt are read once
//! at startup into an explicit `Config` value. Request handlers never touch
//! the environment themselves.

use std::env;

use thiserror::Error;

/// Default Gemini REST base; overridable for tests via `GEMINI_API_BASE`.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default Watsonx chat endpoint (includes the pinned API version).
pub const DEFAULT_WATSONX_CHAT_URL: &str =
    "https://jp-tok.ml.cloud.ibm.com/ml/v1/text/chat?version=2023-05-29";

/// Default IBM IAM token endpoint.
pub const DEFAULT_IBM_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Watsonx model served by this backend.
pub const WATSONX_MODEL_ID: &str = "ibm/granite-3-8b-instruct";

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// LLM_PROVIDER named something other than the two known providers
    #[error("Unknown LLM provider: {0} (expected \"gemini\" or \"watsonx\")")]
    UnknownProvider(String),

    /// A numeric variable did not parse
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Provider-specific settings for the Gemini backend
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as a query parameter on the generate call
    pub api_key: String,
    /// Optional instructional prefix prepended to every user message
    pub system_prompt: Option<String>,
    /// REST base URL (no trailing slash)
    pub api_base: String,
}

/// Provider-specific settings for the Watsonx backend
#[derive(Debug, Clone)]
pub struct WatsonxConfig {
    /// Long-lived API key exchanged for a bearer token per request
    pub api_key: String,
    /// Watsonx project id, sent in every chat payload
    pub project_id: String,
    /// Optional system message content
    pub system_prompt: Option<String>,
    /// Full chat endpoint URL, version query included
    pub chat_url: String,
    /// IAM token-exchange endpoint URL
    pub iam_url: String,
}

/// Which provider this process fronts
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Gemini(GeminiConfig),
    Watsonx(WatsonxConfig),
}

/// Full process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port for the HTTP server
    pub port: u16,
    /// Opaque base URL handed to the page templates; never interpreted here
    pub backend_url: Option<String>,
    /// Selected provider and its credentials
    pub provider: ProviderConfig,
}

impl Config {
    /// Assemble the configuration from the process environment.
    ///
    /// `LLM_PROVIDER` selects the variant (defaults to `gemini`); the
    /// variant's required variables are then validated eagerly so a
    /// misconfigured process fails at startup, not on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "PORT",
                    value,
                })?,
            Err(_) => 8080,
        };

        let provider = match env::var("LLM_PROVIDER").as_deref() {
            Ok("watsonx") => ProviderConfig::Watsonx(WatsonxConfig {
                api_key: require_var("WATSONX_API_KEY")?,
                project_id: require_var("WATSONX_PROJECT_ID")?,
                system_prompt: optional_var("GRANITE_SYSTEM_PROMPT"),
                chat_url: optional_var("WATSONX_CHAT_URL")
                    .unwrap_or_else(|| DEFAULT_WATSONX_CHAT_URL.to_string()),
                iam_url: optional_var("IBM_IAM_URL")
                    .unwrap_or_else(|| DEFAULT_IBM_IAM_URL.to_string()),
            }),
            Ok("gemini") | Err(_) => ProviderConfig::Gemini(GeminiConfig {
                api_key: require_var("GEMINI_API_KEY")?,
                system_prompt: optional_var("GEMINI_SYSTEM_PROMPT"),
                api_base: optional_var("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            }),
            Ok(other) => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        Ok(Self {
            port,
            backend_url: optional_var("BACKEND_URL"),
            provider,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Unset and empty are treated the same, matching `os.getenv` semantics
/// the page templates and prompts were written against.
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
