//! Provider configuration

use super::{GeminiService, LlmError, LlmService, LoggingService};
use std::sync::Arc;

/// Model used when `GEMINI_MODEL` is not set
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini API host
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the LLM provider
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`
    pub model: Option<String>,
    /// Base URL of the Gemini API; overridable for proxies and tests
    pub base_url: Option<String>,
    /// Upper bound on reply length; the provider default applies when unset
    pub max_output_tokens: Option<u32>,
}

impl LlmConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .ok(),
            model: std::env::var("GEMINI_MODEL").ok(),
            base_url: std::env::var("GEMINI_BASE_URL").ok(),
            max_output_tokens: std::env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|max| max.parse().ok()),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_GEMINI_BASE_URL)
    }
}

/// Build the configured provider, wrapped with request logging
///
/// # Errors
///
/// Returns a `Config` error when no API key is set or the HTTP client
/// cannot be created.
pub fn build_service(config: &LlmConfig) -> Result<Arc<dyn LlmService>, LlmError> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| LlmError::config("No API key configured. Set API_KEY or GEMINI_API_KEY."))?;

    let service = GeminiService::new(api_key, config.model(), config.base_url())?
        .with_max_output_tokens(config.max_output_tokens);
    Ok(Arc::new(LoggingService::new(Arc::new(service))))
}
