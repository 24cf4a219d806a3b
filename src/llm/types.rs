//! Common types for LLM interactions

use crate::chat::Turn;

/// LLM request: the conversation so far, oldest turn first
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub turns: Vec<Turn>,
}

impl LlmRequest {
    #[must_use]
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

/// LLM response
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Reply text; empty when the model produced none
    pub text: String,
    /// Why the model stopped, as reported by the provider
    pub finish_reason: Option<String>,
    pub usage: Usage,
}

impl LlmResponse {
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Usage statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
