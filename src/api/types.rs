//! Relay wire types

use crate::chat::Turn;
use serde::{Deserialize, Serialize};

/// Request to the chat endpoint: the whole conversation, oldest first
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub conversation: Vec<Turn>,
}

/// Successful reply from the chat endpoint.
///
/// `result` is absent when the model produced no text.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
