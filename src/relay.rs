//! Client side of the chat relay
//!
//! The relay is the HTTP service that forwards a conversation to the model
//! provider. The controller only sees the [`ChatRelay`] trait; [`HttpRelay`]
//! speaks the relay's JSON wire format.

use crate::api::{ChatRequest, ChatResponse, CHAT_PATH};
use crate::chat::Turn;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub mod testing;

/// Default relay location for local development
pub const DEFAULT_CHAT_URL: &str = "http://localhost:3000";

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Failure of a relay round-trip
#[derive(Debug, Error)]
pub enum RelayError {
    /// Connection, timeout or other transport problem
    #[error("Request failed: {0}")]
    Transport(String),
    /// The relay answered with a non-success status
    #[error("Server error: {status}")]
    Server { status: u16 },
    /// The relay answered successfully but the body was not understood
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The relay answered successfully without any result text
    #[error("No result in response")]
    EmptyResult,
}

/// Request/response collaborator used by the chat controller
#[async_trait]
pub trait ChatRelay: Send + Sync {
    /// Send the whole conversation, oldest turn first, and return the reply text
    async fn send(&self, conversation: &[Turn]) -> Result<String, RelayError>;
}

#[async_trait]
impl<T: ChatRelay + ?Sized> ChatRelay for Arc<T> {
    async fn send(&self, conversation: &[Turn]) -> Result<String, RelayError> {
        (**self).send(conversation).await
    }
}

/// Configuration for the relay client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CHAT_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("CHAT_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }

    /// Full URL of the chat endpoint
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH)
    }
}

/// Relay client over HTTP
pub struct HttpRelay {
    client: Client,
    endpoint: String,
}

impl HttpRelay {
    /// # Errors
    ///
    /// Returns [`RelayError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatRelay for HttpRelay {
    async fn send(&self, conversation: &[Turn]) -> Result<String, RelayError> {
        let request = ChatRequest {
            conversation: conversation.to_vec(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Transport(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    RelayError::Transport(format!("Connection failed: {e}"))
                } else {
                    RelayError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Server {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(format!("Failed to read response: {e}")))?;

        let reply: ChatResponse =
            serde_json::from_str(&body).map_err(|e| RelayError::Decode(e.to_string()))?;

        match reply.result {
            Some(result) if !result.is_empty() => Ok(result),
            _ => Err(RelayError::EmptyResult),
        }
    }
}
