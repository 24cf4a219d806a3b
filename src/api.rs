//! HTTP relay between the chat front-end and the model provider

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::llm::LlmService;
use std::path::PathBuf;
use std::sync::Arc;

/// Path of the chat endpoint
pub const CHAT_PATH: &str = "/api/chat";

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmService>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served at `/` when it exists
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            public_dir: std::env::var("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from),
        }
    }

    /// The static directory, if it exists
    #[must_use]
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.public_dir.is_dir().then(|| self.public_dir.clone())
    }
}
