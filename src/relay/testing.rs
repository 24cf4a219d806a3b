//! Mock relay for controller tests

use super::{ChatRelay, RelayError};
use crate::chat::Turn;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock relay that returns queued outcomes and records every request
#[derive(Default)]
pub struct MockRelay {
    outcomes: Mutex<VecDeque<Result<String, RelayError>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
}

#[allow(dead_code)]
impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: RelayError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Conversations sent so far, one per request
    pub fn recorded_requests(&self) -> Vec<Vec<Turn>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatRelay for MockRelay {
    async fn send(&self, conversation: &[Turn]) -> Result<String, RelayError> {
        self.requests.lock().unwrap().push(conversation.to_vec());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::Transport("No mock outcome queued".to_string())))
    }
}
