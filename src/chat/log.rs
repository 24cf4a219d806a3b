//! Conversation log sent as context with every relay request

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Originator of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message of a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    #[must_use]
    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Role::Model, content)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Rollback was requested with no pending user turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    #[error("Nothing to roll back: conversation log is empty")]
    NothingToRollBack,
    #[error("Cannot roll back: last turn was written by the model")]
    LastTurnNotUser,
}

/// Ordered turns, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn. Empty content is accepted.
    pub fn append_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn append_model(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::model(content));
    }

    /// Remove the user turn whose relay call just failed.
    ///
    /// Only valid immediately after [`append_user`](Self::append_user); any
    /// other use is a controller bug and is reported as an error.
    ///
    /// # Errors
    ///
    /// [`LogError::NothingToRollBack`] on an empty log and
    /// [`LogError::LastTurnNotUser`] when the last turn is the model's.
    pub fn rollback_last_user(&mut self) -> Result<Turn, LogError> {
        match self.turns.last() {
            None => Err(LogError::NothingToRollBack),
            Some(turn) if turn.role() != Role::User => Err(LogError::LastTurnNotUser),
            Some(_) => self.turns.pop().ok_or(LogError::NothingToRollBack),
        }
    }

    /// Copy of the turns, used verbatim as the request payload
    #[must_use]
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
