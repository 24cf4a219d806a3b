//! Chat controller
//!
//! Owns the session state (phase, conversation log, display messages) and
//! runs one submit-to-resolution cycle at a time. The relay call is the only
//! suspension point.

use super::log::{ConversationLog, LogError, Turn};
use super::transition::{transition, TransitionError};
use super::view::{project, DisplayMessage, FailureNotice, MessageBody, RenderedMessage};
use super::{ChatEvent, ChatPhase, Effect};
use crate::relay::ChatRelay;
use std::time::Instant;
use thiserror::Error;

/// How a submit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing happened
    Ignored,
    /// The model replied and the reply was logged
    Replied,
    /// The relay failed and the user turn was rolled back
    Failed(FailureNotice),
}

/// Controller bugs. None of these are recoverable runtime conditions.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Conversation log invariant violated: {0}")]
    Log(#[from] LogError),
    #[error("No pending placeholder to resolve")]
    MissingPlaceholder,
}

/// Drives a chat session against a relay
pub struct ChatController<R> {
    relay: R,
    session_id: String,
    phase: ChatPhase,
    log: ConversationLog,
    messages: Vec<DisplayMessage>,
}

impl<R: ChatRelay> ChatController<R> {
    #[must_use]
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            session_id: uuid::Uuid::new_v4().to_string(),
            phase: ChatPhase::Idle,
            log: ConversationLog::new(),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    #[must_use]
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    #[must_use]
    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    /// Current display state as HTML, rendered afresh on every call
    #[must_use]
    pub fn view(&self) -> Vec<RenderedMessage> {
        project(&self.messages)
    }

    /// Submit user input and wait for the relay to resolve it.
    ///
    /// Relay failures are not errors: they roll the log back and show a
    /// notice.
    ///
    /// # Errors
    ///
    /// An `Err` means an internal invariant was broken; see [`ControllerError`].
    pub async fn submit(&mut self, text: &str) -> Result<SubmitOutcome, ControllerError> {
        let Some(conversation) = self.dispatch(ChatEvent::Submit {
            text: text.to_string(),
        })?
        else {
            return Ok(SubmitOutcome::Ignored);
        };

        tracing::debug!(
            session = %self.session_id,
            turns = conversation.len(),
            "Sending conversation to relay"
        );

        let start = Instant::now();
        let event = match self.relay.send(&conversation).await {
            Ok(result) => {
                tracing::info!(
                    session = %self.session_id,
                    duration_ms = %start.elapsed().as_millis(),
                    chars = result.len(),
                    "Relay replied"
                );
                ChatEvent::RelaySucceeded { result }
            }
            Err(error) => {
                tracing::warn!(
                    session = %self.session_id,
                    duration_ms = %start.elapsed().as_millis(),
                    error = %error,
                    "Relay request failed"
                );
                ChatEvent::RelayFailed { error }
            }
        };

        self.dispatch(event)?;

        Ok(match self.messages.last().map(|message| &message.body) {
            Some(MessageBody::Failure(notice)) => SubmitOutcome::Failed(*notice),
            _ => SubmitOutcome::Replied,
        })
    }

    /// Apply an event and execute its effects.
    ///
    /// Returns the conversation snapshot when the effects ask for a relay call.
    fn dispatch(&mut self, event: ChatEvent) -> Result<Option<Vec<Turn>>, ControllerError> {
        let result = transition(self.phase, event).inspect_err(|e| {
            tracing::error!(session = %self.session_id, error = %e, "Invalid chat transition");
        })?;

        self.phase = result.new_phase;

        let mut request = None;
        for effect in result.effects {
            if let Some(conversation) = self.execute(effect)? {
                request = Some(conversation);
            }
        }
        Ok(request)
    }

    fn execute(&mut self, effect: Effect) -> Result<Option<Vec<Turn>>, ControllerError> {
        match effect {
            Effect::AppendUser { content } => self.log.append_user(content),
            Effect::AppendModel { content } => self.log.append_model(content),
            Effect::RollbackUser => {
                self.log.rollback_last_user().inspect_err(|e| {
                    tracing::error!(session = %self.session_id, error = %e, "Rollback failed");
                })?;
            }
            Effect::ShowUserMessage { text } => self.messages.push(DisplayMessage::user(text)),
            Effect::ShowPlaceholder => self.messages.push(DisplayMessage::placeholder()),
            Effect::ResolvePlaceholder { body } => {
                let placeholder = self
                    .messages
                    .iter_mut()
                    .rev()
                    .find(|message| message.is_pending())
                    .ok_or(ControllerError::MissingPlaceholder)?;
                placeholder.body = body;
            }
            Effect::RequestRelay => return Ok(Some(self.log.snapshot())),
        }
        Ok(None)
    }
}
