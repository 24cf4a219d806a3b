//! Pure phase transition function
//!
//! Given the same phase and event this always produces the same result, with
//! no I/O. The controller owns execution of the returned effects.

use super::view::{FailureNotice, MessageBody};
use super::{ChatEvent, ChatPhase, Effect};
use crate::relay::RelayError;
use thiserror::Error;

/// Result of a phase transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_phase: ChatPhase,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(phase: ChatPhase) -> Self {
        Self {
            new_phase: phase,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A message is already being sent")]
    Busy,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// # Errors
///
/// [`TransitionError::Busy`] for a submit while a request is in flight and
/// [`TransitionError::InvalidTransition`] for a relay outcome while idle.
pub fn transition(phase: ChatPhase, event: ChatEvent) -> Result<TransitionResult, TransitionError> {
    match (phase, event) {
        // Blank input: nothing happens
        (ChatPhase::Idle, ChatEvent::Submit { text }) if text.trim().is_empty() => {
            Ok(TransitionResult::new(ChatPhase::Idle))
        }

        // Idle + Submit -> Sending
        (ChatPhase::Idle, ChatEvent::Submit { text }) => {
            let text = text.trim().to_string();
            Ok(TransitionResult::new(ChatPhase::Sending).with_effects([
                Effect::ShowUserMessage { text: text.clone() },
                Effect::AppendUser { content: text },
                Effect::ShowPlaceholder,
                Effect::RequestRelay,
            ]))
        }

        (ChatPhase::Sending, ChatEvent::Submit { .. }) => Err(TransitionError::Busy),

        // A successful call with nothing in it counts as a failure
        (ChatPhase::Sending, ChatEvent::RelaySucceeded { result }) if result.is_empty() => {
            Ok(failed(&RelayError::EmptyResult))
        }

        // Sending + RelaySucceeded -> Idle
        (ChatPhase::Sending, ChatEvent::RelaySucceeded { result }) => {
            Ok(TransitionResult::new(ChatPhase::Idle)
                .with_effect(Effect::AppendModel {
                    content: result.clone(),
                })
                .with_effect(Effect::ResolvePlaceholder {
                    body: MessageBody::Reply(result),
                }))
        }

        // Sending + RelayFailed -> Idle, log rolled back
        (ChatPhase::Sending, ChatEvent::RelayFailed { error }) => Ok(failed(&error)),

        (ChatPhase::Idle, event @ (ChatEvent::RelaySucceeded { .. } | ChatEvent::RelayFailed { .. })) => {
            Err(TransitionError::InvalidTransition(format!(
                "relay outcome while idle: {event:?}"
            )))
        }
    }
}

fn failed(error: &RelayError) -> TransitionResult {
    TransitionResult::new(ChatPhase::Idle)
        .with_effect(Effect::RollbackUser)
        .with_effect(Effect::ResolvePlaceholder {
            body: MessageBody::Failure(FailureNotice::for_error(error)),
        })
}
