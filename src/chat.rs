//! Chat session state machine
//!
//! Implements the Elm Architecture pattern: a pure [`transition`] turns a
//! phase and an event into a new phase plus effects, and the
//! [`ChatController`] executes those effects against the conversation log,
//! the display state and the relay.

mod controller;
mod effect;
pub mod event;
mod log;
pub mod state;
pub(crate) mod transition;
mod view;

#[cfg(test)]
mod proptests;

pub use controller::{ChatController, ControllerError, SubmitOutcome};
pub use effect::Effect;
pub use event::ChatEvent;
pub use log::{ConversationLog, LogError, Role, Turn};
pub use state::ChatPhase;
pub use transition::{transition, TransitionError, TransitionResult};
pub use view::{
    project, DisplayMessage, FailureNotice, MessageBody, RenderedMessage, Sender,
    PLACEHOLDER_TEXT,
};
