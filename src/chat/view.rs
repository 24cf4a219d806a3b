//! Display state and its HTML projection
//!
//! Display messages are UI-only: the placeholder and failure notices never
//! reach the conversation log. HTML is recomputed on every projection.

use crate::markdown::{escape_html, render};
use crate::relay::RelayError;

/// Text shown while the relay call is in flight
pub const PLACEHOLDER_TEXT: &str = "Thinking...";

/// Who a display message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// User-visible failure message; raw relay errors are never shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureNotice {
    /// The relay answered without result text
    NoResult,
    /// Any other relay failure
    RequestFailed,
}

impl FailureNotice {
    #[must_use]
    pub fn for_error(error: &RelayError) -> Self {
        match error {
            RelayError::EmptyResult => FailureNotice::NoResult,
            RelayError::Transport(_) | RelayError::Server { .. } | RelayError::Decode(_) => {
                FailureNotice::RequestFailed
            }
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            FailureNotice::NoResult => "Sorry, no response received.",
            FailureNotice::RequestFailed => "Failed to get response from server.",
        }
    }
}

/// Content of a display message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// What the user typed, shown as plain text
    UserText(String),
    /// Waiting for the relay
    Pending,
    /// Model reply, rendered as markdown
    Reply(String),
    Failure(FailureNotice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub sender: Sender,
    pub body: MessageBody,
}

impl DisplayMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: MessageBody::UserText(text.into()),
        }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            sender: Sender::Bot,
            body: MessageBody::Pending,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.body, MessageBody::Pending)
    }

    /// HTML for this message
    #[must_use]
    pub fn html(&self) -> String {
        match &self.body {
            MessageBody::UserText(text) => escape_html(text),
            MessageBody::Pending => PLACEHOLDER_TEXT.to_string(),
            MessageBody::Reply(text) => render(text),
            MessageBody::Failure(notice) => notice.text().to_string(),
        }
    }
}

/// A display message ready for the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub html: String,
}

/// Project display state into HTML fragments
#[must_use]
pub fn project(messages: &[DisplayMessage]) -> Vec<RenderedMessage> {
    messages
        .iter()
        .map(|message| RenderedMessage {
            sender: message.sender,
            html: message.html(),
        })
        .collect()
}
