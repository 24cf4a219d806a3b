//! Effects produced by phase transitions

use super::view::MessageBody;

/// Effects to be executed after a transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a user turn to the conversation log
    AppendUser { content: String },

    /// Append a model turn to the conversation log
    AppendModel { content: String },

    /// Remove the user turn whose relay call failed
    RollbackUser,

    /// Show the user's message
    ShowUserMessage { text: String },

    /// Show the pending placeholder
    ShowPlaceholder,

    /// Replace the pending placeholder
    ResolvePlaceholder { body: MessageBody },

    /// Send the conversation snapshot to the relay
    RequestRelay,
}
