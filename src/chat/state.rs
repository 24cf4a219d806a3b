//! Chat session phases

/// Phase of a chat session.
///
/// Success and failure are momentary: both resolve straight back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatPhase {
    /// Ready for user input
    #[default]
    Idle,
    /// User turn appended, relay call in flight
    Sending,
}
