//! Events that drive a chat session

use crate::relay::RelayError;

/// Events that trigger phase transitions
#[derive(Debug)]
pub enum ChatEvent {
    // User events
    Submit { text: String },

    // Relay events
    RelaySucceeded { result: String },
    RelayFailed { error: RelayError },
}
