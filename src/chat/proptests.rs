//! Property-based tests for the chat session
//!
//! These tests verify the conversation log invariants hold across arbitrary
//! sequences of submits and relay outcomes.

use super::*;
use crate::relay::testing::MockRelay;
use crate::relay::RelayError;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Outcome {
    Reply(String),
    EmptyReply,
    Transport,
    Server(u16),
    NoResult,
}

#[derive(Debug, Clone)]
struct Attempt {
    text: String,
    outcome: Outcome,
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        3 => "[a-zA-Z *#`_]{1,30}".prop_map(Outcome::Reply),
        1 => Just(Outcome::EmptyReply),
        1 => Just(Outcome::Transport),
        1 => (400u16..600).prop_map(Outcome::Server),
        1 => Just(Outcome::NoResult),
    ]
}

fn arb_attempt() -> impl Strategy<Value = Attempt> {
    ("[a-z ]{0,12}", arb_outcome()).prop_map(|(text, outcome)| Attempt { text, outcome })
}

fn queue(relay: &MockRelay, outcome: &Outcome) {
    match outcome {
        Outcome::Reply(text) => relay.queue_reply(text.clone()),
        Outcome::EmptyReply => relay.queue_reply(""),
        Outcome::Transport => relay.queue_error(RelayError::Transport("reset".to_string())),
        Outcome::Server(status) => relay.queue_error(RelayError::Server { status: *status }),
        Outcome::NoResult => relay.queue_error(RelayError::EmptyResult),
    }
}

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

/// Model turns only ever directly follow user turns, starting with a user turn
fn assert_paired(log: &ConversationLog) -> Result<(), TestCaseError> {
    let turns = log.turns();
    prop_assert_eq!(turns.len() % 2, 0, "unpaired turn in {:?}", turns);
    for pair in turns.chunks(2) {
        prop_assert_eq!(pair[0].role(), Role::User);
        prop_assert_eq!(pair[1].role(), Role::Model);
    }
    Ok(())
}

proptest! {
    /// After every resolved attempt the log holds only complete exchanges
    #[test]
    fn prop_log_has_no_orphans(attempts in proptest::collection::vec(arb_attempt(), 0..12)) {
        run(async {
            let relay = Arc::new(MockRelay::new());
            let mut chat = ChatController::new(relay.clone());

            for attempt in &attempts {
                if !attempt.text.trim().is_empty() {
                    queue(&relay, &attempt.outcome);
                }
                chat.submit(&attempt.text).await.unwrap();
                prop_assert_eq!(chat.phase(), ChatPhase::Idle);
                assert_paired(chat.log())?;
            }
            Ok(())
        })?;
    }

    /// A failed attempt leaves the log exactly as it was
    #[test]
    fn prop_failure_restores_log(attempts in proptest::collection::vec(arb_attempt(), 1..12)) {
        run(async {
            let relay = Arc::new(MockRelay::new());
            let mut chat = ChatController::new(relay.clone());

            for attempt in &attempts {
                if !attempt.text.trim().is_empty() {
                    queue(&relay, &attempt.outcome);
                }
                let before = chat.log().clone();
                let outcome = chat.submit(&attempt.text).await.unwrap();

                match outcome {
                    SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => {
                        prop_assert_eq!(chat.log(), &before);
                    }
                    SubmitOutcome::Replied => {
                        prop_assert_eq!(chat.log().len(), before.len() + 2);
                    }
                }
            }
            Ok(())
        })?;
    }

    /// Every non-blank submit adds a user message and one resolved bot message
    #[test]
    fn prop_display_never_left_pending(attempts in proptest::collection::vec(arb_attempt(), 0..12)) {
        run(async {
            let relay = Arc::new(MockRelay::new());
            let mut chat = ChatController::new(relay.clone());
            let mut expected = 0;

            for attempt in &attempts {
                if !attempt.text.trim().is_empty() {
                    queue(&relay, &attempt.outcome);
                    expected += 2;
                }
                chat.submit(&attempt.text).await.unwrap();
            }

            prop_assert_eq!(chat.messages().len(), expected);
            prop_assert!(chat.messages().iter().all(|message| !message.is_pending()));
            Ok(())
        })?;
    }
}
