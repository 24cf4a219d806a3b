//! Gemini chat - a minimal chat front-end for a language-model relay
//!
//! The front-end core is the [`chat`] session state machine and the
//! [`markdown`] renderer used to display replies. [`relay`] is the client
//! for the HTTP relay, and [`api`] plus [`llm`] make up the relay server
//! that forwards conversations to Gemini.

pub mod api;
pub mod chat;
pub mod llm;
pub mod markdown;
pub mod relay;
