//! Terminal chat front-end
//!
//! Reads one message per line from stdin, sends it through the relay and
//! prints the rendered reply. Point it at a relay with `CHAT_URL`.

use gemini_chat::chat::{ChatController, SubmitOutcome, PLACEHOLDER_TEXT};
use gemini_chat::relay::{ClientConfig, HttpRelay};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chat=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = ClientConfig::from_env();
    let relay = HttpRelay::new(&config)?;
    tracing::info!(endpoint = %relay.endpoint(), "Relay client ready");

    let mut controller = ChatController::new(relay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Chatting via {}. One message per line, Ctrl-D to quit.", config.endpoint());
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            eprintln!("{PLACEHOLDER_TEXT}");
        }

        match controller.submit(&line).await? {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Replied | SubmitOutcome::Failed(_) => {
                if let Some(message) = controller.view().last() {
                    println!("{}", message.html);
                }
            }
        }
        prompt()?;
    }

    tracing::info!(
        session = %controller.session_id(),
        turns = controller.log().len(),
        "Session ended"
    );
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    write!(stderr, "> ")?;
    stderr.flush()
}
