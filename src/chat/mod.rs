pub mod models;
pub mod store;
pub use models::*;
pub use store::*;

use anyhow::{Error, Result};
use chrono::Utc;

use crate::gemini::{CompletionClient, reply_text};

/// The outcome of one question/answer exchange
#[derive(Debug)]
pub struct Exchange {
    pub question: String,
    pub reply: String,
    pub timestamp: i64,
}

/// Record the user's question, ask the completion API for a reply and
/// record that too. The user's transcript stays locked for the whole
/// exchange so the reply always directly follows its question.
///
/// Upstream failures become the reply text. Only store failures are
/// returned as errors.
pub async fn ask(
    store: &MessageStore,
    client: &dyn CompletionClient,
    user_id: &str,
    question: &str,
) -> Result<Exchange, Error> {
    let mut transcript = store.transcript(user_id).await?;
    let timestamp = Utc::now().timestamp_millis();

    transcript.append(question, Sender::User, timestamp);
    tracing::info!(
        "User message saved for {}: {}...",
        user_id,
        question.chars().take(50).collect::<String>()
    );

    let result = client.complete(question).await;
    if let Err(e) = &result {
        tracing::warn!("Completion failed for {}: {}", user_id, e);
    }
    let reply = reply_text(result);

    transcript.append(&reply, Sender::Bot, timestamp + 1);
    tracing::info!("Bot response saved for {}", user_id);

    Ok(Exchange {
        question: question.to_string(),
        reply,
        timestamp,
    })
}
