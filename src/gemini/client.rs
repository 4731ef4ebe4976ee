//! Client for the Gemini `generateContent` endpoint.
//!
//! Upstream problems never escape as panics or handler errors. The
//! client reports them as a `CompletionError` and `reply_text` turns
//! the outcome into the text shown to the user.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::prompt::grammar_question;
use crate::core::AppConfig;

/// Upper bound for a single completion request
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply used when the API answers but without any candidate text
pub const NO_RESPONSE_TEXT: &str = "I couldn't generate a response. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Request(String),
    #[error("response did not contain any candidate text")]
    MissingText,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return CompletionError::Timeout(COMPLETION_TIMEOUT);
        }
        // The URL carries the API key as a query param so it must not
        // end up in the reply text.
        CompletionError::Request(err.without_url().to_string())
    }
}

/// Convert the outcome of a completion into the bot's reply.
pub fn reply_text(result: Result<String, CompletionError>) -> String {
    match result {
        Ok(text) => text,
        Err(CompletionError::MissingText) => NO_RESPONSE_TEXT.to_string(),
        Err(err) => format!("Error: {}", err),
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, question: &str) -> Result<String, CompletionError>;
}

pub type SharedCompletionClient = Arc<dyn CompletionClient + 'static>;

pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.gemini_api_url(), &config.gemini_api_key)
    }
}

// Response shape:
// {
//     "candidates": [
//         { "content": { "parts": [ { "text": "..." } ], "role": "model" } }
//     ]
// }
fn first_candidate_text(data: &Value) -> Option<String> {
    data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(String::from)
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, question: &str) -> Result<String, CompletionError> {
        let payload = json!({
            "contents": [
                { "parts": [ { "text": grammar_question(question) } ] }
            ]
        });

        let data: Value = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .timeout(COMPLETION_TIMEOUT)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        first_candidate_text(&data).ok_or(CompletionError::MissingText)
    }
}
