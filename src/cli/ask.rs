use anyhow::Result;

use crate::api::init_tracing;
use crate::core::AppConfig;
use crate::gemini::{CompletionClient, GeminiClient, reply_text};

/// Send a single question to the completion API and print the reply
pub async fn run(question: String) -> Result<()> {
    init_tracing();

    let config = AppConfig::default();
    if config.has_placeholder_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set, the request will fail");
    }

    let client = GeminiClient::from_config(&config);
    let reply = reply_text(client.complete(&question).await);
    println!("{}", reply);

    Ok(())
}
