//! Router for the chat API

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::chat::ask;

type SharedState = Arc<AppState>;

/// Ask a question and record both it and the reply in the user's
/// transcript
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, crate::api::public::ApiError> {
    let store = state.store.clone();
    let completion = Arc::clone(&state.completion);

    // Run the exchange in its own task so a client disconnect, which
    // drops this handler, can't leave a question without its reply
    let exchange = tokio::spawn(async move {
        ask(
            &store,
            completion.as_ref(),
            &payload.user_id,
            &payload.question,
        )
        .await
    })
    .await??;

    Ok(Json(public::ChatResponse {
        user_message: exchange.question,
        bot_response: exchange.reply,
        timestamp: exchange.timestamp,
    }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
