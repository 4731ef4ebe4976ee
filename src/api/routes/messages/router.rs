//! Router for the messages API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Get every message in a user's transcript. Unknown users get an
/// empty transcript rather than a 404.
async fn list_messages(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<public::MessagesResponse>, crate::api::public::ApiError> {
    let messages = state.store.messages(&user_id).await?;
    tracing::info!("Retrieved {} messages for user {}", messages.len(), user_id);

    Ok(Json(public::MessagesResponse { messages }))
}

/// Delete a user's transcript
async fn clear_messages(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<public::ClearMessagesResponse>, crate::api::public::ApiError> {
    let count = state.store.clear(&user_id).await?;
    tracing::info!("Deleted {} messages for user {}", count, user_id);

    Ok(Json(public::ClearMessagesResponse::deleted(count)))
}

/// Create the messages router
pub fn router() -> Router<SharedState> {
    Router::new().route("/{user_id}", get(list_messages).delete(clear_messages))
}
