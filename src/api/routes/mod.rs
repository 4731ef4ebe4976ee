//! API routes module

pub mod chat;
pub mod health;
pub mod messages;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Liveness check
        .nest("/health", health::router())
        // Ask a question
        .nest("/chat", chat::router())
        // Per-user transcripts
        .nest("/messages", messages::router())
}
