//! Public types for the chat API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub question: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: i64,
}
