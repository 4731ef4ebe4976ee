//! Public types for the messages API
use serde::{Deserialize, Serialize};

use crate::chat::Message;

#[derive(Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
pub struct ClearMessagesResponse {
    pub status: String,
    pub message: String,
}

impl ClearMessagesResponse {
    pub fn deleted(count: usize) -> Self {
        Self {
            status: String::from("success"),
            message: format!("Deleted {} messages", count),
        }
    }
}
