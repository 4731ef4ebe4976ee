use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

/// A single entry in a user's transcript. `id` is the 1-based
/// position of the message within that transcript.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: usize,
    pub user_id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: i64,
}
