//! In-memory transcript storage.
//!
//! Each user's transcript sits behind its own async mutex so a chat
//! exchange can hold it across the completion call. That keeps the
//! user message and the bot reply adjacent and message ids unique
//! even when requests for the same user arrive concurrently. The
//! outer map lock is only held long enough to look up or remove an
//! entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::models::{Message, Sender};

#[derive(Debug)]
pub struct Transcript {
    user_id: String,
    messages: Vec<Message>,
    // Set when the transcript has been cleared from the store while
    // someone was waiting on its lock
    removed: bool,
}

impl Transcript {
    fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            messages: Vec::new(),
            removed: false,
        }
    }

    /// Append a message and return the id it was assigned, the next
    /// one in this transcript.
    pub fn append(&mut self, text: &str, sender: Sender, timestamp: i64) -> usize {
        let id = self.messages.len() + 1;
        self.messages.push(Message {
            id,
            user_id: self.user_id.clone(),
            text: text.to_string(),
            sender,
            timestamp,
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub type TranscriptGuard = OwnedMutexGuard<Transcript>;

type TranscriptHandle = Arc<AsyncMutex<Transcript>>;

#[derive(Clone, Default)]
pub struct MessageStore {
    transcripts: Arc<Mutex<HashMap<String, TranscriptHandle>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> Result<MutexGuard<'_, HashMap<String, TranscriptHandle>>> {
        self.transcripts
            .lock()
            .map_err(|e| anyhow!("Transcript store lock poisoned: {}", e))
    }

    fn get_or_create(&self, user_id: &str) -> Result<TranscriptHandle> {
        let mut map = self.map()?;
        let handle = map
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(Transcript::new(user_id))));
        Ok(Arc::clone(handle))
    }

    /// Lock the user's transcript for writing, creating an empty one
    /// if it doesn't exist. Waits for any other writer of the same
    /// user to finish.
    pub async fn transcript(&self, user_id: &str) -> Result<TranscriptGuard> {
        loop {
            let guard = self.get_or_create(user_id)?.lock_owned().await;
            // Cleared while we were waiting, try again with whatever
            // is in the store now
            if !guard.removed {
                return Ok(guard);
            }
        }
    }

    /// All messages for the user in insertion order. An unknown user
    /// gets an empty transcript created for them.
    pub async fn messages(&self, user_id: &str) -> Result<Vec<Message>> {
        let transcript = self.transcript(user_id).await?;
        Ok(transcript.messages().to_vec())
    }

    /// Remove the user's transcript from the store and return how
    /// many messages it held. Waits for an in-flight exchange on the
    /// transcript to finish so its messages are counted.
    pub async fn clear(&self, user_id: &str) -> Result<usize> {
        let handle = self.map()?.remove(user_id);
        let Some(handle) = handle else {
            return Ok(0);
        };
        let mut transcript = handle.lock().await;
        transcript.removed = true;
        Ok(transcript.len())
    }

    pub fn contains(&self, user_id: &str) -> Result<bool> {
        Ok(self.map()?.contains_key(user_id))
    }
}
