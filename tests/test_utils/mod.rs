//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{Router, body::Body};
use http::Request;

use grammar_tutor::api::AppState;
use grammar_tutor::api::app;
use grammar_tutor::chat::MessageStore;
use grammar_tutor::core::AppConfig;
use grammar_tutor::gemini::{COMPLETION_TIMEOUT, CompletionClient, CompletionError};

/// Completion client that answers without making any requests
pub struct StubCompletion {
    // `None` simulates an upstream timeout
    reply: Option<String>,
    delay: Duration,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn timing_out() -> Self {
        Self {
            reply: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, _question: &str) -> Result<String, CompletionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(CompletionError::Timeout(COMPLETION_TIMEOUT)),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        gemini_api_hostname: String::from("http://localhost:1"),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-1.5-flash"),
    }
}

/// Creates application state with an empty store
pub fn test_state(completion: impl CompletionClient + 'static) -> Arc<AppState> {
    Arc::new(AppState::new(
        MessageStore::new(),
        Arc::new(completion),
        test_config(),
    ))
}

/// Creates a test application router with its own empty store
pub fn test_app(completion: impl CompletionClient + 'static) -> Router {
    app(test_state(completion))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}

pub fn chat_request(user_id: &str, question: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/chat")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "user_id": user_id,
                "question": question,
            })
            .to_string(),
        ))
        .unwrap()
}

pub fn list_request(user_id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/messages/{}", user_id))
        .body(Body::empty())
        .unwrap()
}

pub fn clear_request(user_id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/messages/{}", user_id))
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}
