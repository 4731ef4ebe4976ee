use std::sync::Arc;

use crate::chat::MessageStore;
use crate::core::AppConfig;
use crate::gemini::{GeminiClient, SharedCompletionClient};

pub struct AppState {
    pub store: MessageStore,
    pub completion: SharedCompletionClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: MessageStore, completion: SharedCompletionClient, config: AppConfig) -> Self {
        Self {
            store,
            completion,
            config,
        }
    }

    /// State backed by the Gemini API described by `config` and an
    /// empty store
    pub fn from_config(config: AppConfig) -> Self {
        let completion = Arc::new(GeminiClient::from_config(&config));
        Self::new(MessageStore::new(), completion, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PLACEHOLDER_API_KEY;

    #[test]
    fn it_keeps_config_for_startup_checks() {
        let state = AppState::from_config(AppConfig {
            gemini_api_hostname: String::from("http://localhost:1234"),
            gemini_api_key: PLACEHOLDER_API_KEY.to_string(),
            gemini_model: String::from("gemini-1.5-flash"),
        });

        assert!(state.config.has_placeholder_api_key());
        assert_eq!(state.config.gemini_model, "gemini-1.5-flash");
    }
}
