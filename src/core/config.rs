use std::env;

/// Value used for the API key when `GEMINI_API_KEY` is unset. Requests
/// made with it will be rejected upstream.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl AppConfig {
    /// Full URL of the `generateContent` endpoint for the configured
    /// model.
    pub fn gemini_api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.gemini_api_hostname.trim_end_matches("/"),
            self.gemini_model
        )
    }

    pub fn has_placeholder_api_key(&self) -> bool {
        self.gemini_api_key == PLACEHOLDER_API_KEY
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_hostname = env::var("GEMINI_API_HOST")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_api_key =
            env::var("GEMINI_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
        }
    }
}
