//! # Gemini API client
//!
//! Thin client for the Gemini `generateContent` endpoint plus [`classify`], which reduces a
//! response to a single [`CompletionOutcome`]. The HTTP client is injected by the caller so one
//! `reqwest::Client` (and its timeout settings) can be shared across the process.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

mod error;
mod outcome;
mod types;

pub use error::GeminiError;
pub use outcome::{classify, CompletionOutcome};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerateContentResult,
    Part, PromptFeedback, RequestContent, RequestPart,
};

use types::ApiErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Text-completion interface: one prompt in, one response object out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user turn. No retries.
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResult, GeminiError>;
}

/// Gemini client over an injected `reqwest::Client`.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Builds a client with the default base URL and model.
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the API base URL (e.g. a proxy or a test server). Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResult, GeminiError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            api_key = %mask_token(&self.api_key),
            "Gemini generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), body_len = body.len(), "Gemini response received");

        // Only a body that is not JSON at all is an error; `null` or a non-object is no response.
        let value: Value = serde_json::from_str(&body)?;
        let response = serde_json::from_value::<GenerateContentResponse>(value).ok();
        Ok(GenerateContentResult { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let client = GeminiClient::new(reqwest::Client::new(), "key")
            .with_base_url("http://localhost:1234/v1beta/")
            .with_model("gemini-1.5-flash");
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_defaults() {
        let client = GeminiClient::new(reqwest::Client::new(), "key");
        assert_eq!(client.model(), "gemini-pro");
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }
}
