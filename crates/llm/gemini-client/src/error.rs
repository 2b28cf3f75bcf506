use thiserror::Error;

/// Failure of a single `generateContent` call. A response that decodes but has an odd shape is
/// not an error; see [`crate::classify`].
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
