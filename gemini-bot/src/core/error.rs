//! Error types for the bot.

use thiserror::Error;

/// Top-level error: startup configuration, transport, HTTP client setup.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
