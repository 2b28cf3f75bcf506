//! Bot configuration, loaded from environment variables (after an optional `.env`).
//!
//! `TELEGRAM_TOKEN` and `GOOGLE_API_KEY` are required; an unset or empty value is a startup
//! error. Everything else has a default.

use std::env;
use std::time::Duration;

use crate::core::{DbotError, Result};

pub const DEFAULT_LOG_FILE: &str = "logs/gemini-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_TOKEN
    pub telegram_token: String,
    /// GOOGLE_API_KEY
    pub google_api_key: String,
    /// GEMINI_MODEL
    pub gemini_model: String,
    /// GEMINI_BASE_URL
    pub gemini_base_url: String,
    /// GEMINI_TIMEOUT_SECS; `None` means requests may wait forever.
    pub gemini_timeout_secs: Option<u64>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from the environment. Required variables are checked first, token before key.
    pub fn from_env() -> Result<Self> {
        let telegram_token = required("TELEGRAM_TOKEN")?;
        let google_api_key = required("GOOGLE_API_KEY")?;

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| gemini_client::DEFAULT_MODEL.to_string());
        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| gemini_client::DEFAULT_BASE_URL.to_string());
        let gemini_timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram_token,
            google_api_key,
            gemini_model,
            gemini_base_url,
            gemini_timeout_secs,
            telegram_api_url,
            log_file,
        })
    }

    /// Checks that configured URLs parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                return Err(DbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url
                )));
            }
        }
        if reqwest::Url::parse(&self.gemini_base_url).is_err() {
            return Err(DbotError::Config(format!(
                "GEMINI_BASE_URL is not a valid URL: {}",
                self.gemini_base_url
            )));
        }
        Ok(())
    }

    pub fn gemini_timeout(&self) -> Option<Duration> {
        self.gemini_timeout_secs.map(Duration::from_secs)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DbotError::Config(format!("{} environment variable is missing.", name)))
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(DbotError::Config(format!(
            "GEMINI_TIMEOUT_SECS must be a positive integer, got: {}",
            raw
        ))),
    }
}
