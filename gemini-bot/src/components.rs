//! Builds the long-lived pieces from [`BotConfig`]: the teloxide bot, the outbound [`Bot`]
//! adapter, and the Gemini client over an injected `reqwest::Client`.

use gemini_client::{mask_token, CompletionClient, GeminiClient};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::core::{Bot as CoreBot, DbotError, Result};
use crate::telegram::TelegramBotAdapter;

#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub completion_client: Arc<dyn CompletionClient>,
    /// Written once by the REPL runner after `get_me`.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// HTTP client handed to the Gemini client. The optional timeout is the only per-request limit.
pub fn build_http_client(config: &BotConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.gemini_timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.telegram_token.clone());
        match config.telegram_api_url.as_deref() {
            Some(url) => bot.set_api_url(reqwest::Url::parse(url).map_err(|e| {
                DbotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url, e))
            })?),
            None => bot,
        }
    };

    let completion_client: Arc<dyn CompletionClient> = Arc::new(
        GeminiClient::new(build_http_client(config)?, config.google_api_key.clone())
            .with_base_url(config.gemini_base_url.clone())
            .with_model(config.gemini_model.clone()),
    );

    info!(
        model = %config.gemini_model,
        base_url = %config.gemini_base_url,
        timeout_secs = ?config.gemini_timeout_secs,
        telegram_token = %mask_token(&config.telegram_token),
        google_api_key = %mask_token(&config.google_api_key),
        "Bot components built"
    );

    Ok(BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        teloxide_bot,
        completion_client,
        bot_username: Arc::new(RwLock::new(None)),
    })
}
