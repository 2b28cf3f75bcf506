//! REPL runner: converts teloxide text messages to core messages and hands each one to
//! [`GeminiBot`] on its own task.

use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::core::ToCoreMessage;
use crate::runner::GeminiBot;

/// Fetches the bot username (for `/start@username`), then runs the teloxide REPL until it is
/// stopped (Ctrl-C). Each text message is processed in a spawned task so a slow completion
/// only delays its own reply.
#[instrument(skip(bot, app, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    app: Arc<GeminiBot>,
    bot_username: Arc<RwLock<Option<String>>>,
) {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /start@username will not be recognized"),
    }

    info!("Telegram bot is running");

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let app = app.clone();
        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            tokio::spawn(async move {
                if let Err(e) = app.handle_core_message(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Failed to send reply"
                    );
                }
            });

            Ok(())
        }
    })
    .await;
}
