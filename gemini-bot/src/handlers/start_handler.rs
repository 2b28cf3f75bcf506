//! Answers `/start` with the fixed greeting; everything else continues down the chain.

use async_trait::async_trait;
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::reply::START_GREETING;
use crate::telegram::Command;

/// Replies to `/start` (and `/start@<this bot>`) without calling the model.
pub struct StartCommandHandler {
    /// Filled from `get_me` before the REPL starts; needed to accept `/start@username`.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl StartCommandHandler {
    pub fn new(bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot_username }
    }

    /// Returns true if `text` is the start command addressed to this bot (or to no bot).
    pub async fn is_start_command(&self, text: &str) -> bool {
        let username = self.bot_username.read().await;
        matches!(
            Command::parse(text, username.as_deref().unwrap_or_default()),
            Ok(Command::Start)
        )
    }
}

#[async_trait]
impl Handler for StartCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if self.is_start_command(&message.content).await {
            info!(user_id = message.user.id, chat_id = message.chat.id, "Start command");
            return Ok(HandlerResponse::Reply(START_GREETING.to_string()));
        }
        Ok(HandlerResponse::Continue)
    }
}
