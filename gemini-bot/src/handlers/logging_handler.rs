//! Logs each message on the way in and the outcome on the way out; never stops the chain.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let elapsed_ms = (Utc::now() - message.received_at).num_milliseconds();
        let (response_type, reply_len) = match response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Reply(text) => ("Reply", Some(text.len())),
        };
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            elapsed_ms = elapsed_ms,
            "Processed message"
        );
        Ok(())
    }
}
