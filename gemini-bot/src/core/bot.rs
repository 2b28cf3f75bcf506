//! Outbound side of the chat transport.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests
//! substitute a recording implementation.

use crate::core::error::Result;
use crate::core::types::{Chat, Message};
use async_trait::async_trait;

/// Sends text back to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}
