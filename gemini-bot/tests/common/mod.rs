//! Shared test helpers: message builder and a Bot that records replies instead of sending them.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use gemini_bot::{Bot, Chat, DbotError, Message, Result, User};
use std::sync::Mutex;

pub fn make_message(id: &str, chat_id: i64, content: &str) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        received_at: Utc::now(),
    }
}

/// Records every (chat_id, text) it is asked to send.
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, text)| text).collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

/// Bot whose sends always fail, as when Telegram rejects the request.
pub struct FailingBot;

#[async_trait]
impl Bot for FailingBot {
    async fn send_message(&self, _chat: &Chat, _text: &str) -> Result<()> {
        Err(DbotError::Bot("Bad Request: chat not found".to_string()))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
