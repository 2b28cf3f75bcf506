use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// One inbound text message. Lives for a single handler chain run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Raw message text; sent to the model unchanged as the prompt.
    pub content: String,
    /// When the adapter received the message.
    pub received_at: DateTime<Utc>,
}
