use serde::{Deserialize, Serialize};

/// Chat (private, group or channel) the message arrived in; replies go back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
