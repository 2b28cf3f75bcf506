use serde::{Deserialize, Serialize};

/// Sender identity. Only used for log fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}
