use crate::upload::UploadFile;
use crate::user::Specialist;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub files: Vec<String>,
}

impl Message {
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}

/// Conversation summary with one counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub counterpart: Specialist,
    pub last_message: String,
    pub last_message_at: Option<DateTime<Utc>>,
    pub unread_count: u32,
    pub is_read: bool,
}

/// A message being composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub receiver_id: String,
    pub text: String,
    pub files: Vec<UploadFile>,
}

impl OutgoingMessage {
    /// Messages need text or at least one file.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.files.is_empty()
    }
}
