//! Chat DTOs

use super::IntoDomain;
use super::user::UserDto;
use chrono::{DateTime, Utc};
use collart_core::Language;
use collart_core::chat::{Chat, Message};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    #[serde(rename = "senderID")]
    pub sender_id: String,
    #[serde(rename = "receiverID")]
    pub receiver_id: String,
    pub message: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub user: UserDto,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub is_read: bool,
}

impl IntoDomain<Message> for MessageDto {
    fn into_domain(self, _language: Language) -> Message {
        Message {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            text: self.message.unwrap_or_default(),
            is_read: self.is_read,
            created_at: self.created_at,
            files: self.files,
        }
    }
}

impl IntoDomain<Chat> for ChatDto {
    fn into_domain(self, language: Language) -> Chat {
        Chat {
            counterpart: self.user.into_domain(language),
            last_message: self.last_message.unwrap_or_default(),
            last_message_at: self.last_message_at,
            unread_count: self.unread_count,
            is_read: self.is_read,
        }
    }
}
