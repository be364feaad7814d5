use super::model::{Chat, Message, OutgoingMessage};
use crate::error::Result;
use async_trait::async_trait;

/// Messaging capabilities of the backend.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// One entry per counterparty the current user has talked to.
    async fn chats(&self) -> Result<Vec<Chat>>;

    /// Messages exchanged with `counterpart_id`, oldest first.
    async fn messages(&self, counterpart_id: &str) -> Result<Vec<Message>>;

    async fn send(&self, message: &OutgoingMessage) -> Result<Message>;

    /// Marks every message from `counterpart_id` as read.
    async fn mark_read(&self, counterpart_id: &str) -> Result<()>;
}
