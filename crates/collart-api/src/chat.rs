//! Chat list, conversation history, sending and read receipts.

use crate::client::{Access, CollartClient};
use crate::multipart::message_fields;
use async_trait::async_trait;
use collart_core::chat::{Chat, ChatService, Message, OutgoingMessage};
use collart_core::error::Result;
use collart_infrastructure::dto::{ChatDto, IntoDomain, MessageDto, into_domain_vec};
use reqwest::Method;

#[async_trait]
impl ChatService for CollartClient {
    async fn chats(&self) -> Result<Vec<Chat>> {
        let builder = self
            .request(Method::GET, "/messages/chats", Access::Authorized)
            .await?;
        let dtos: Vec<ChatDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn messages(&self, counterpart_id: &str) -> Result<Vec<Message>> {
        let path = format!("/messages/between/{counterpart_id}");
        let builder = self.request(Method::GET, &path, Access::Authorized).await?;
        let dtos: Vec<MessageDto> = self.send_json(builder).await?;
        let mut messages: Vec<Message> = into_domain_vec(dtos, self.language().await);
        // Stable, so equal timestamps keep server order
        messages.sort_by_key(|message| message.created_at);
        Ok(messages)
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<Message> {
        let form = message_fields(message).into_form()?;
        let builder = self
            .request(Method::POST, "/messages/send", Access::Authorized)
            .await?
            .multipart(form);
        let dto: MessageDto = self.send_json(builder).await?;
        Ok(dto.into_domain(self.language().await))
    }

    async fn mark_read(&self, counterpart_id: &str) -> Result<()> {
        let path = format!("/messages/markRead/{counterpart_id}");
        let builder = self.request(Method::POST, &path, Access::Authorized).await?;
        self.send_empty(builder).await
    }
}
