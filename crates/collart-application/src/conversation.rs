//! One-to-one conversation with another user.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::chat::{ChatService, Message, OutgoingMessage};
use collart_core::error::{CollartError, Result};
use collart_core::upload::UploadFile;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    pub is_loading: bool,
    pub is_sending: bool,
    /// Oldest first.
    pub messages: Vec<Message>,
}

impl ConversationState {
    /// Messages from the counterpart not read yet.
    pub fn unread_from(&self, counterpart_id: &str) -> usize {
        self.messages
            .iter()
            .filter(|m| m.is_from(counterpart_id) && !m.is_read)
            .count()
    }
}

pub struct ConversationViewModel {
    service: Arc<dyn ChatService>,
    counterpart_id: String,
    state: Observable<ConversationState>,
    scope: ViewScope,
}

impl ConversationViewModel {
    pub fn new(service: Arc<dyn ChatService>, counterpart_id: impl Into<String>) -> Self {
        Self {
            service,
            counterpart_id: counterpart_id.into(),
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn counterpart_id(&self) -> &str {
        &self.counterpart_id
    }

    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ConversationState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn load(&self) -> Result<()> {
        self.state.update(|state| state.is_loading = true);
        let outcome = self
            .scope
            .run(self.service.messages(&self.counterpart_id))
            .await;
        self.state.update(|state| state.is_loading = false);

        let messages = outcome.map_err(|err| self.log_failure("load messages", err))?;
        self.state.update(|state| state.messages = messages);
        Ok(())
    }

    /// Sends text and attachments; the server copy is appended on success.
    pub async fn send(&self, text: &str, files: Vec<UploadFile>) -> Result<Message> {
        let message = OutgoingMessage {
            receiver_id: self.counterpart_id.clone(),
            text: text.trim().to_string(),
            files,
        };
        if message.is_empty() {
            return Err(CollartError::invalid_input("Message is empty"));
        }

        self.state.update(|state| state.is_sending = true);
        let outcome = self.scope.run(self.service.send(&message)).await;
        self.state.update(|state| state.is_sending = false);

        let sent = outcome.map_err(|err| self.log_failure("send message", err))?;
        self.state.update(|state| state.messages.push(sent.clone()));
        Ok(sent)
    }

    /// Marks the counterpart's messages as read, locally once the server agreed.
    pub async fn mark_read(&self) -> Result<()> {
        if self.state.with(|state| state.unread_from(&self.counterpart_id)) == 0 {
            return Ok(());
        }

        self.scope
            .run(self.service.mark_read(&self.counterpart_id))
            .await
            .map_err(|err| self.log_failure("mark messages read", err))?;

        let counterpart = self.counterpart_id.as_str();
        self.state.update(|state| {
            state
                .messages
                .iter_mut()
                .filter(|m| m.is_from(counterpart))
                .for_each(|m| m.is_read = true);
        });
        Ok(())
    }

    fn log_failure(&self, action: &str, err: CollartError) -> CollartError {
        if !err.is_cancelled() {
            tracing::warn!(
                target: "collart::chat",
                "Failed to {action} with {}: {err}",
                self.counterpart_id
            );
        }
        err
    }
}
