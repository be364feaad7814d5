//! Chat list of the current user.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::chat::{Chat, ChatService};
use collart_core::error::Result;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatsState {
    pub is_loading: bool,
    /// Most recent conversation first.
    pub chats: Vec<Chat>,
}

impl ChatsState {
    pub fn total_unread(&self) -> u32 {
        self.chats.iter().map(|chat| chat.unread_count).sum()
    }
}

pub struct ChatsViewModel {
    service: Arc<dyn ChatService>,
    state: Observable<ChatsState>,
    scope: ViewScope,
}

impl ChatsViewModel {
    pub fn new(service: Arc<dyn ChatService>) -> Self {
        Self {
            service,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatsState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ChatsState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn total_unread(&self) -> u32 {
        self.state.with(ChatsState::total_unread)
    }

    pub async fn refresh(&self) -> Result<()> {
        self.state.update(|state| state.is_loading = true);
        match self.scope.run(self.service.chats()).await {
            Ok(mut chats) => {
                chats.sort_by_key(|chat| Reverse(chat.last_message_at));
                self.state.update(|state| {
                    state.is_loading = false;
                    state.chats = chats;
                });
                Ok(())
            }
            Err(err) => {
                self.state.update(|state| state.is_loading = false);
                if !err.is_cancelled() {
                    tracing::warn!(target: "collart::chat", "Failed to load chats: {err}");
                }
                Err(err)
            }
        }
    }
}
