//! Session context shared by the REST client and view models.
//!
//! A `Session` is a cheap, cloneable handle. It is created once at startup
//! and passed explicitly to everything that needs the token, the current
//! user or the display language.

use crate::error::Result;
use crate::language::Language;
use crate::settings::{SettingKey, SettingsStore};
use crate::user::User;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub language: Language,
}

/// Shared session handle.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState {
                language,
                ..Default::default()
            })),
        }
    }

    /// Rebuilds the session from persisted settings (token and language).
    pub async fn restore(settings: &dyn SettingsStore) -> Result<Self> {
        let language = settings
            .get(SettingKey::Language)?
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();
        let session = Self::with_language(language);
        if let Some(token) = settings.get(SettingKey::AuthToken)? {
            session.set_token(token).await;
        }
        Ok(session)
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        self.inner.write().await.token = Some(token.into());
    }

    pub async fn clear_token(&self) {
        self.inner.write().await.token = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    pub async fn user(&self) -> Option<User> {
        self.inner.read().await.user.clone()
    }

    pub async fn current_user_id(&self) -> Option<String> {
        self.inner.read().await.user.as_ref().map(|u| u.id.clone())
    }

    pub async fn set_user(&self, user: User) {
        self.inner.write().await.user = Some(user);
    }

    /// Mutates the current user in place; returns `None` when signed out.
    pub async fn update_user<R>(&self, f: impl FnOnce(&mut User) -> R) -> Option<R> {
        let mut state = self.inner.write().await;
        state.user.as_mut().map(f)
    }

    pub async fn language(&self) -> Language {
        self.inner.read().await.language
    }

    pub async fn set_language(&self, language: Language) {
        self.inner.write().await.language = language;
    }

    /// Drops token and user, keeping the language preference.
    pub async fn clear(&self) {
        let mut state = self.inner.write().await;
        state.token = None;
        state.user = None;
    }
}
