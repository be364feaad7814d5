//! Sign-in, sign-up, session restore and logout.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::Session;
use collart_core::auth::{AuthService, Credentials, Registration};
use collart_core::error::{CollartError, Result};
use collart_core::settings::{SettingKey, SettingsStore};
use collart_core::user::User;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_loading: bool,
    pub user: Option<User>,
    /// Message of the last failed attempt, cleared by the next attempt.
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub struct AuthViewModel {
    auth: Arc<dyn AuthService>,
    session: Session,
    settings: Arc<dyn SettingsStore>,
    state: Observable<AuthState>,
    scope: ViewScope,
}

impl AuthViewModel {
    pub fn new(
        auth: Arc<dyn AuthService>,
        session: Session,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            auth,
            session,
            settings,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Logs in and loads the profile of the new session.
    ///
    /// On failure no token remains stored and the error is both published
    /// and returned.
    pub async fn attempt_login(&self, email: &str, password: &str) -> Result<User> {
        let credentials = Credentials::new(email.trim(), password);
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return self.fail(CollartError::invalid_input("Email and password are required"));
        }

        self.begin();
        let outcome = self
            .scope
            .run(async {
                self.auth.login(&credentials).await?;
                self.auth.current_user().await
            })
            .await;
        self.finish_sign_in(outcome).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<User> {
        if let Err(err) = validate_registration(registration) {
            return self.fail(err);
        }

        self.begin();
        let outcome = self
            .scope
            .run(async {
                self.auth.register(registration).await?;
                self.auth.current_user().await
            })
            .await;
        self.finish_sign_in(outcome).await
    }

    /// Resumes a stored session.
    ///
    /// Returns `false` when there is no token or the server rejected it; the
    /// caller then shows the login screen.
    pub async fn restore(&self) -> Result<bool> {
        if !self.session.is_authenticated().await {
            return Ok(false);
        }

        self.begin();
        let outcome = self.scope.run(self.auth.current_user()).await;
        match self.finish(outcome).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_unauthorized() => {
                tracing::info!(target: "collart::auth", "Stored session expired");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Forgets the token, the user id and the cached profile.
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await;
        self.settings.remove(SettingKey::AuthToken)?;
        self.settings.remove(SettingKey::UserId)?;
        self.state.update(|state| *state = AuthState::default());
        tracing::info!(target: "collart::auth", "Logged out");
        Ok(())
    }

    fn begin(&self) {
        self.state.update(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    /// A token issued by a sign-in whose profile fetch then failed is not
    /// kept, so a later `restore` does not resume a half-finished session.
    async fn finish_sign_in(&self, outcome: Result<User>) -> Result<User> {
        if outcome.is_err() {
            self.discard_token().await;
        }
        self.finish(outcome).await
    }

    async fn discard_token(&self) {
        self.session.clear_token().await;
        if let Err(err) = self.settings.remove(SettingKey::AuthToken) {
            tracing::warn!(target: "collart::auth", "Failed to remove stored token: {err}");
        }
    }

    async fn finish(&self, outcome: Result<User>) -> Result<User> {
        match outcome {
            Ok(user) => {
                self.session.set_user(user.clone()).await;
                if let Err(err) = self.settings.set(SettingKey::UserId, &user.id) {
                    tracing::warn!(target: "collart::auth", "Failed to persist user id: {err}");
                }
                tracing::info!(target: "collart::auth", "Signed in as {}", user.id);
                self.state.update(|state| {
                    state.is_loading = false;
                    state.user = Some(user.clone());
                });
                Ok(user)
            }
            Err(err) => {
                self.state.update(|state| state.is_loading = false);
                self.fail(err)
            }
        }
    }

    fn fail<T>(&self, err: CollartError) -> Result<T> {
        if !err.is_cancelled() {
            tracing::warn!(target: "collart::auth", "Authentication failed: {err}");
            let message = err.to_string();
            self.state.update(|state| state.error = Some(message));
        }
        Err(err)
    }
}

fn validate_registration(registration: &Registration) -> Result<()> {
    if registration.email.trim().is_empty() || registration.password.is_empty() {
        return Err(CollartError::invalid_input("Email and password are required"));
    }
    if registration.password != registration.confirm_password {
        return Err(CollartError::invalid_input("Passwords do not match"));
    }
    if registration.name.trim().is_empty() {
        return Err(CollartError::invalid_input("Name is required"));
    }
    Ok(())
}
