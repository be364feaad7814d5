use super::model::{Credentials, Registration};
use crate::error::Result;
use crate::user::User;
use async_trait::async_trait;

/// Authentication capabilities of the backend.
///
/// Implementations store the issued token in the session on success and
/// clear any stored token when login fails.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account and returns the issued token.
    async fn register(&self, registration: &Registration) -> Result<String>;

    /// Exchanges credentials for a token.
    async fn login(&self, credentials: &Credentials) -> Result<String>;

    /// Profile of the user the current token belongs to.
    async fn current_user(&self) -> Result<User>;
}
