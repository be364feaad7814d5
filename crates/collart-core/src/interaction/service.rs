//! Interactions service trait.

use super::model::Interaction;
use crate::error::Result;
use async_trait::async_trait;

/// Interaction capabilities of the backend.
#[async_trait]
pub trait InteractionsService: Send + Sync {
    /// All interactions in which `user_id` is sender or getter.
    async fn interactions(&self, user_id: &str) -> Result<Vec<Interaction>>;

    /// Responds to someone else's order; the owner becomes the getter.
    async fn respond(&self, order_id: &str, owner_id: &str) -> Result<()>;

    /// Invites a specialist to one of my orders.
    async fn invite(&self, order_id: &str, specialist_id: &str) -> Result<()>;

    /// Accepts an interaction on behalf of `acting_user_id`.
    async fn accept(&self, interaction_id: &str, acting_user_id: &str) -> Result<()>;

    /// Rejects an interaction on behalf of `acting_user_id`.
    async fn reject(&self, interaction_id: &str, acting_user_id: &str) -> Result<()>;
}
