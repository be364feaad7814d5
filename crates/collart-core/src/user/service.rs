//! Profile service for user and specialist information.

use super::model::{ProfileUpdate, Specialist, User};
use crate::error::Result;
use crate::skill::Skill;
use async_trait::async_trait;

/// Profile capabilities of the backend.
///
/// Covers the specialist search, the skill catalog used by filters and
/// registration, and editing the current user's profile.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// All searchable specialists.
    async fn search_specialists(&self) -> Result<Vec<Specialist>>;

    /// The skill catalog. Does not require authorization.
    async fn skills(&self) -> Result<Vec<Skill>>;

    /// Saves the profile form and returns the updated user.
    ///
    /// # Returns
    ///
    /// The user as returned by the server. Collections (portfolio, tabs) are
    /// not part of the response and come back empty.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User>;
}
