//! User domain module.
//!
//! This module contains the user profile, its specialist projection and the
//! profile service trait.
//!
//! # Module Structure
//!
//! - `model`: `User`, `Specialist`, `ProfileUpdate`
//! - `service`: `ProfileService` trait

mod model;
mod service;

// Re-export public API
pub use model::{ProfileUpdate, Specialist, User};
pub use service::ProfileService;
