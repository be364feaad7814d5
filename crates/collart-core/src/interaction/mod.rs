//! Interaction domain module.
//!
//! # Module Structure
//!
//! - `model`: `Interaction`, `InteractionStatus` state machine, `StatusGroup`
//! - `tracker`: partitioning into responses/invitations/outgoing
//! - `service`: `InteractionsService` trait

mod model;
mod service;
mod tracker;

pub use model::{Interaction, InteractionStatus, StatusGroup};
pub use service::InteractionsService;
pub use tracker::{InteractionRole, InteractionTracker, TransitionOutcome, classify};
