//! Interaction domain model and its status state machine.

use crate::error::{CollartError, Result};
use crate::order::Order;
use crate::user::Specialist;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle status of an interaction.
///
/// `Active` is the initial state. `Accepted` and `Rejected` are terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InteractionStatus {
    #[default]
    Active,
    Accepted,
    Rejected,
}

impl InteractionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, InteractionStatus::Active)
    }

    /// Only active → accepted and active → rejected are legal.
    pub fn can_transition_to(self, next: InteractionStatus) -> bool {
        self == InteractionStatus::Active && next.is_terminal()
    }

    pub fn group(self) -> StatusGroup {
        if self.is_terminal() {
            StatusGroup::Completed
        } else {
            StatusGroup::Active
        }
    }
}

/// Display tabs over interaction statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusGroup {
    /// Awaiting an answer.
    #[default]
    Active,
    /// Accepted or rejected.
    Completed,
}

/// A request linking a sender, a getter and an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub sender: Specialist,
    pub getter: Specialist,
    pub order: Order,
    pub status: InteractionStatus,
}

impl Interaction {
    /// Moves to `next`, rejecting anything but active → terminal.
    pub fn transition(&mut self, next: InteractionStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(CollartError::InvalidTransition {
                id: self.id.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
