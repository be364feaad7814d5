//! Interaction tracker.
//!
//! Partitions the current user's interactions into responses, invitations
//! and outgoing requests, and applies server-confirmed status changes.

use super::model::{Interaction, InteractionStatus, StatusGroup};
use serde::{Deserialize, Serialize};

/// How an interaction relates to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionRole {
    /// Someone responded to an order I own.
    Response,
    /// Someone invited me to their order.
    Invitation,
    /// I sent it and wait for the other side.
    Outgoing,
}

/// Classifies an interaction from `current_user_id`'s point of view.
pub fn classify(interaction: &Interaction, current_user_id: &str) -> InteractionRole {
    if interaction.getter.id != current_user_id {
        InteractionRole::Outgoing
    } else if interaction.order.owner_id == current_user_id {
        InteractionRole::Response
    } else {
        InteractionRole::Invitation
    }
}

/// Result of applying a confirmed status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    /// Interaction was already accepted or rejected; nothing changed.
    Ignored,
    /// No tracked interaction has this id.
    Unknown,
}

/// Tracked interactions of one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTracker {
    current_user_id: String,
    responses: Vec<Interaction>,
    invitations: Vec<Interaction>,
    outgoing: Vec<Interaction>,
}

impl InteractionTracker {
    pub fn new(current_user_id: impl Into<String>) -> Self {
        Self {
            current_user_id: current_user_id.into(),
            ..Default::default()
        }
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    /// Replaces the tracked interactions with a fresh server list.
    ///
    /// An interaction that is terminal locally stays terminal even if the
    /// incoming copy still reports it as active.
    pub fn load(&mut self, interactions: Vec<Interaction>) {
        let mut responses = Vec::new();
        let mut invitations = Vec::new();
        let mut outgoing = Vec::new();

        for mut interaction in interactions {
            if let Some(known) = self.find(&interaction.id)
                && known.status.is_terminal()
                && !interaction.status.is_terminal()
            {
                interaction.status = known.status;
            }

            match classify(&interaction, &self.current_user_id) {
                InteractionRole::Response => responses.push(interaction),
                InteractionRole::Invitation => invitations.push(interaction),
                InteractionRole::Outgoing => outgoing.push(interaction),
            }
        }

        self.responses = responses;
        self.invitations = invitations;
        self.outgoing = outgoing;
    }

    pub fn responses(&self) -> &[Interaction] {
        &self.responses
    }

    pub fn invitations(&self) -> &[Interaction] {
        &self.invitations
    }

    pub fn outgoing(&self) -> &[Interaction] {
        &self.outgoing
    }

    pub fn len(&self) -> usize {
        self.responses.len() + self.invitations.len() + self.outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, interaction_id: &str) -> Option<&Interaction> {
        self.iter().find(|i| i.id == interaction_id)
    }

    pub fn status_of(&self, interaction_id: &str) -> Option<InteractionStatus> {
        self.find(interaction_id).map(|i| i.status)
    }

    /// Applies a status change the server has already acknowledged.
    pub fn confirm(&mut self, interaction_id: &str, next: InteractionStatus) -> TransitionOutcome {
        let Some(interaction) = self
            .responses
            .iter_mut()
            .chain(self.invitations.iter_mut())
            .chain(self.outgoing.iter_mut())
            .find(|i| i.id == interaction_id)
        else {
            return TransitionOutcome::Unknown;
        };

        match interaction.transition(next) {
            Ok(()) => TransitionOutcome::Applied,
            Err(_) => TransitionOutcome::Ignored,
        }
    }

    /// Interactions of one role whose status falls into `group`.
    pub fn filtered(&self, role: InteractionRole, group: StatusGroup) -> Vec<&Interaction> {
        let source = match role {
            InteractionRole::Response => &self.responses,
            InteractionRole::Invitation => &self.invitations,
            InteractionRole::Outgoing => &self.outgoing,
        };
        source.iter().filter(|i| i.status.group() == group).collect()
    }

    fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.responses
            .iter()
            .chain(self.invitations.iter())
            .chain(self.outgoing.iter())
    }
}
