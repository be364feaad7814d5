//! Responses and invitations of the current user.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::Session;
use collart_core::error::{CollartError, Result};
use collart_core::interaction::{
    Interaction, InteractionRole, InteractionStatus, InteractionTracker, InteractionsService,
    StatusGroup, TransitionOutcome, classify,
};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionsState {
    pub is_loading: bool,
    /// Tab currently shown.
    pub group: StatusGroup,
    pub tracker: InteractionTracker,
}

pub struct InteractionsViewModel {
    service: Arc<dyn InteractionsService>,
    session: Session,
    state: Observable<InteractionsState>,
    scope: ViewScope,
}

impl InteractionsViewModel {
    pub fn new(service: Arc<dyn InteractionsService>, session: Session) -> Self {
        Self {
            service,
            session,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<InteractionsState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> InteractionsState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn refresh(&self) -> Result<()> {
        let me = self.current_user_id().await?;
        self.state.update(|state| state.is_loading = true);

        let outcome = self.scope.run(self.service.interactions(&me)).await;
        let interactions = match outcome {
            Ok(interactions) => interactions,
            Err(err) => {
                self.state.update(|state| state.is_loading = false);
                if !err.is_cancelled() {
                    tracing::warn!(target: "collart::interactions", "Failed to load interactions: {err}");
                }
                return Err(err);
            }
        };

        tracing::debug!(
            target: "collart::interactions",
            "Loaded {} interactions",
            interactions.len()
        );
        self.state.update(|state| {
            state.is_loading = false;
            if state.tracker.current_user_id() != me {
                state.tracker = InteractionTracker::new(me.clone());
            }
            state.tracker.load(interactions);
        });
        Ok(())
    }

    pub async fn accept(&self, interaction_id: &str) -> Result<TransitionOutcome> {
        self.answer(interaction_id, InteractionStatus::Accepted).await
    }

    pub async fn reject(&self, interaction_id: &str) -> Result<TransitionOutcome> {
        self.answer(interaction_id, InteractionStatus::Rejected).await
    }

    pub fn set_group(&self, group: StatusGroup) {
        self.state.update(|state| state.group = group);
    }

    /// Responses to my orders in the selected tab.
    pub fn visible_responses(&self) -> Vec<Interaction> {
        self.visible(InteractionRole::Response)
    }

    /// Invitations to other people's orders in the selected tab.
    pub fn visible_invitations(&self) -> Vec<Interaction> {
        self.visible(InteractionRole::Invitation)
    }

    /// Interactions I sent, in the selected tab.
    pub fn visible_outgoing(&self) -> Vec<Interaction> {
        self.visible(InteractionRole::Outgoing)
    }

    fn visible(&self, role: InteractionRole) -> Vec<Interaction> {
        self.state.with(|state| {
            state
                .tracker
                .filtered(role, state.group)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Sends the answer, then records it locally.
    ///
    /// A non-active interaction is left alone without contacting the server.
    async fn answer(&self, interaction_id: &str, next: InteractionStatus) -> Result<TransitionOutcome> {
        let me = self.current_user_id().await?;
        let interaction = self
            .state
            .with(|state| state.tracker.find(interaction_id).cloned())
            .ok_or_else(|| CollartError::not_found("interaction", interaction_id))?;

        if interaction.status != InteractionStatus::Active {
            tracing::debug!(
                target: "collart::interactions",
                "Interaction {interaction_id} already {}, ignoring {next}",
                interaction.status
            );
            return Ok(TransitionOutcome::Ignored);
        }
        if classify(&interaction, &me) == InteractionRole::Outgoing {
            return Err(CollartError::invalid_input(
                "Only the receiving side can answer an interaction",
            ));
        }

        let sent = match next {
            InteractionStatus::Rejected => self.service.reject(interaction_id, &me),
            _ => self.service.accept(interaction_id, &me),
        };
        if let Err(err) = self.scope.run(sent).await {
            if !err.is_cancelled() {
                tracing::warn!(target: "collart::interactions", "Failed to answer {interaction_id} ({next}): {err}");
            }
            return Err(err);
        }

        let mut outcome = TransitionOutcome::Unknown;
        self.state
            .update(|state| outcome = state.tracker.confirm(interaction_id, next));
        tracing::info!(target: "collart::interactions", "Interaction {interaction_id} {next}");
        Ok(outcome)
    }

    async fn current_user_id(&self) -> Result<String> {
        self.session
            .current_user_id()
            .await
            .ok_or(CollartError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, order, specialist, user};

    fn interaction(id: &str, sender: &str, getter: &str, owner: &str) -> Interaction {
        Interaction {
            id: id.to_string(),
            sender: specialist(sender, "Designer", &[]),
            getter: specialist(getter, "Designer", &[]),
            order: order(&format!("order-{id}"), owner, 1),
            status: InteractionStatus::Active,
        }
    }

    async fn view_model(backend: &Arc<FakeBackend>) -> InteractionsViewModel {
        let session = Session::new();
        session.set_user(user("me")).await;
        InteractionsViewModel::new(backend.clone(), session)
    }

    #[tokio::test]
    async fn test_refresh_partitions_by_role() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![
            interaction("R1", "U2", "me", "me"),
            interaction("I1", "U3", "me", "U3"),
            interaction("S1", "me", "U4", "U4"),
        ];
        let vm = view_model(&backend).await;

        vm.refresh().await.unwrap();

        assert_eq!(vm.visible_responses()[0].id, "R1");
        assert_eq!(vm.visible_invitations()[0].id, "I1");
        assert_eq!(vm.visible_outgoing()[0].id, "S1");
        assert_eq!(backend.calls(), vec!["interactions me"]);
    }

    #[tokio::test]
    async fn test_double_accept_is_a_no_op() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![interaction("R1", "U2", "me", "me")];
        let vm = view_model(&backend).await;
        vm.refresh().await.unwrap();

        assert_eq!(vm.accept("R1").await.unwrap(), TransitionOutcome::Applied);
        assert_eq!(vm.accept("R1").await.unwrap(), TransitionOutcome::Ignored);
        assert_eq!(vm.reject("R1").await.unwrap(), TransitionOutcome::Ignored);

        let accepts = backend
            .calls()
            .iter()
            .filter(|c| c.starts_with("accept") || c.starts_with("reject"))
            .count();
        assert_eq!(accepts, 1);
        assert_eq!(
            vm.snapshot().tracker.status_of("R1"),
            Some(InteractionStatus::Accepted)
        );
    }

    #[tokio::test]
    async fn test_groups_follow_status() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![
            interaction("I1", "U2", "me", "U2"),
            interaction("I2", "U3", "me", "U3"),
        ];
        let vm = view_model(&backend).await;
        vm.refresh().await.unwrap();
        vm.reject("I1").await.unwrap();

        assert_eq!(vm.visible_invitations().len(), 1);
        vm.set_group(StatusGroup::Completed);
        let completed = vm.visible_invitations();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].status, InteractionStatus::Rejected);
    }

    #[tokio::test]
    async fn test_failed_accept_keeps_active() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![interaction("R1", "U2", "me", "me")];
        let vm = view_model(&backend).await;
        vm.refresh().await.unwrap();

        backend.fail_with(CollartError::status(500, "boom"));
        assert!(vm.accept("R1").await.is_err());
        assert_eq!(
            vm.snapshot().tracker.status_of("R1"),
            Some(InteractionStatus::Active)
        );
    }

    #[tokio::test]
    async fn test_reload_keeps_local_terminal_status() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![interaction("R1", "U2", "me", "me")];
        let vm = view_model(&backend).await;
        vm.refresh().await.unwrap();
        vm.accept("R1").await.unwrap();

        // Server copy still reports active
        vm.refresh().await.unwrap();
        assert_eq!(
            vm.snapshot().tracker.status_of("R1"),
            Some(InteractionStatus::Accepted)
        );
    }

    #[tokio::test]
    async fn test_outgoing_cannot_be_answered_and_unknown_is_not_found() {
        let backend = Arc::new(FakeBackend::new());
        *backend.interactions.lock().unwrap() = vec![interaction("S1", "me", "U4", "U4")];
        let vm = view_model(&backend).await;
        vm.refresh().await.unwrap();

        assert!(matches!(
            vm.accept("S1").await.unwrap_err(),
            CollartError::InvalidInput(_)
        ));
        assert!(vm.accept("missing").await.unwrap_err().is_not_found());
    }
}
