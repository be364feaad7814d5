//! Publishing and deleting the current user's orders.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::Session;
use collart_core::error::{CollartError, Result};
use collart_core::order::{NewOrder, Order, OrderService};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderEditorState {
    pub is_saving: bool,
    pub last_created: Option<Order>,
}

pub struct OrderEditorViewModel {
    service: Arc<dyn OrderService>,
    session: Session,
    state: Observable<OrderEditorState>,
    scope: ViewScope,
}

impl OrderEditorViewModel {
    pub fn new(service: Arc<dyn OrderService>, session: Session) -> Self {
        Self {
            service,
            session,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderEditorState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> OrderEditorState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        validate(order)?;

        self.state.update(|state| state.is_saving = true);
        let outcome = self.scope.run(self.service.create_order(order)).await;
        self.state.update(|state| state.is_saving = false);
        let mut created = outcome
            .map_err(|err| log_failure!("collart::orders", "create order", err))?;

        if let Some(me) = self.session.user().await {
            if created.owner_id.is_empty() {
                created.owner_id = me.id.clone();
            }
            if created.author_name.is_empty() {
                created.author_name = me.display_name();
                created.author_avatar = me.user_photo.clone();
            }
        }
        self.session
            .update_user(|user| user.add_active_project(created.clone()))
            .await;
        self.state
            .update(|state| state.last_created = Some(created.clone()));
        tracing::info!(target: "collart::orders", "Created order {}", created.id);
        Ok(created)
    }

    pub async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.state.update(|state| state.is_saving = true);
        let outcome = self.scope.run(self.service.delete_order(order_id)).await;
        self.state.update(|state| state.is_saving = false);
        outcome.map_err(|err| log_failure!("collart::orders", "delete order", err))?;

        self.session
            .update_user(|user| {
                user.remove_active_project(order_id);
                user.unlike(order_id);
            })
            .await;
        self.state.update(|state| {
            if state.last_created.as_ref().is_some_and(|o| o.id == order_id) {
                state.last_created = None;
            }
        });
        tracing::info!(target: "collart::orders", "Deleted order {order_id}");
        Ok(())
    }
}

fn validate(order: &NewOrder) -> Result<()> {
    if order.title.trim().is_empty() {
        return Err(CollartError::invalid_input("Title is required"));
    }
    if order.skill_id.is_empty() {
        return Err(CollartError::invalid_input("Pick the required role"));
    }
    if order.end_time < order.start_time {
        return Err(CollartError::invalid_input("End date is before start date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, user};
    use chrono::{TimeZone, Utc};
    use collart_core::Experience;
    use collart_core::upload::UploadFile;

    fn new_order(title: &str, start_day: u32, end_day: u32) -> NewOrder {
        NewOrder {
            title: title.to_string(),
            skill_id: "S1".into(),
            task_description: "Draw".into(),
            project_description: "Cafe".into(),
            experience: Experience::Years1To3,
            tools: vec!["Figma".into()],
            start_time: Utc.with_ymd_and_hms(2024, 5, start_day, 0, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 5, end_day, 0, 0, 0).unwrap(),
            image: UploadFile::new("cover.png", vec![1]),
            files: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_adds_active_project() {
        let backend = Arc::new(FakeBackend::new());
        let session = Session::new();
        session.set_user(user("me")).await;
        let vm = OrderEditorViewModel::new(backend.clone(), session.clone());

        let created = vm.create_order(&new_order("Logo", 1, 10)).await.unwrap();

        assert_eq!(created.owner_id, "me");
        assert_eq!(created.author_name, "Ann Lee");
        let me = session.user().await.unwrap();
        assert_eq!(me.active_projects().len(), 1);
        assert_eq!(vm.snapshot().last_created, Some(created));
    }

    #[tokio::test]
    async fn test_invalid_dates_are_rejected() {
        let backend = Arc::new(FakeBackend::new());
        let vm = OrderEditorViewModel::new(backend.clone(), Session::new());

        let err = vm.create_order(&new_order("Logo", 10, 1)).await.unwrap_err();
        assert!(matches!(err, CollartError::InvalidInput(_)));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_from_user() {
        let backend = Arc::new(FakeBackend::new());
        let session = Session::new();
        session.set_user(user("me")).await;
        let vm = OrderEditorViewModel::new(backend.clone(), session.clone());
        let created = vm.create_order(&new_order("Logo", 1, 10)).await.unwrap();

        vm.delete_order(&created.id).await.unwrap();

        assert!(session.user().await.unwrap().active_projects().is_empty());
        assert_eq!(vm.snapshot().last_created, None);
        assert_eq!(backend.calls(), vec!["create_order Logo", "delete_order NEW"]);
    }
}
