//! Current user's profile and the per-user tabs.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::Session;
use collart_core::auth::AuthService;
use collart_core::error::{CollartError, Result};
use collart_core::order::{Order, OrderService, TabKind};
use collart_core::portfolio::{PortfolioProject, PortfolioService};
use collart_core::user::{ProfileService, ProfileUpdate, User};
use std::sync::Arc;
use tokio::sync::watch;

/// Collections shown on a profile page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserTabs {
    pub user_id: String,
    pub portfolio: Vec<PortfolioProject>,
    pub active: Vec<Order>,
    pub liked: Vec<Order>,
    pub collaborations: Vec<Order>,
}

impl UserTabs {
    /// Copies the collections onto `user`, keeping the user's own invariants.
    fn apply_to(&self, user: &mut User) {
        user.portfolio_projects = self.portfolio.clone();
        user.past_collaborations = self.collaborations.clone();
        user.set_active_projects(self.active.iter().cloned());
        user.set_liked_projects(self.liked.iter().cloned());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub is_loading: bool,
    pub is_saving: bool,
    pub user: Option<User>,
    /// Tabs of the last profile opened, the current user's or someone else's.
    pub tabs: Option<UserTabs>,
}

pub struct ProfileViewModel {
    auth: Arc<dyn AuthService>,
    profiles: Arc<dyn ProfileService>,
    orders: Arc<dyn OrderService>,
    portfolio: Arc<dyn PortfolioService>,
    session: Session,
    state: Observable<ProfileState>,
    scope: ViewScope,
}

impl ProfileViewModel {
    pub fn new(
        auth: Arc<dyn AuthService>,
        profiles: Arc<dyn ProfileService>,
        orders: Arc<dyn OrderService>,
        portfolio: Arc<dyn PortfolioService>,
        session: Session,
    ) -> Self {
        Self {
            auth,
            profiles,
            orders,
            portfolio,
            session,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Fetches the current user together with all of their tabs.
    pub async fn load_current(&self) -> Result<User> {
        self.state.update(|state| state.is_loading = true);
        let outcome = self
            .scope
            .run(async {
                let user = self.auth.current_user().await?;
                let tabs = self.fetch_tabs(&user.id).await?;
                Ok((user, tabs))
            })
            .await;
        self.state.update(|state| state.is_loading = false);

        let (mut user, tabs) = outcome
            .map_err(|err| log_failure!("collart::profile", "load profile", err))?;
        tabs.apply_to(&mut user);
        self.session.set_user(user.clone()).await;
        self.state.update(|state| {
            state.user = Some(user.clone());
            state.tabs = Some(tabs);
        });
        Ok(user)
    }

    /// Loads the tabs of any user. For the current user the session copy is
    /// updated too.
    pub async fn load_user_tabs(&self, user_id: &str) -> Result<UserTabs> {
        self.state.update(|state| state.is_loading = true);
        let outcome = self.scope.run(self.fetch_tabs(user_id)).await;
        self.state.update(|state| state.is_loading = false);
        let tabs = outcome.map_err(|err| log_failure!("collart::profile", "load tabs", err))?;

        if self.session.current_user_id().await.as_deref() == Some(user_id) {
            let user = self
                .session
                .update_user(|user| {
                    tabs.apply_to(user);
                    user.clone()
                })
                .await;
            self.state.update(|state| state.user = user);
        }
        self.state.update(|state| state.tabs = Some(tabs.clone()));
        Ok(tabs)
    }

    /// Saves the profile form. Collections are kept from the session copy
    /// since the server answers with the bare profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        if update.name.trim().is_empty() {
            return Err(CollartError::invalid_input("Name is required"));
        }

        self.state.update(|state| state.is_saving = true);
        let outcome = self.scope.run(self.profiles.update_profile(update)).await;
        self.state.update(|state| state.is_saving = false);
        let mut updated = outcome
            .map_err(|err| log_failure!("collart::profile", "update profile", err))?;

        if let Some(previous) = self.session.user().await {
            updated.portfolio_projects = previous.portfolio_projects.clone();
            updated.past_collaborations = previous.past_collaborations.clone();
            updated.set_active_projects(previous.active_projects().iter().cloned());
            updated.set_liked_projects(previous.liked_projects().iter().cloned());
        }
        self.session.set_user(updated.clone()).await;
        self.state.update(|state| state.user = Some(updated.clone()));
        tracing::info!(target: "collart::profile", "Profile of {} updated", updated.id);
        Ok(updated)
    }

    async fn fetch_tabs(&self, user_id: &str) -> Result<UserTabs> {
        let (portfolio, active, liked, collaborations) = tokio::try_join!(
            self.portfolio.portfolio(user_id),
            self.orders.tab_orders(TabKind::Active, user_id),
            self.orders.tab_orders(TabKind::Liked, user_id),
            self.orders.tab_orders(TabKind::Collaborations, user_id),
        )?;
        Ok(UserTabs {
            user_id: user_id.to_string(),
            portfolio,
            active,
            liked,
            collaborations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, order, user};

    fn view_model(backend: &Arc<FakeBackend>, session: &Session) -> ProfileViewModel {
        ProfileViewModel::new(
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
            session.clone(),
        )
    }

    fn seed_tabs(backend: &FakeBackend) {
        let mut closed = order("CLOSED", "me", 2);
        closed.is_active = false;
        let mut tabs = backend.tabs.lock().unwrap();
        tabs.insert(TabKind::Active, vec![order("A1", "me", 1), closed]);
        tabs.insert(TabKind::Liked, vec![order("L1", "U2", 3)]);
        tabs.insert(TabKind::Collaborations, vec![order("C1", "U3", 4)]);
        backend.portfolio.lock().unwrap().push(PortfolioProject {
            id: "P1".into(),
            ..Default::default()
        });
    }

    #[tokio::test]
    async fn test_load_current_fills_collections() {
        let backend = Arc::new(FakeBackend::new());
        *backend.user.lock().unwrap() = Some(user("me"));
        seed_tabs(&backend);
        let session = Session::new();
        let vm = view_model(&backend, &session);

        let loaded = vm.load_current().await.unwrap();

        // Inactive orders never make it into active projects
        let active: Vec<_> = loaded.active_projects().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(active, vec!["A1"]);
        assert!(loaded.is_liked("L1"));
        assert_eq!(loaded.past_collaborations.len(), 1);
        assert_eq!(loaded.portfolio_projects.len(), 1);
        assert_eq!(session.user().await, Some(loaded));
    }

    #[tokio::test]
    async fn test_other_user_tabs_leave_session_alone() {
        let backend = Arc::new(FakeBackend::new());
        seed_tabs(&backend);
        let session = Session::new();
        session.set_user(user("me")).await;
        let vm = view_model(&backend, &session);

        let tabs = vm.load_user_tabs("U7").await.unwrap();

        assert_eq!(tabs.user_id, "U7");
        assert_eq!(tabs.liked.len(), 1);
        assert!(session.user().await.unwrap().liked_projects().is_empty());
        assert!(backend.calls().contains(&"portfolio U7".to_string()));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_collections() {
        let backend = Arc::new(FakeBackend::new());
        *backend.user.lock().unwrap() = Some(user("me"));
        seed_tabs(&backend);
        let session = Session::new();
        let vm = view_model(&backend, &session);
        let current = vm.load_current().await.unwrap();

        let mut update = ProfileUpdate::from_user(&current);
        update.name = "Anna".into();
        let saved = vm.update_profile(&update).await.unwrap();

        assert_eq!(saved.name, "Anna");
        assert!(saved.is_liked("L1"));
        assert_eq!(saved.portfolio_projects.len(), 1);
        assert_eq!(vm.snapshot().user.unwrap().name, "Anna");
    }

    #[tokio::test]
    async fn test_update_profile_requires_name() {
        let backend = Arc::new(FakeBackend::new());
        let vm = view_model(&backend, &Session::new());

        let err = vm.update_profile(&ProfileUpdate::default()).await.unwrap_err();
        assert!(matches!(err, CollartError::InvalidInput(_)));
        assert!(backend.calls().is_empty());
    }
}
