//! Home feed: orders and specialists with filters, search and favorites.

use crate::lifecycle::ViewScope;
use crate::observable::Observable;
use collart_core::{Experience, Language, Session};
use collart_core::error::{CollartError, Result};
use collart_core::filter::{FilterSelection, matches_query};
use collart_core::interaction::InteractionsService;
use collart_core::order::{Order, OrderService};
use collart_core::skill::{Skill, localize_skill_name};
use collart_core::user::{ProfileService, Specialist};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub is_loading: bool,
    /// Every loaded order, newest first.
    pub orders: Vec<Order>,
    pub specialists: Vec<Specialist>,
    pub visible_orders: Vec<Order>,
    pub visible_specialists: Vec<Specialist>,
    /// Skill catalog offered as specialty filters.
    pub skills: Vec<Skill>,
    /// Tool names seen in the loaded orders and specialists, sorted.
    pub tools: Vec<String>,
    /// Selection being edited; takes effect on `apply_filters`.
    pub filters: FilterSelection,
    pub query: String,
}

pub struct HomeViewModel {
    orders: Arc<dyn OrderService>,
    profiles: Arc<dyn ProfileService>,
    interactions: Arc<dyn InteractionsService>,
    session: Session,
    state: Observable<HomeState>,
    scope: ViewScope,
}

impl HomeViewModel {
    pub fn new(
        orders: Arc<dyn OrderService>,
        profiles: Arc<dyn ProfileService>,
        interactions: Arc<dyn InteractionsService>,
        session: Session,
    ) -> Self {
        Self {
            orders,
            profiles,
            interactions,
            session,
            state: Observable::default(),
            scope: ViewScope::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> HomeState {
        self.state.snapshot()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Reloads orders and specialists together.
    ///
    /// Either failure leaves both collections as they were.
    pub async fn refresh(&self) -> Result<()> {
        self.state.update(|state| state.is_loading = true);
        let outcome = self
            .scope
            .run(async {
                tokio::try_join!(self.orders.search_orders(), self.profiles.search_specialists())
            })
            .await;

        let (mut orders, specialists) = match outcome {
            Ok(loaded) => loaded,
            Err(err) => {
                self.state.update(|state| state.is_loading = false);
                return Err(log_failure!("collart::home", "refresh", err));
            }
        };

        let me = self.session.current_user_id().await;
        let language = self.session.language().await;
        let specialists: Vec<Specialist> = specialists
            .into_iter()
            .filter(|specialist| Some(&specialist.id) != me.as_ref())
            .collect();
        orders.sort_by_key(|order| Reverse(order.created_at));
        let tools = collect_tools(&orders, &specialists);

        tracing::debug!(
            target: "collart::home",
            "Loaded {} orders and {} specialists",
            orders.len(),
            specialists.len()
        );
        self.state.update(|state| {
            state.is_loading = false;
            state.orders = orders;
            state.specialists = specialists;
            state.tools = tools;
            localize_roles(state, language);
            recompute(state);
        });
        Ok(())
    }

    /// Loads the skill catalog offered as specialty filters.
    pub async fn load_filter_options(&self) -> Result<()> {
        let skills = self
            .scope
            .run(self.profiles.skills())
            .await
            .map_err(|err| log_failure!("collart::home", "load skills", err))?;
        let language = self.session.language().await;
        self.state.update(|state| {
            state.skills = skills;
            localize_roles(state, language);
        });
        Ok(())
    }

    pub fn toggle_specialty(&self, specialty: &str) {
        self.state
            .update(|state| state.filters.toggle_specialty(specialty));
    }

    pub fn toggle_experience(&self, experience: Experience) {
        self.state
            .update(|state| state.filters.toggle_experience(experience));
    }

    pub fn toggle_tool(&self, tool: &str) {
        self.state.update(|state| state.filters.toggle_tool(tool));
    }

    /// Clears every filter and shows the unfiltered feed again.
    pub fn reset_filters(&self) {
        self.state.update(|state| {
            state.filters.reset();
            recompute(state);
        });
    }

    pub fn apply_filters(&self) {
        self.state.update(recompute);
    }

    /// Updates the search text; the visible lists follow immediately.
    pub fn set_query(&self, query: &str) {
        self.state.update(|state| {
            state.query = query.to_string();
            recompute(state);
        });
    }

    /// Adds or removes an order from favorites.
    ///
    /// Returns whether the order is liked afterwards. The local set only
    /// changes once the server confirmed.
    pub async fn toggle_favorite(&self, order_id: &str) -> Result<bool> {
        let user = self.session.user().await.ok_or(CollartError::MissingToken)?;

        if user.is_liked(order_id) {
            self.scope
                .run(self.orders.remove_liked(order_id))
                .await
                .map_err(|err| log_failure!("collart::home", "remove favorite", err))?;
            self.session.update_user(|user| user.unlike(order_id)).await;
            Ok(false)
        } else {
            let order = self
                .find_order(order_id)
                .ok_or_else(|| CollartError::not_found("order", order_id))?;
            self.scope
                .run(self.orders.add_liked(order_id))
                .await
                .map_err(|err| log_failure!("collart::home", "add favorite", err))?;
            self.session.update_user(|user| user.like(order)).await;
            Ok(true)
        }
    }

    /// Sends a response to someone else's order.
    pub async fn respond_to_order(&self, order_id: &str) -> Result<()> {
        let order = self
            .find_order(order_id)
            .ok_or_else(|| CollartError::not_found("order", order_id))?;
        let me = self
            .session
            .current_user_id()
            .await
            .ok_or(CollartError::MissingToken)?;
        if order.is_owned_by(&me) {
            return Err(CollartError::invalid_input("Cannot respond to your own order"));
        }

        self.scope
            .run(self.interactions.respond(&order.id, &order.owner_id))
            .await
            .map_err(|err| log_failure!("collart::home", "respond", err))?;
        tracing::info!(target: "collart::home", "Responded to order {}", order.id);
        Ok(())
    }

    /// Invites a specialist to one of the current user's orders.
    pub async fn invite_specialist(&self, order_id: &str, specialist_id: &str) -> Result<()> {
        let me = self
            .session
            .current_user_id()
            .await
            .ok_or(CollartError::MissingToken)?;
        if specialist_id == me {
            return Err(CollartError::invalid_input("Cannot invite yourself"));
        }

        self.scope
            .run(self.interactions.invite(order_id, specialist_id))
            .await
            .map_err(|err| log_failure!("collart::home", "invite", err))?;
        tracing::info!(target: "collart::home", "Invited {specialist_id} to order {order_id}");
        Ok(())
    }

    fn find_order(&self, order_id: &str) -> Option<Order> {
        self.state
            .with(|state| state.orders.iter().find(|o| o.id == order_id).cloned())
    }
}

/// Order roles arrive as wire skill names while specialist professions are
/// already localized; both must match the same specialty filter.
fn localize_roles(state: &mut HomeState, language: Language) {
    for order in state.orders.iter_mut().chain(state.visible_orders.iter_mut()) {
        order.role = localize_skill_name(&state.skills, &order.role, language);
    }
}

fn recompute(state: &mut HomeState) {
    let query = state.query.as_str();
    state.visible_orders = state
        .orders
        .iter()
        .filter(|order| state.filters.matches_order(order))
        .filter(|order| {
            matches_query(
                query,
                &[
                    order.title.as_str(),
                    order.role.as_str(),
                    order.author_name.as_str(),
                    order.task_description.as_str(),
                ],
            )
        })
        .cloned()
        .collect();
    state.visible_specialists = state
        .specialists
        .iter()
        .filter(|specialist| state.filters.matches_specialist(specialist))
        .filter(|specialist| {
            matches_query(
                query,
                &[
                    specialist.display_name().as_str(),
                    specialist.profession.as_str(),
                ],
            )
        })
        .cloned()
        .collect();
}

fn collect_tools(orders: &[Order], specialists: &[Specialist]) -> Vec<String> {
    orders
        .iter()
        .flat_map(|order| order.tools.iter())
        .chain(specialists.iter().flat_map(|s| s.tools.iter()))
        .map(|tool| tool.trim())
        .filter(|tool| !tool.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
