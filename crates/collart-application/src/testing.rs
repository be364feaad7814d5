//! In-memory backend used by the view-model tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use collart_core::auth::{AuthService, Credentials, Registration};
use collart_core::chat::{Chat, ChatService, Message, OutgoingMessage};
use collart_core::error::{CollartError, Result};
use collart_core::interaction::{Interaction, InteractionsService};
use collart_core::order::{NewOrder, Order, OrderService, TabKind};
use collart_core::portfolio::{NewPortfolioProject, PortfolioProject, PortfolioService};
use collart_core::skill::Skill;
use collart_core::user::{ProfileService, ProfileUpdate, Specialist, User};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned responses plus a log of the calls that reached the "server".
#[derive(Default)]
pub struct FakeBackend {
    pub user: Mutex<Option<User>>,
    pub orders: Mutex<Vec<Order>>,
    pub tabs: Mutex<HashMap<TabKind, Vec<Order>>>,
    pub specialists: Mutex<Vec<Specialist>>,
    pub skills: Mutex<Vec<Skill>>,
    pub interactions: Mutex<Vec<Interaction>>,
    pub chats: Mutex<Vec<Chat>>,
    pub messages: Mutex<Vec<Message>>,
    pub portfolio: Mutex<Vec<PortfolioProject>>,
    /// Error returned by every call while set.
    pub failure: Mutex<Option<CollartError>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, error: CollartError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub fn user(id: &str) -> User {
    let mut user = User::default();
    user.id = id.to_string();
    user.name = "Ann".into();
    user.surname = "Lee".into();
    user
}

pub fn specialist(id: &str, profession: &str, tools: &[&str]) -> Specialist {
    Specialist {
        id: id.to_string(),
        name: id.to_string(),
        profession: profession.to_string(),
        tools: tools.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

pub fn order(id: &str, owner_id: &str, day: u32) -> Order {
    Order {
        id: id.to_string(),
        title: format!("Order {id}"),
        owner_id: owner_id.to_string(),
        is_active: true,
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()),
        ..Default::default()
    }
}

#[async_trait]
impl AuthService for FakeBackend {
    async fn register(&self, registration: &Registration) -> Result<String> {
        self.record(format!("register {}", registration.email))?;
        Ok("registered-token".into())
    }

    async fn login(&self, credentials: &Credentials) -> Result<String> {
        self.record(format!("login {}", credentials.email))?;
        Ok("login-token".into())
    }

    async fn current_user(&self) -> Result<User> {
        self.record("current_user")?;
        self.user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CollartError::status(401, "no user"))
    }
}

#[async_trait]
impl OrderService for FakeBackend {
    async fn search_orders(&self) -> Result<Vec<Order>> {
        self.record("search_orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        self.record(format!("create_order {}", order.title))?;
        Ok(Order {
            id: "NEW".into(),
            title: order.title.clone(),
            is_active: true,
            ..Default::default()
        })
    }

    async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.record(format!("delete_order {order_id}"))
    }

    async fn tab_orders(&self, kind: TabKind, user_id: &str) -> Result<Vec<Order>> {
        self.record(format!("tab {kind} {user_id}"))?;
        Ok(self
            .tabs
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_liked(&self, order_id: &str) -> Result<()> {
        self.record(format!("add_liked {order_id}"))
    }

    async fn remove_liked(&self, order_id: &str) -> Result<()> {
        self.record(format!("remove_liked {order_id}"))
    }
}

#[async_trait]
impl ProfileService for FakeBackend {
    async fn search_specialists(&self) -> Result<Vec<Specialist>> {
        self.record("search_specialists")?;
        Ok(self.specialists.lock().unwrap().clone())
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        self.record("skills")?;
        Ok(self.skills.lock().unwrap().clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.record(format!("update_profile {}", update.name))?;
        let mut updated = self.user.lock().unwrap().clone().unwrap_or_default();
        updated.name = update.name.clone();
        updated.surname = update.surname.clone();
        updated.description = update.description.clone();
        Ok(updated)
    }
}

#[async_trait]
impl InteractionsService for FakeBackend {
    async fn interactions(&self, user_id: &str) -> Result<Vec<Interaction>> {
        self.record(format!("interactions {user_id}"))?;
        Ok(self.interactions.lock().unwrap().clone())
    }

    async fn respond(&self, order_id: &str, owner_id: &str) -> Result<()> {
        self.record(format!("respond {order_id} {owner_id}"))
    }

    async fn invite(&self, order_id: &str, specialist_id: &str) -> Result<()> {
        self.record(format!("invite {order_id} {specialist_id}"))
    }

    async fn accept(&self, interaction_id: &str, acting_user_id: &str) -> Result<()> {
        self.record(format!("accept {interaction_id} {acting_user_id}"))
    }

    async fn reject(&self, interaction_id: &str, acting_user_id: &str) -> Result<()> {
        self.record(format!("reject {interaction_id} {acting_user_id}"))
    }
}

#[async_trait]
impl ChatService for FakeBackend {
    async fn chats(&self) -> Result<Vec<Chat>> {
        self.record("chats")?;
        Ok(self.chats.lock().unwrap().clone())
    }

    async fn messages(&self, counterpart_id: &str) -> Result<Vec<Message>> {
        self.record(format!("messages {counterpart_id}"))?;
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<Message> {
        self.record(format!("send {}", message.receiver_id))?;
        Ok(Message {
            id: "SENT".into(),
            sender_id: "me".into(),
            receiver_id: message.receiver_id.clone(),
            text: message.text.clone(),
            is_read: false,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            files: Vec::new(),
        })
    }

    async fn mark_read(&self, counterpart_id: &str) -> Result<()> {
        self.record(format!("mark_read {counterpart_id}"))
    }
}

#[async_trait]
impl PortfolioService for FakeBackend {
    async fn portfolio(&self, user_id: &str) -> Result<Vec<PortfolioProject>> {
        self.record(format!("portfolio {user_id}"))?;
        Ok(self.portfolio.lock().unwrap().clone())
    }

    async fn add_project(&self, project: &NewPortfolioProject) -> Result<PortfolioProject> {
        self.record(format!("add_project {}", project.name))?;
        Ok(PortfolioProject {
            id: "P-NEW".into(),
            name: project.name.clone(),
            description: project.description.clone(),
            ..Default::default()
        })
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.record(format!("delete_project {project_id}"))
    }
}
