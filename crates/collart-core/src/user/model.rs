//! User and Specialist domain models.
//!
//! `User` is the full profile of the signed-in user (or of a profile being
//! viewed). `Specialist` is the read-only projection used in search results
//! and interactions.

use crate::experience::Experience;
use crate::order::Order;
use crate::portfolio::PortfolioProject;
use crate::upload::UploadFile;
use serde::{Deserialize, Serialize};

/// Full user profile.
///
/// `active_projects` and `liked_projects` are private so their invariants
/// hold: active projects are only open orders, liked projects are unique by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub description: String,
    pub user_photo: String,
    pub cover: String,
    pub profession: String,
    pub sub_professions: Vec<String>,
    pub tools: Vec<String>,
    pub searchable: bool,
    pub experience: Experience,
    pub portfolio_projects: Vec<PortfolioProject>,
    pub past_collaborations: Vec<Order>,
    active_projects: Vec<Order>,
    liked_projects: Vec<Order>,
}

impl User {
    /// First and last name joined for display.
    pub fn display_name(&self) -> String {
        join_name(&self.name, &self.surname)
    }

    pub fn active_projects(&self) -> &[Order] {
        &self.active_projects
    }

    /// Replaces the active projects, dropping orders that are no longer active.
    pub fn set_active_projects(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.active_projects = orders.into_iter().filter(|o| o.is_active).collect();
    }

    /// Adds a newly published order; inactive or duplicate orders are ignored.
    pub fn add_active_project(&mut self, order: Order) -> bool {
        if !order.is_active || self.active_projects.iter().any(|o| o.id == order.id) {
            return false;
        }
        self.active_projects.push(order);
        true
    }

    pub fn remove_active_project(&mut self, order_id: &str) -> bool {
        let before = self.active_projects.len();
        self.active_projects.retain(|o| o.id != order_id);
        before != self.active_projects.len()
    }

    pub fn liked_projects(&self) -> &[Order] {
        &self.liked_projects
    }

    /// Replaces the liked projects, keeping the first occurrence of each id.
    pub fn set_liked_projects(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.liked_projects.clear();
        for order in orders {
            self.like(order);
        }
    }

    pub fn is_liked(&self, order_id: &str) -> bool {
        self.liked_projects.iter().any(|o| o.id == order_id)
    }

    /// Adds to liked; returns false when already a member.
    pub fn like(&mut self, order: Order) -> bool {
        if self.is_liked(&order.id) {
            return false;
        }
        self.liked_projects.push(order);
        true
    }

    /// Removes from liked; a non-member is a no-op returning false.
    pub fn unlike(&mut self, order_id: &str) -> bool {
        let before = self.liked_projects.len();
        self.liked_projects.retain(|o| o.id != order_id);
        before != self.liked_projects.len()
    }
}

/// Read-only projection of a user for browsing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub user_photo: String,
    pub cover: String,
    pub profession: String,
    pub sub_professions: Vec<String>,
    pub experience: Experience,
    pub experience_text: String,
    pub tools: Vec<String>,
}

impl Specialist {
    pub fn display_name(&self) -> String {
        join_name(&self.name, &self.surname)
    }

    pub fn tools_text(&self) -> String {
        self.tools.join(", ")
    }

    /// True when `specialty` is the primary or a secondary profession.
    pub fn has_profession(&self, specialty: &str) -> bool {
        self.profession == specialty || self.sub_professions.iter().any(|p| p == specialty)
    }
}

impl From<&User> for Specialist {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            user_photo: user.user_photo.clone(),
            cover: user.cover.clone(),
            profession: user.profession.clone(),
            sub_professions: user.sub_professions.clone(),
            experience: user.experience,
            experience_text: String::new(),
            tools: user.tools.clone(),
        }
    }
}

/// Editable part of the current user's profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub surname: String,
    pub description: String,
    pub searchable: bool,
    pub experience: Experience,
    pub tools: Vec<String>,
    /// Skill name of the primary profession.
    pub profession: String,
    pub sub_professions: Vec<String>,
    pub avatar: Option<UploadFile>,
    pub cover: Option<UploadFile>,
}

impl ProfileUpdate {
    /// Prefills the form from the current profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            surname: user.surname.clone(),
            description: user.description.clone(),
            searchable: user.searchable,
            experience: user.experience,
            tools: user.tools.clone(),
            profession: user.profession.clone(),
            sub_professions: user.sub_professions.clone(),
            avatar: None,
            cover: None,
        }
    }
}

fn join_name(name: &str, surname: &str) -> String {
    match (name.is_empty(), surname.is_empty()) {
        (false, false) => format!("{name} {surname}"),
        (false, true) => name.to_string(),
        (true, _) => surname.to_string(),
    }
}
