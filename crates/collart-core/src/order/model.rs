//! Order domain model.
//!
//! An order is a published project looking for a specialist. The model is
//! display-oriented: author name and experience label are resolved when the
//! wire DTO is transformed.

use crate::experience::Experience;
use crate::upload::UploadFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// A project listing as shown in feeds and detail screens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Profession the owner is looking for.
    pub role: String,
    pub task_description: String,
    pub project_description: String,
    pub experience: Experience,
    /// Localized label of `experience`.
    pub experience_text: String,
    pub tools: Vec<String>,
    pub owner_id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub is_active: bool,
    pub data_files: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Order {
    /// Tools joined for display, e.g. `"Figma, Sketch"`.
    pub fn tools_text(&self) -> String {
        self.tools.join(", ")
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

/// Per-user order collections kept by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TabKind {
    /// Favorite ("liked") orders.
    Liked,
    /// Orders the user currently works on or owns and are open.
    Active,
    /// Past collaborations.
    Collaborations,
}

/// Data for publishing a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub title: String,
    /// Skill id of the required role.
    pub skill_id: String,
    pub task_description: String,
    pub project_description: String,
    pub experience: Experience,
    pub tools: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub image: UploadFile,
    pub files: Vec<UploadFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_text_joins_with_comma() {
        let order = Order {
            tools: vec!["Figma".into(), "Sketch".into()],
            ..Default::default()
        };
        assert_eq!(order.tools_text(), "Figma, Sketch");
        assert_eq!(Order::default().tools_text(), "");
    }

    #[test]
    fn test_tab_kind_path_segment() {
        assert_eq!(TabKind::Liked.as_ref(), "liked");
        assert_eq!(TabKind::Collaborations.to_string(), "collaborations");
    }
}
