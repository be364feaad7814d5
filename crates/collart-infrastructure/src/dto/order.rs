//! Order DTOs

use super::IntoDomain;
use super::user::UserDto;
use chrono::{DateTime, Utc};
use collart_core::Language;
use collart_core::experience::Experience;
use collart_core::order::Order;
use serde::{Deserialize, Serialize};

/// Reference to another record by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdRefDto {
    pub id: String,
}

/// Order record as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub title: Option<String>,
    pub image: Option<String>,
    pub skill: Option<String>,
    pub task_description: Option<String>,
    pub project_description: Option<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub owner: Option<IdRefDto>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub data_files: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Order paired with its author, as returned by search and tab endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderWithUserDto {
    pub order: OrderDto,
    #[serde(default)]
    pub user: Option<UserDto>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<Order> for OrderWithUserDto {
    fn into_domain(self, language: Language) -> Order {
        let OrderWithUserDto { order, user } = self;
        let experience = Experience::from_code(order.experience.as_deref());
        let owner_id = order
            .owner
            .map(|owner| owner.id)
            .or_else(|| user.as_ref().map(|u| u.id.clone()))
            .unwrap_or_default();
        let author_name = user.as_ref().map(UserDto::full_name).unwrap_or_default();
        let author_avatar = user.and_then(|u| u.user_photo).unwrap_or_default();

        Order {
            id: order.id,
            title: order.title.unwrap_or_default(),
            image: order.image.unwrap_or_default(),
            role: order.skill.unwrap_or_default(),
            task_description: order.task_description.unwrap_or_default(),
            project_description: order.project_description.unwrap_or_default(),
            experience,
            experience_text: experience.text(language).to_string(),
            tools: order.tools,
            owner_id,
            author_name,
            author_avatar,
            is_active: order.is_active,
            data_files: order.data_files,
            created_at: order.created_at,
            start_time: order.start_time,
            end_time: order.end_time,
        }
    }
}

/// Bare order without author (e.g. returned right after creation).
impl IntoDomain<Order> for OrderDto {
    fn into_domain(self, language: Language) -> Order {
        OrderWithUserDto {
            order: self,
            user: None,
        }
        .into_domain(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_with_user_into_display_order() {
        let json = r#"{
            "order": {
                "id": "O1",
                "title": "Logo for a coffee shop",
                "skill": "Design",
                "experience": "between1And3",
                "tools": ["Figma", "Sketch"],
                "owner": {"id": "U9"},
                "isActive": true,
                "dataFiles": ["https://cdn/brief.pdf"],
                "createdAt": "2024-05-01T10:00:00Z"
            },
            "user": {"id": "U9", "name": "Grace", "surname": "Hopper", "userPhoto": "p.png"}
        }"#;

        let dto: OrderWithUserDto = serde_json::from_str(json).unwrap();
        let order: Order = dto.into_domain(Language::En);

        assert_eq!(order.id, "O1");
        assert_eq!(order.role, "Design");
        assert_eq!(order.experience, Experience::Years1To3);
        assert_eq!(order.experience_text, "1-3 years");
        assert_eq!(order.tools_text(), "Figma, Sketch");
        assert_eq!(order.owner_id, "U9");
        assert_eq!(order.author_name, "Grace Hopper");
        assert_eq!(order.author_avatar, "p.png");
        assert!(order.is_active);
        assert!(order.created_at.is_some());
        assert_eq!(order.task_description, "");
    }

    #[test]
    fn test_owner_falls_back_to_author() {
        let dto = OrderWithUserDto {
            order: OrderDto {
                id: "O2".into(),
                ..Default::default()
            },
            user: Some(UserDto {
                id: "U3".into(),
                name: Some("Alan".into()),
                ..Default::default()
            }),
        };
        let order: Order = dto.into_domain(Language::Ru);
        assert_eq!(order.owner_id, "U3");
        assert_eq!(order.author_name, "Alan");
        assert_eq!(order.experience_text, "Без опыта");
    }
}
