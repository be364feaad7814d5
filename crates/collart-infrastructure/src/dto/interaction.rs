//! Interaction DTOs

use super::IntoDomain;
use super::order::OrderWithUserDto;
use super::user::UserDetailsDto;
use collart_core::Language;
use collart_core::interaction::{Interaction, InteractionStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionDto {
    pub id: String,
    pub sender: UserDetailsDto,
    pub getter: UserDetailsDto,
    pub order: OrderWithUserDto,
    #[serde(default)]
    pub status: InteractionStatus,
}

impl IntoDomain<Interaction> for InteractionDto {
    fn into_domain(self, language: Language) -> Interaction {
        Interaction {
            id: self.id,
            sender: self.sender.into_domain(language),
            getter: self.getter.into_domain(language),
            order: self.order.into_domain(language),
            status: self.status,
        }
    }
}
