//! Wire DTOs and their domain transformers.
//!
//! Each submodule holds the JSON shapes of one backend resource plus the pure
//! conversions into display-oriented domain models. Conversions depend only on
//! their input and the display language.

pub mod auth;
pub mod chat;
pub mod interaction;
pub mod order;
pub mod portfolio;
pub mod skill;
pub mod user;

pub use auth::{GetterRequest, LoginRequest, TabOrderRequest, TokenResponse};
pub use chat::{ChatDto, MessageDto};
pub use interaction::InteractionDto;
pub use order::{IdRefDto, OrderDto, OrderWithUserDto};
pub use portfolio::PortfolioDto;
pub use skill::SkillDto;
pub use user::{UserDetailsDto, UserDto};

use collart_core::Language;

/// Conversion of a wire DTO into a domain model for a display language.
pub trait IntoDomain<T> {
    fn into_domain(self, language: Language) -> T;
}

/// Converts a decoded list element by element.
pub fn into_domain_vec<T, D>(items: Vec<D>, language: Language) -> Vec<T>
where
    D: IntoDomain<T>,
{
    items
        .into_iter()
        .map(|item| item.into_domain(language))
        .collect()
}
