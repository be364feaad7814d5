//! User DTOs

use super::IntoDomain;
use super::skill::{SkillDto, split_professions};
use collart_core::Language;
use collart_core::experience::Experience;
use collart_core::user::{Specialist, User};
use serde::{Deserialize, Serialize};

/// Bare user record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub description: Option<String>,
    pub user_photo: Option<String>,
    pub cover: Option<String>,
    pub searchable: Option<bool>,
    pub experience: Option<String>,
}

/// User with skills and tools, as returned by search and auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetailsDto {
    pub user: UserDto,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl UserDto {
    pub fn experience(&self) -> Experience {
        Experience::from_code(self.experience.as_deref())
    }

    /// First and last name joined, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Specialist without skill information (e.g. chat counterparts).
impl IntoDomain<Specialist> for UserDto {
    fn into_domain(self, language: Language) -> Specialist {
        let experience = self.experience();
        Specialist {
            id: self.id,
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            user_photo: self.user_photo.unwrap_or_default(),
            cover: self.cover.unwrap_or_default(),
            profession: String::new(),
            sub_professions: Vec::new(),
            experience,
            experience_text: experience.text(language).to_string(),
            tools: Vec::new(),
        }
    }
}

impl IntoDomain<Specialist> for UserDetailsDto {
    fn into_domain(self, language: Language) -> Specialist {
        let (profession, sub_professions) = split_professions(&self.skills, language);
        let base: Specialist = self.user.into_domain(language);
        Specialist {
            profession,
            sub_professions,
            tools: self.tools,
            ..base
        }
    }
}

impl IntoDomain<User> for UserDetailsDto {
    fn into_domain(self, language: Language) -> User {
        let (profession, sub_professions) = split_professions(&self.skills, language);
        let experience = self.user.experience();

        // Collections (portfolio, tabs) are loaded separately
        let mut user = User::default();
        user.id = self.user.id;
        user.email = self.user.email.unwrap_or_default();
        user.name = self.user.name.unwrap_or_default();
        user.surname = self.user.surname.unwrap_or_default();
        user.description = self.user.description.unwrap_or_default();
        user.user_photo = self.user.user_photo.unwrap_or_default();
        user.cover = self.user.cover.unwrap_or_default();
        user.profession = profession;
        user.sub_professions = sub_professions;
        user.tools = self.tools;
        user.searchable = self.user.searchable.unwrap_or(true);
        user.experience = experience;
        user
    }
}
