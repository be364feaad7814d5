//! Skill DTOs

use super::IntoDomain;
use collart_core::Language;
use collart_core::skill::Skill;
use serde::{Deserialize, Serialize};

/// Skill as sent by `/skills` and embedded in user details.
///
/// The catalog carries `id`; user details carry `primary` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub primary: bool,
}

impl SkillDto {
    pub fn localized_name(&self, language: Language) -> String {
        language.pick(&self.name_en, &self.name_ru).to_string()
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<Skill> for SkillDto {
    fn into_domain(self, _language: Language) -> Skill {
        Skill {
            id: self.id.unwrap_or_default(),
            name_en: self.name_en,
            name_ru: self.name_ru,
        }
    }
}

/// Splits skills into the primary profession and the secondary ones.
///
/// Without a skill flagged primary, the profession stays empty and every
/// skill is secondary.
pub fn split_professions(skills: &[SkillDto], language: Language) -> (String, Vec<String>) {
    let profession = skills
        .iter()
        .find(|s| s.primary)
        .map(|s| s.localized_name(language))
        .unwrap_or_default();
    let sub_professions = skills
        .iter()
        .filter(|s| !s.primary)
        .map(|s| s.localized_name(language))
        .collect();
    (profession, sub_professions)
}
