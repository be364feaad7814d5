//! Skill catalog entries.

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// A profession from the backend skill catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name_en: String,
    pub name_ru: String,
}

impl Skill {
    /// Name in the requested language, falling back to the other one.
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name_en, &self.name_ru)
    }

    /// Whether `name` refers to this skill by id or by either localized name.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && (name == self.id || name == self.name_en || name == self.name_ru)
    }
}

/// Translates a skill reference (wire name or id) into the catalog name for
/// `language`. Unknown references come back unchanged.
pub fn localize_skill_name(catalog: &[Skill], name: &str, language: Language) -> String {
    catalog
        .iter()
        .find(|skill| skill.is_named(name))
        .map(|skill| skill.localized_name(language).to_string())
        .unwrap_or_else(|| name.to_string())
}
