//! Display language preference.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Language used when localizing skill names and experience labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Parses a stored language code, falling back to English.
    pub fn from_code(code: &str) -> Self {
        code.trim().parse().unwrap_or_default()
    }

    /// Picks the variant for this language, using the other one when empty.
    pub fn pick<'a>(self, en: &'a str, ru: &'a str) -> &'a str {
        match self {
            Language::En if !en.is_empty() => en,
            Language::Ru if !ru.is_empty() => ru,
            Language::En => ru,
            Language::Ru => en,
        }
    }
}
