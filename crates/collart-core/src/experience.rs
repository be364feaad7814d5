//! Experience tiers shared by users and orders.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Experience tier, carried on the wire as a fixed code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
pub enum Experience {
    #[default]
    #[serde(rename = "no_experience")]
    #[strum(serialize = "no_experience")]
    NoExperience,
    #[serde(rename = "between1And3")]
    #[strum(serialize = "between1And3")]
    Years1To3,
    #[serde(rename = "between3And5")]
    #[strum(serialize = "between3And5")]
    Years3To5,
    #[serde(rename = "moreThan5")]
    #[strum(serialize = "moreThan5")]
    MoreThan5,
}

impl Experience {
    /// The wire code of this tier.
    pub fn raw_value(self) -> &'static str {
        self.into()
    }

    /// Resolves a wire code; unknown or missing codes mean no experience.
    pub fn from_code(code: Option<&str>) -> Self {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }

    /// Localized label for display.
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Experience::NoExperience, Language::En) => "No experience",
            (Experience::NoExperience, Language::Ru) => "Без опыта",
            (Experience::Years1To3, Language::En) => "1-3 years",
            (Experience::Years1To3, Language::Ru) => "1-3 года",
            (Experience::Years3To5, Language::En) => "3-5 years",
            (Experience::Years3To5, Language::Ru) => "3-5 лет",
            (Experience::MoreThan5, Language::En) => "More than 5 years",
            (Experience::MoreThan5, Language::Ru) => "Более 5 лет",
        }
    }
}
