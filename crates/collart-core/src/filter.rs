//! Feed filters for projects and specialists.
//!
//! Three independent categories (specialty, experience, tool). A candidate
//! passes when, for every non-empty category, at least one selected value
//! matches. An empty category places no constraint.

use crate::experience::Experience;
use crate::order::Order;
use crate::user::Specialist;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    specialties: BTreeSet<String>,
    experiences: BTreeSet<Experience>,
    tools: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_specialty(&mut self, specialty: &str) {
        toggle(&mut self.specialties, specialty.to_string());
    }

    pub fn toggle_experience(&mut self, experience: Experience) {
        toggle(&mut self.experiences, experience);
    }

    pub fn toggle_tool(&mut self, tool: &str) {
        toggle(&mut self.tools, tool.to_string());
    }

    pub fn reset(&mut self) {
        self.specialties.clear();
        self.experiences.clear();
        self.tools.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.specialties.is_empty() && self.experiences.is_empty() && self.tools.is_empty()
    }

    pub fn specialties(&self) -> &BTreeSet<String> {
        &self.specialties
    }

    pub fn experiences(&self) -> &BTreeSet<Experience> {
        &self.experiences
    }

    pub fn tools(&self) -> &BTreeSet<String> {
        &self.tools
    }

    pub fn matches_order(&self, order: &Order) -> bool {
        (self.specialties.is_empty() || self.specialties.contains(&order.role))
            && (self.experiences.is_empty() || self.experiences.contains(&order.experience))
            && self.matches_tools(&order.tools)
    }

    pub fn matches_specialist(&self, specialist: &Specialist) -> bool {
        (self.specialties.is_empty()
            || self.specialties.iter().any(|s| specialist.has_profession(s)))
            && (self.experiences.is_empty() || self.experiences.contains(&specialist.experience))
            && self.matches_tools(&specialist.tools)
    }

    fn matches_tools(&self, tools: &[String]) -> bool {
        self.tools.is_empty() || tools.iter().any(|t| self.tools.contains(t.trim()))
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Case-insensitive free-text match used by the search field.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}
