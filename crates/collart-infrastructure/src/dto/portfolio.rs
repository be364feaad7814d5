//! Portfolio DTOs

use super::IntoDomain;
use collart_core::Language;
use collart_core::portfolio::PortfolioProject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDto {
    pub id: String,
    pub image: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "userID", default)]
    pub owner_id: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl IntoDomain<PortfolioProject> for PortfolioDto {
    fn into_domain(self, _language: Language) -> PortfolioProject {
        PortfolioProject {
            id: self.id,
            image: self.image.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            owner_id: self.owner_id,
            files: self.files,
        }
    }
}
