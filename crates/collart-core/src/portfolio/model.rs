use crate::upload::UploadFile;
use serde::{Deserialize, Serialize};

/// A showcase work item, independent of any order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub image: String,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub files: Vec<String>,
}

/// Data for adding a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPortfolioProject {
    pub name: String,
    pub description: String,
    pub image: UploadFile,
    pub files: Vec<UploadFile>,
}
