use super::model::{NewPortfolioProject, PortfolioProject};
use crate::error::Result;
use async_trait::async_trait;

/// Portfolio capabilities of the backend.
#[async_trait]
pub trait PortfolioService: Send + Sync {
    async fn portfolio(&self, user_id: &str) -> Result<Vec<PortfolioProject>>;

    async fn add_project(&self, project: &NewPortfolioProject) -> Result<PortfolioProject>;

    async fn delete_project(&self, project_id: &str) -> Result<()>;
}
