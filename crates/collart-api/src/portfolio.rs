use crate::client::{Access, CollartClient};
use crate::multipart::portfolio_fields;
use async_trait::async_trait;
use collart_core::error::Result;
use collart_core::portfolio::{NewPortfolioProject, PortfolioProject, PortfolioService};
use collart_infrastructure::dto::{IntoDomain, PortfolioDto, into_domain_vec};
use reqwest::Method;

#[async_trait]
impl PortfolioService for CollartClient {
    async fn portfolio(&self, user_id: &str) -> Result<Vec<PortfolioProject>> {
        let path = format!("/tab/portfolio/{user_id}");
        let builder = self.request(Method::GET, &path, Access::Authorized).await?;
        let dtos: Vec<PortfolioDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn add_project(&self, project: &NewPortfolioProject) -> Result<PortfolioProject> {
        let form = portfolio_fields(project).into_form()?;
        let builder = self
            .request(Method::POST, "/projects/addPortfolio", Access::Authorized)
            .await?
            .multipart(form);
        let dto: PortfolioDto = self.send_json(builder).await?;
        Ok(dto.into_domain(self.language().await))
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        let path = format!("/projects/{project_id}");
        let builder = self.request(Method::DELETE, &path, Access::Authorized).await?;
        self.send_empty(builder).await
    }
}
