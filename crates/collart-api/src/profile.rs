//! Specialist search, the skill catalog and profile editing.

use crate::client::{Access, CollartClient};
use crate::multipart::profile_fields;
use async_trait::async_trait;
use collart_core::error::Result;
use collart_core::skill::Skill;
use collart_core::user::{ProfileService, ProfileUpdate, Specialist, User};
use collart_infrastructure::dto::{IntoDomain, SkillDto, UserDetailsDto, into_domain_vec};
use reqwest::Method;

#[async_trait]
impl ProfileService for CollartClient {
    async fn search_specialists(&self) -> Result<Vec<Specialist>> {
        let builder = self
            .request(Method::GET, "/search/users/all", Access::Authorized)
            .await?;
        let dtos: Vec<UserDetailsDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        let builder = self.request(Method::GET, "/skills", Access::Public).await?;
        let dtos: Vec<SkillDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let form = profile_fields(update).into_form()?;
        let builder = self
            .request(Method::PUT, "/users/updateUser", Access::Authorized)
            .await?
            .multipart(form);
        let dto: UserDetailsDto = self.send_json(builder).await?;
        Ok(dto.into_domain(self.language().await))
    }
}
