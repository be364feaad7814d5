use crate::client::{Access, CollartClient};
use async_trait::async_trait;
use collart_core::error::Result;
use collart_core::interaction::{Interaction, InteractionsService};
use collart_infrastructure::dto::{GetterRequest, InteractionDto, into_domain_vec};
use reqwest::Method;

impl CollartClient {
    async fn post_getter(&self, path: String, getter_id: &str) -> Result<()> {
        let body = GetterRequest {
            getter_id: getter_id.to_string(),
        };
        let builder = self
            .request(Method::POST, &path, Access::Authorized)
            .await?
            .json(&body);
        self.send_empty(builder).await
    }
}

#[async_trait]
impl InteractionsService for CollartClient {
    async fn interactions(&self, user_id: &str) -> Result<Vec<Interaction>> {
        let builder = self
            .request(Method::GET, &format!("/interactions/{user_id}"), Access::Authorized)
            .await?;
        let dtos: Vec<InteractionDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn respond(&self, order_id: &str, owner_id: &str) -> Result<()> {
        self.post_getter(format!("/interactions/respond/{order_id}"), owner_id)
            .await
    }

    async fn invite(&self, order_id: &str, specialist_id: &str) -> Result<()> {
        self.post_getter(format!("/interactions/invite/{order_id}"), specialist_id)
            .await
    }

    async fn accept(&self, interaction_id: &str, acting_user_id: &str) -> Result<()> {
        self.post_getter(
            format!("/interactions/accept/{interaction_id}"),
            acting_user_id,
        )
        .await
    }

    async fn reject(&self, interaction_id: &str, acting_user_id: &str) -> Result<()> {
        self.post_getter(
            format!("/interactions/reject/{interaction_id}"),
            acting_user_id,
        )
        .await
    }
}
