//! Order search, publishing, deletion and the per-user tabs.

use crate::client::{Access, CollartClient};
use crate::multipart::order_fields;
use async_trait::async_trait;
use collart_core::error::Result;
use collart_core::order::{NewOrder, Order, OrderService, TabKind};
use collart_infrastructure::dto::{
    IntoDomain, OrderDto, OrderWithUserDto, TabOrderRequest, into_domain_vec,
};
use reqwest::Method;

impl CollartClient {
    async fn change_liked(&self, method: Method, path: &str, order_id: &str) -> Result<()> {
        let body = TabOrderRequest {
            order_id: order_id.to_string(),
            tab_type: TabKind::Liked.as_ref().to_string(),
        };
        let builder = self
            .request(method, path, Access::Authorized)
            .await?
            .json(&body);
        self.send_empty(builder).await
    }
}

#[async_trait]
impl OrderService for CollartClient {
    async fn search_orders(&self) -> Result<Vec<Order>> {
        let builder = self
            .request(Method::GET, "/search/orders/all", Access::Authorized)
            .await?;
        let dtos: Vec<OrderWithUserDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        let form = order_fields(order).into_form()?;
        let builder = self
            .request(Method::POST, "/orders/create", Access::Authorized)
            .await?
            .multipart(form);
        let dto: OrderDto = self.send_json(builder).await?;
        tracing::info!(target: "collart::api", "Published order {}", dto.id);
        Ok(dto.into_domain(self.language().await))
    }

    async fn delete_order(&self, order_id: &str) -> Result<()> {
        let builder = self
            .request(Method::DELETE, &format!("/orders/{order_id}"), Access::Authorized)
            .await?;
        self.send_empty(builder).await
    }

    async fn tab_orders(&self, kind: TabKind, user_id: &str) -> Result<Vec<Order>> {
        let path = format!("/tab/{}/{user_id}", kind.as_ref());
        let builder = self.request(Method::GET, &path, Access::Authorized).await?;
        let dtos: Vec<OrderWithUserDto> = self.send_json(builder).await?;
        Ok(into_domain_vec(dtos, self.language().await))
    }

    async fn add_liked(&self, order_id: &str) -> Result<()> {
        self.change_liked(Method::POST, "/tab/addOrder", order_id)
            .await
    }

    async fn remove_liked(&self, order_id: &str) -> Result<()> {
        self.change_liked(Method::DELETE, "/tab/removeOrder", order_id)
            .await
    }
}
