//! Registration, login and the current-user lookup.

use crate::client::{Access, CollartClient};
use crate::multipart::registration_fields;
use async_trait::async_trait;
use collart_core::auth::{AuthService, Credentials, Registration};
use collart_core::error::Result;
use collart_core::user::User;
use collart_infrastructure::dto::{IntoDomain, LoginRequest, TokenResponse, UserDetailsDto};
use reqwest::Method;

impl CollartClient {
    /// Keeps the issued token on success and drops any stored token on failure.
    async fn settle_token(&self, outcome: Result<TokenResponse>) -> Result<String> {
        match outcome {
            Ok(response) => {
                self.store_token(&response.token).await?;
                tracing::info!(target: "collart::api", "Authenticated");
                Ok(response.token)
            }
            Err(err) => {
                self.forget_token().await;
                Err(err)
            }
        }
    }
}

#[async_trait]
impl AuthService for CollartClient {
    async fn register(&self, registration: &Registration) -> Result<String> {
        let form = registration_fields(registration).into_form()?;
        let builder = self
            .request(Method::POST, "/authentication/register", Access::Public)
            .await?
            .multipart(form);
        let outcome = self.send_json::<TokenResponse>(builder).await;
        self.settle_token(outcome).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<String> {
        let body = LoginRequest {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        let builder = self
            .request(Method::POST, "/authentication/login", Access::Public)
            .await?
            .json(&body);
        let outcome = self.send_json::<TokenResponse>(builder).await;
        self.settle_token(outcome).await
    }

    async fn current_user(&self) -> Result<User> {
        let builder = self
            .request(Method::GET, "/authentication/user", Access::Authorized)
            .await?;
        let dto: UserDetailsDto = self.send_json(builder).await?;
        Ok(dto.into_domain(self.language().await))
    }
}
