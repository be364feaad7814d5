//! HTTP plumbing shared by every Collart endpoint.
//!
//! `CollartClient` owns the reqwest client, the normalized base URL and a
//! handle to the shared [`Session`]. Endpoint modules build requests through
//! [`CollartClient::request`] and finish them with [`CollartClient::send_json`]
//! or [`CollartClient::send_empty`], which apply the same failure mapping to
//! every call.

use collart_core::config::ClientConfig;
use collart_core::error::{CollartError, Result};
use collart_core::settings::{SettingKey, SettingsStore};
use collart_core::{Language, Session};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Whether a call carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Authorized,
}

/// REST client of the Collart backend.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct CollartClient {
    http: Client,
    base_url: String,
    session: Session,
    settings: Arc<dyn SettingsStore>,
}

impl CollartClient {
    /// Builds a client for `config.base_url`.
    ///
    /// Fails with [`CollartError::InvalidUrl`] when the base URL does not parse.
    pub fn new(
        config: &ClientConfig,
        session: Session,
        settings: Arc<dyn SettingsStore>,
    ) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| CollartError::InvalidUrl(format!("{base_url}: {err}")))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|err| CollartError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            session,
            settings,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn language(&self) -> Language {
        self.session.language().await
    }

    /// Absolute URL of an endpoint path such as `/skills`.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url, path);
        Url::parse(&joined).map_err(|err| CollartError::InvalidUrl(format!("{joined}: {err}")))
    }

    /// Starts a request, attaching the bearer token for authorized calls.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        access: Access,
    ) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        let builder = self.http.request(method, url);
        match access {
            Access::Public => Ok(builder),
            Access::Authorized => {
                let token = self.session.token().await.ok_or(CollartError::MissingToken)?;
                Ok(builder.bearer_auth(token))
            }
        }
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(CollartError::EmptyBody);
        }
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(target: "collart::api", "Failed to decode response: {err}");
            CollartError::Decode(err.to_string())
        })
    }

    /// Sends the request and ignores any body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await.map(|_| ())
    }

    /// Sends the request and returns the response once its status is a success.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        self.dispatch(builder, true).await
    }

    /// Like [`Self::execute`]; `owns_session` controls whether a 401 forgets
    /// the token. It is false for hosts other than the API.
    pub(crate) async fn dispatch(
        &self,
        builder: RequestBuilder,
        owns_session: bool,
    ) -> Result<Response> {
        let request = builder.build().map_err(transport_error)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(target: "collart::api", "{method} {path}");

        let response = self.http.execute(request).await.map_err(|err| {
            tracing::warn!(target: "collart::api", "{method} {path} failed: {err}");
            transport_error(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        tracing::warn!(target: "collart::api", "{method} {path} returned {status}");

        if status == StatusCode::UNAUTHORIZED && owns_session {
            self.forget_token().await;
        }
        Err(map_http_error(status, &body))
    }

    /// Stores a freshly issued token in the session and the settings store.
    pub(crate) async fn store_token(&self, token: &str) -> Result<()> {
        self.session.set_token(token).await;
        self.settings.set(SettingKey::AuthToken, token)
    }

    /// Drops the token everywhere. Storage failures are logged, not raised.
    pub(crate) async fn forget_token(&self) {
        self.session.clear_token().await;
        if let Err(err) = self.settings.remove(SettingKey::AuthToken) {
            tracing::warn!(target: "collart::api", "Failed to remove stored token: {err}");
        }
    }

    /// True when `url` shares scheme, host and port with the base URL.
    pub(crate) fn is_api_origin(&self, url: &Url) -> bool {
        Url::parse(&self.base_url)
            .map(|base| base.origin() == url.origin())
            .unwrap_or(false)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

impl std::fmt::Debug for CollartClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollartClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    reason: String,
}

/// Maps a non-success status to [`CollartError::Status`], preferring the
/// backend's `reason` field over the raw body.
fn map_http_error(status: StatusCode, body: &str) -> CollartError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|wrapper| wrapper.reason)
        .unwrap_or_else(|_| body.trim().to_string());
    CollartError::status(status.as_u16(), message)
}

pub(crate) fn transport_error(err: reqwest::Error) -> CollartError {
    if err.is_builder() {
        CollartError::InvalidUrl(err.to_string())
    } else {
        CollartError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collart_core::settings::InMemorySettingsStore;

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = CollartClient::new(
            &config("https://api.example.com/ "),
            Session::new(),
            Arc::new(InMemorySettingsStore::new()),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.url("/skills").unwrap().as_str(),
            "https://api.example.com/skills"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = CollartClient::new(
            &config("not a url"),
            Session::new(),
            Arc::new(InMemorySettingsStore::new()),
        )
        .unwrap_err();
        assert!(matches!(err, CollartError::InvalidUrl(_)));
    }

    #[test]
    fn test_map_http_error_prefers_reason() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"error":true,"reason":"Bad email"}"#);
        assert_eq!(err, CollartError::status(400, "Bad email"));

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err, CollartError::status(502, "upstream down"));
    }

    #[test]
    fn test_api_origin_compares_scheme_host_and_port() {
        let client = CollartClient::new(
            &config("https://api.example.com"),
            Session::new(),
            Arc::new(InMemorySettingsStore::new()),
        )
        .unwrap();
        let same = Url::parse("https://api.example.com/files/a.pdf").unwrap();
        let other_host = Url::parse("https://cdn.example.com/files/a.pdf").unwrap();
        let other_scheme = Url::parse("http://api.example.com/files/a.pdf").unwrap();
        let other_port = Url::parse("https://api.example.com:8443/files/a.pdf").unwrap();

        assert!(client.is_api_origin(&same));
        assert!(!client.is_api_origin(&other_host));
        assert!(!client.is_api_origin(&other_scheme));
        assert!(!client.is_api_origin(&other_port));
    }

    #[tokio::test]
    async fn test_authorized_request_requires_token() {
        let client = CollartClient::new(
            &config("https://api.example.com"),
            Session::new(),
            Arc::new(InMemorySettingsStore::new()),
        )
        .unwrap();
        let err = client
            .request(Method::GET, "/messages/chats", Access::Authorized)
            .await
            .unwrap_err();
        assert_eq!(err, CollartError::MissingToken);

        assert!(client
            .request(Method::GET, "/skills", Access::Public)
            .await
            .is_ok());
    }
}
