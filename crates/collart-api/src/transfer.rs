//! Streaming downloads of attachments with progress reporting.

use crate::client::{CollartClient, transport_error};
use collart_core::error::{CollartError, Result};
use collart_core::upload::TransferProgress;
use reqwest::Url;

impl CollartClient {
    /// Downloads `location` and reports progress as chunks arrive.
    ///
    /// `location` is either an absolute URL or a path on the API host, as
    /// stored in order and message `files` lists. The bearer token is only
    /// sent to the API origin, and only a 401 from there ends the session.
    pub async fn download(&self, location: &str, progress: &TransferProgress) -> Result<Vec<u8>> {
        let url = self.resolve_location(location)?;
        let api_origin = self.is_api_origin(&url);
        let mut builder = self.http().get(url);
        if api_origin {
            if let Some(token) = self.session().token().await {
                builder = builder.bearer_auth(token);
            }
        }

        let mut response = self.dispatch(builder, api_origin).await?;
        let total = response.content_length();
        let mut data = Vec::with_capacity(total.unwrap_or(0).min(16 * 1024 * 1024) as usize);

        while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
            data.extend_from_slice(&chunk);
            progress.report(data.len() as u64, total);
        }
        progress.finish();

        tracing::debug!(target: "collart::api", "Downloaded {} bytes from {location}", data.len());
        Ok(data)
    }

    fn resolve_location(&self, location: &str) -> Result<Url> {
        let location = location.trim();
        if location.starts_with('/') {
            return self.url(location);
        }
        Url::parse(location).map_err(|err| CollartError::InvalidUrl(format!("{location}: {err}")))
    }
}
