//! HTTP transport used by [`crate::Client`].

use std::future::Future;
use std::time::Duration;

use url::Url;

use crate::Error;

/// Performs a GET request and returns the response body as text.
///
/// The HTTP status is deliberately not interpreted: the API reports its
/// outcome in the body, which [`crate::response::normalize`] decodes.
pub trait Transport {
    /// Fetches `url`. A `timeout` of `None` or zero imposes no deadline.
    fn get(
        &self,
        url: Url,
        timeout: Option<Duration>,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

/// [`Transport`] backed by `reqwest`.
///
/// Builds a fresh `reqwest::Client` per request so timeout changes on the
/// owning client take effect on the next call.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    async fn get(&self, url: Url, timeout: Option<Duration>) -> Result<String, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout.filter(|t| !t.is_zero()) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            e
        })?;

        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to get resource: {}", e);
                e
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            e
        })?;
        tracing::trace!("Received {} ({} bytes)", status, body.len());
        Ok(body)
    }
}
