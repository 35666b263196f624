//! HTTP Transport
//!
//! `Transport` is the seam between the fetch cycle and the network. In the
//! browser reqwest rides on `window.fetch`, so futures are not `Send`.

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Issue a GET; only transport-level failures are errors here
    async fn get(&self, url: &str) -> FetchResult<RawResponse>;
}

/// reqwest-backed transport. No timeout: the request lasts as long as the
/// platform lets it.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> FetchResult<RawResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            // Body of an error response is never shown
            return Ok(RawResponse::new(status, String::new()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;
        Ok(RawResponse::new(status, body))
    }
}
