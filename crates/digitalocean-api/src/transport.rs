//! HTTP transport behind the dispatcher.
//!
//! The [`Transport`] trait is the seam between URL construction and the network. The
//! default implementation uses `reqwest` with certificate validation always enabled.

use crate::Result;
use async_trait::async_trait;
use digitalocean_core::{ClientConfig, Error};
use reqwest::header::ACCEPT;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("digitalocean-api/", env!("CARGO_PKG_VERSION"));

/// Performs the single `GET` behind every API call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and decode the body as JSON.
    ///
    /// Returns `Ok(None)` when the body is empty or is not valid JSON. Only failures
    /// to complete the exchange are errors; HTTP status codes are not inspected.
    async fn get_json(&self, url: Url) -> Result<Option<Value>>;
}

/// `reqwest` backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build the HTTP client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if !config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: Url) -> Result<Option<Value>> {
        // The query string carries the API key; keep it out of error messages.
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| Error::from(err.without_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| Error::from(err.without_url()))?;

        if text.trim().is_empty() {
            debug!(%status, "Empty response body");
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(Some(body)),
            Err(err) => {
                debug!(%status, "Discarding non-JSON response body: {err}");
                Ok(None)
            }
        }
    }
}
