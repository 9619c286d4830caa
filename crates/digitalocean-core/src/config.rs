//! Configuration structures for DigitalOcean clients.
//!
//! Only transport-level settings live here. Credentials are supplied separately
//! through [`Credentials`](crate::Credentials) and never appear in configuration.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Base URL of the DigitalOcean v1 API.
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com";

/// HTTP client configuration for a DigitalOcean client instance.
///
/// Timeouts are unset by default, leaving the transport's own defaults in place.
/// TLS certificate validation is always enforced and cannot be configured.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Accept gzip-compressed responses
    #[serde(default = "default_enable_compression")]
    pub enable_compression: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_enable_compression() -> bool {
    true
}

impl ClientConfig {
    /// Create a configuration pointing at the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            ..Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set the connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = Some(seconds);
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    /// Request timeout as a Duration, if one was configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Connect timeout as a Duration, if one was configured.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Parse the API URL, normalized so relative paths join beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the URL cannot be parsed, or
    /// [`Error::ConfigError`] if it cannot carry a path.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        let mut url = Url::parse(&self.api_url)?;

        if url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "API URL `{}` cannot be used as a base",
                self.api_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            enable_compression: default_enable_compression(),
        }
    }
}
