//! Client construction and the request dispatcher shared by every endpoint.

use crate::transport::{HttpTransport, Transport};
use crate::Result;
use digitalocean_core::{ClientConfig, Credentials, Error, QueryParams, Reply};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;
use validator::Validate;

/// Builder for [`DigitalOceanClient`].
pub struct DigitalOceanClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl DigitalOceanClientBuilder {
    /// Create a builder from the account's client id and API key.
    #[must_use]
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(client_id, api_key),
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the API base URL (defaults to `https://api.digitalocean.com`).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config.api_url = api_url.into();
        self
    }

    /// Use a custom transport instead of the default `reqwest` client.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be
    /// built.
    pub fn build(self) -> Result<DigitalOceanClient> {
        self.config.validate()?;
        let base_url = self.config.parse_api_url()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&self.config)?),
        };

        Ok(DigitalOceanClient {
            base_url,
            credentials: Arc::new(self.credentials),
            transport,
        })
    }
}

impl fmt::Debug for DigitalOceanClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalOceanClientBuilder")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

/// Asynchronous DigitalOcean v1 API client.
///
/// Cheap to clone. Clones share the credentials and the transport, neither of
/// which is ever mutated, so one client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct DigitalOceanClient {
    base_url: Url,
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
}

impl DigitalOceanClient {
    /// Create a client for the public API endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        DigitalOceanClientBuilder::new(client_id, api_key).build()
    }

    /// Start building a client with non-default settings.
    #[must_use]
    pub fn builder(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> DigitalOceanClientBuilder {
        DigitalOceanClientBuilder::new(client_id, api_key)
    }

    /// Access the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The client id sent with every request.
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.credentials.client_id()
    }

    /// Build the full request URL: base, path, endpoint parameters, then credentials.
    ///
    /// Each `/`-separated piece of `path` becomes one percent-encoded segment, so `?`
    /// and `#` never leave the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty path or one with `.` or `..`
    /// segments, and [`Error::InvalidEndpoint`] when the base URL cannot take a path.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);
        if normalized.is_empty() {
            return Err(Error::InvalidRequest("empty request path".to_string()));
        }
        if normalized.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(Error::InvalidRequest(format!(
                "relative segment in request path `{path}`"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!("base URL `{}` cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(normalized.split('/'));

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (key, value) in params.iter() {
                query.append_pair(key, value);
            }
            for (key, value) in self.credentials.query_pairs() {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send one authenticated `GET` and normalize the response.
    ///
    /// Never retries. The returned [`Reply`] pairs the transport or provider error (if
    /// any) with the decoded envelope, which is `{}` when no body was obtained.
    pub async fn dispatch(&self, path: &str, params: QueryParams) -> Reply {
        let url = match self.build_url(path, &params) {
            Ok(url) => url,
            Err(err) => return Reply::failed(err),
        };

        info!(path, "DigitalOcean request");

        let reply = match self.transport.get_json(url).await {
            Ok(body) => Reply::from_body(body),
            Err(err) => {
                debug!(path, error = %err, "DigitalOcean transport failure");
                return Reply::failed(err);
            }
        };

        if let Some(err) = &reply.error {
            warn!(path, message = %err, "DigitalOcean API reported failure");
        }

        reply
    }

    /// Dispatch and extract one named field from the envelope.
    pub(crate) async fn get_field(
        &self,
        path: &str,
        params: QueryParams,
        field: &str,
    ) -> Result<Option<Value>> {
        self.dispatch(path, params).await.extract(field)
    }
}

impl fmt::Debug for DigitalOceanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalOceanClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
