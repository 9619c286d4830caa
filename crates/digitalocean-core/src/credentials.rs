//! The credential pair attached to every DigitalOcean v1 request.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Query parameter carrying the client identifier.
pub const CLIENT_ID_PARAM: &str = "client_id";
/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Client identifier and API key.
///
/// Immutable once built. Neither value is validated; both are forwarded to the
/// API as-is. `Debug` output redacts both.
pub struct Credentials {
    client_id: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from the account's client id and API key.
    #[must_use]
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: SecretString::new(api_key.into().into_boxed_str()),
        }
    }

    /// The client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// The two query pairs appended after the endpoint parameters.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (CLIENT_ID_PARAM, self.client_id.as_str()),
            (API_KEY_PARAM, self.api_key.expose_secret()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
