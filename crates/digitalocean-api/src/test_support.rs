//! Shared fixtures for the endpoint unit tests.

use crate::DigitalOceanClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer};

pub const CLIENT_ID: &str = "test-client-id";
pub const API_KEY: &str = "test-api-key";

pub fn test_client(server: &MockServer) -> DigitalOceanClient {
    DigitalOceanClient::builder(CLIENT_ID, API_KEY)
        .with_api_url(server.uri())
        .build()
        .unwrap()
}

/// A `GET` on `route` that only matches requests carrying both credentials.
pub fn authed_get(route: &str) -> MockBuilder {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("client_id", CLIENT_ID))
        .and(query_param("api_key", API_KEY))
}
