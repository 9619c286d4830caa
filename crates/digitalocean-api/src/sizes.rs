//! Size endpoint.

use crate::client::DigitalOceanClient;
use crate::Result;
use digitalocean_core::QueryParams;
use serde_json::Value;

impl DigitalOceanClient {
    /// List every size a droplet can be created at.
    pub async fn list_sizes(&self) -> Result<Option<Value>> {
        self.get_field("sizes/", QueryParams::new(), "sizes").await
    }
}
