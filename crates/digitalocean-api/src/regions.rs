//! Region endpoint.

use crate::client::DigitalOceanClient;
use crate::Result;
use digitalocean_core::QueryParams;
use serde_json::Value;

impl DigitalOceanClient {
    /// List every region droplets can be created in.
    pub async fn list_regions(&self) -> Result<Option<Value>> {
        self.get_field("regions/", QueryParams::new(), "regions")
            .await
    }
}
