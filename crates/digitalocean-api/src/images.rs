//! Image endpoints.

use crate::client::DigitalOceanClient;
use crate::models::{Image, ImageFilter};
use crate::Result;
use digitalocean_core::ids::{ImageId, RegionId};
use digitalocean_core::QueryParams;
use serde_json::Value;

impl DigitalOceanClient {
    /// List images visible to the account, narrowed by `filter`.
    pub async fn list_images(&self, filter: ImageFilter) -> Result<Option<Value>> {
        let params = QueryParams::new().with("filter", filter.as_query_value());
        self.get_field("images/", params, "images").await
    }

    /// All public images plus the account's snapshots and backups.
    pub async fn list_all_images(&self) -> Result<Option<Value>> {
        self.list_images(ImageFilter::All).await
    }

    /// Public images only.
    pub async fn list_global_images(&self) -> Result<Option<Value>> {
        self.list_images(ImageFilter::Global).await
    }

    /// Snapshots and backups created in this account.
    pub async fn list_my_images(&self) -> Result<Option<Value>> {
        self.list_images(ImageFilter::Mine).await
    }

    /// Show the attributes of an image.
    pub async fn get_image(&self, id: ImageId) -> Result<Option<Image>> {
        let path = format!("images/{id}/");
        self.get_field(&path, QueryParams::new(), "image").await
    }

    /// Destroy an image. There is no way to restore it.
    ///
    /// Returns the response `status` (`"OK"` on success).
    pub async fn destroy_image(&self, id: ImageId) -> Result<Option<Value>> {
        let path = format!("images/{id}/destroy/");
        self.get_field(&path, QueryParams::new(), "status").await
    }

    /// Transfer an image to another region.
    pub async fn transfer_image(
        &self,
        id: ImageId,
        region_id: RegionId,
    ) -> Result<Option<Value>> {
        let path = format!("images/{id}/transfer/");
        let params = QueryParams::new().with("region_id", region_id);
        self.get_field(&path, params, "event_id").await
    }
}
