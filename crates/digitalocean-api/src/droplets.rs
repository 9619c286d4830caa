//! Droplet endpoints: listing, creation and the asynchronous lifecycle actions.
//!
//! Actions return the id of the event tracking them; poll it with
//! [`DigitalOceanClient::get_event`].

use crate::client::DigitalOceanClient;
use crate::models::{Droplet, DropletAction, DropletCreateOptions, SnapshotOptions};
use crate::Result;
use digitalocean_core::ids::{DropletId, ImageId, RegionId, SizeId};
use digitalocean_core::QueryParams;
use serde_json::Value;

impl DigitalOceanClient {
    /// Show all active droplets.
    pub async fn list_droplets(&self) -> Result<Option<Value>> {
        self.get_field("droplets/", QueryParams::new(), "droplets")
            .await
    }

    /// Create a new droplet.
    ///
    /// `name` must follow hostname rules.
    pub async fn create_droplet(
        &self,
        name: &str,
        size_id: SizeId,
        image_id: ImageId,
        region_id: RegionId,
        options: &DropletCreateOptions,
    ) -> Result<Option<Droplet>> {
        let mut params = QueryParams::new()
            .with("name", name)
            .with("size_id", size_id)
            .with("image_id", image_id)
            .with("region_id", region_id);
        params.extend(options.to_params());

        self.get_field("droplets/new", params, "droplet").await
    }

    /// Fetch a single droplet.
    pub async fn get_droplet(&self, id: DropletId) -> Result<Option<Droplet>> {
        let path = format!("droplets/{id}");
        self.get_field(&path, QueryParams::new(), "droplet").await
    }

    /// Reboot a droplet. Preferred when a server is not responding.
    pub async fn reboot_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::Reboot, QueryParams::new())
            .await
    }

    /// Power cycle a droplet: power off, then back on.
    pub async fn power_cycle_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::PowerCycle, QueryParams::new())
            .await
    }

    /// Shut down a running droplet. It remains in the account.
    pub async fn shutdown_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::Shutdown, QueryParams::new())
            .await
    }

    /// Power off a running droplet. It remains in the account.
    pub async fn power_off_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::PowerOff, QueryParams::new())
            .await
    }

    /// Power on a powered-off droplet.
    pub async fn power_on_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::PowerOn, QueryParams::new())
            .await
    }

    /// Reset the root password. The droplet is rebooted to apply it.
    pub async fn reset_droplet_password(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::PasswordReset, QueryParams::new())
            .await
    }

    /// Resize a droplet to another size.
    pub async fn resize_droplet(&self, id: DropletId, size_id: SizeId) -> Result<Option<Value>> {
        let params = QueryParams::new().with("size_id", size_id);
        self.droplet_action(id, DropletAction::Resize, params).await
    }

    /// Snapshot a droplet. May cause a reboot.
    pub async fn snapshot_droplet(
        &self,
        id: DropletId,
        options: &SnapshotOptions,
    ) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::Snapshot, options.to_params())
            .await
    }

    /// Restore a droplet from a previous image or snapshot.
    pub async fn restore_droplet(
        &self,
        id: DropletId,
        image_id: ImageId,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new().with("image_id", image_id);
        self.droplet_action(id, DropletAction::Restore, params).await
    }

    /// Reinstall a droplet from an image, keeping its IP address.
    pub async fn rebuild_droplet(
        &self,
        id: DropletId,
        image_id: ImageId,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new().with("image_id", image_id);
        self.droplet_action(id, DropletAction::Rebuild, params).await
    }

    /// Rename a droplet.
    pub async fn rename_droplet(&self, id: DropletId, name: &str) -> Result<Option<Value>> {
        let params = QueryParams::new().with("name", name);
        self.droplet_action(id, DropletAction::Rename, params).await
    }

    /// Destroy a droplet. Irreversible.
    pub async fn destroy_droplet(&self, id: DropletId) -> Result<Option<Value>> {
        self.droplet_action(id, DropletAction::Destroy, QueryParams::new())
            .await
    }

    async fn droplet_action(
        &self,
        id: DropletId,
        action: DropletAction,
        params: QueryParams,
    ) -> Result<Option<Value>> {
        let path = format!("droplets/{id}/{}/", action.as_str());
        self.get_field(&path, params, "event_id").await
    }
}
