//! SSH key endpoints.

use crate::client::DigitalOceanClient;
use crate::models::SshKey;
use crate::Result;
use digitalocean_core::ids::SshKeyId;
use digitalocean_core::QueryParams;
use serde_json::Value;

impl DigitalOceanClient {
    /// List the public SSH keys stored in the account.
    pub async fn list_ssh_keys(&self) -> Result<Option<Value>> {
        self.get_field("ssh_keys/", QueryParams::new(), "ssh_keys")
            .await
    }

    /// Add a public SSH key to the account.
    pub async fn add_ssh_key(&self, name: &str, public_key: &str) -> Result<Option<SshKey>> {
        let params = QueryParams::new()
            .with("name", name)
            .with("ssh_pub_key", public_key);
        self.get_field("ssh_keys/new/", params, "ssh_key").await
    }

    /// Show a single SSH key.
    pub async fn get_ssh_key(&self, id: SshKeyId) -> Result<Option<SshKey>> {
        let path = format!("ssh_keys/{id}/");
        self.get_field(&path, QueryParams::new(), "ssh_key").await
    }

    /// Replace the public key material of an existing SSH key.
    pub async fn edit_ssh_key(&self, id: SshKeyId, public_key: &str) -> Result<Option<Value>> {
        let path = format!("ssh_keys/{id}/edit/");
        let params = QueryParams::new().with("ssh_pub_key", public_key);
        self.get_field(&path, params, "event_id").await
    }

    /// Remove an SSH key from the account.
    pub async fn destroy_ssh_key(&self, id: SshKeyId) -> Result<Option<Value>> {
        let path = format!("ssh_keys/{id}/destroy/");
        self.get_field(&path, QueryParams::new(), "event_id").await
    }
}
