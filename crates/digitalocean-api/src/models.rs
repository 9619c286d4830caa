//! Request options and response types for the v1 API.
//!
//! Resource records are provider defined and returned untouched as JSON values; the
//! aliases below only name what each endpoint hands back.

use digitalocean_core::ids::SshKeyId;
use digitalocean_core::{Error, QueryParams};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A droplet record (`droplet`, or an item of `droplets`).
pub type Droplet = Value;
/// An image record (`image`, or an item of `images`).
pub type Image = Value;
/// An SSH key record (`ssh_key`, or an item of `ssh_keys`).
pub type SshKey = Value;
/// A domain record (`domain`, or an item of `domains`).
pub type Domain = Value;
/// A DNS record (`domain_record`, `record`, or an item of `records`).
pub type DomainRecord = Value;
/// An event record (`event`).
pub type Event = Value;

/// Optional parameters for creating a droplet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropletCreateOptions {
    /// SSH keys to install; sent as one `ssh_key_ids` pair per key.
    pub ssh_key_ids: Option<Vec<SshKeyId>>,
    /// Enable private networking.
    pub private_networking: Option<bool>,
    /// Enable automatic backups.
    pub backups_enabled: Option<bool>,
}

impl DropletCreateOptions {
    /// Convert the options into query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(ids) = &self.ssh_key_ids {
            params.push_list("ssh_key_ids", ids);
        }
        params.push_opt("private_networking", self.private_networking);
        params.push_opt("backups_enabled", self.backups_enabled);
        params
    }
}

/// Optional parameters for snapshotting a droplet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Snapshot name; the API picks a timestamp when omitted.
    pub name: Option<String>,
}

impl SnapshotOptions {
    /// Options naming the snapshot.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Convert the options into query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params
    }
}

/// Optional parameters for creating or editing a DNS record.
///
/// `name` is required by the API for `A`, `CNAME`, `TXT` and `SRV` records, `priority`
/// for `SRV` and `MX`, `port` and `weight` for `SRV`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DomainRecordOptions {
    /// Record name.
    pub name: Option<String>,
    /// Record priority.
    pub priority: Option<u32>,
    /// Service port.
    pub port: Option<u16>,
    /// Record weight.
    pub weight: Option<u32>,
}

impl DomainRecordOptions {
    /// Convert the options into query parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("priority", self.priority);
        params.push_opt("port", self.port);
        params.push_opt("weight", self.weight);
        params
    }
}

/// Which images to list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFilter {
    /// Public images plus the account's own snapshots and backups.
    #[default]
    All,
    /// Public images only.
    Global,
    /// The account's own snapshots and backups.
    Mine,
}

impl ImageFilter {
    /// Value sent as the `filter` parameter. `All` sends an empty value.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Global => "global",
            Self::Mine => "my_images",
        }
    }
}

/// DNS record types accepted by the domain record endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// Canonical name record.
    Cname,
    /// Name server record.
    Ns,
    /// Text record.
    Txt,
    /// Mail exchange record.
    Mx,
    /// Service locator record.
    Srv,
}

impl RecordType {
    /// The wire name of the record type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Mx => "MX",
            Self::Srv => "SRV",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "NS" => Ok(Self::Ns),
            "TXT" => Ok(Self::Txt),
            "MX" => Ok(Self::Mx),
            "SRV" => Ok(Self::Srv),
            _ => Err(Error::InvalidRequest(format!("Unknown record type: {s}"))),
        }
    }
}

/// Asynchronous droplet actions, each answered with an `event_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropletAction {
    /// Graceful reboot.
    Reboot,
    /// Hard power off followed by power on.
    PowerCycle,
    /// Graceful shutdown.
    Shutdown,
    /// Hard power off.
    PowerOff,
    /// Power on a stopped droplet.
    PowerOn,
    /// Reset the root password (reboots the droplet).
    PasswordReset,
    /// Change the droplet size.
    Resize,
    /// Take a snapshot image.
    Snapshot,
    /// Restore from an image or snapshot.
    Restore,
    /// Reinstall from an image.
    Rebuild,
    /// Change the droplet name.
    Rename,
    /// Destroy the droplet.
    Destroy,
}

impl DropletAction {
    /// Return the path segment for this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reboot => "reboot",
            Self::PowerCycle => "power_cycle",
            Self::Shutdown => "shutdown",
            Self::PowerOff => "power_off",
            Self::PowerOn => "power_on",
            Self::PasswordReset => "password_reset",
            Self::Resize => "resize",
            Self::Snapshot => "snapshot",
            Self::Restore => "restore",
            Self::Rebuild => "rebuild",
            Self::Rename => "rename",
            Self::Destroy => "destroy",
        }
    }
}
