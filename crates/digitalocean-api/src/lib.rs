//! Asynchronous client for the DigitalOcean v1 API.
//!
//! Every endpoint is a single authenticated `GET`. The client appends the
//! `client_id`/`api_key` pair to each request, normalizes the response's `status`
//! field into an [`Error`](digitalocean_core::Error) and hands back the one payload
//! field the endpoint is documented to return, exactly as the API sent it.
//!
//! ```no_run
//! use digitalocean_api::DigitalOceanClient;
//!
//! # async fn run() -> digitalocean_api::Result<()> {
//! let client = DigitalOceanClient::new("client-id", "api-key")?;
//! let droplets = client.list_droplets().await?;
//! let count = droplets.as_ref().and_then(|d| d.as_array()).map_or(0, Vec::len);
//! println!("{count} droplets");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod domains;
pub mod droplets;
pub mod events;
pub mod images;
pub mod models;
pub mod regions;
pub mod sizes;
pub mod ssh_keys;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::{DigitalOceanClient, DigitalOceanClientBuilder};
pub use digitalocean_core::ids::{
    DomainId, DomainName, DomainRef, DropletId, EventId, ImageId, RecordId, RegionId, SizeId,
    SshKeyId,
};
pub use models::{
    Domain, DomainRecord, DomainRecordOptions, Droplet, DropletAction, DropletCreateOptions,
    Event, Image, ImageFilter, RecordType, SnapshotOptions, SshKey,
};
pub use transport::{HttpTransport, Transport};

/// Convenient result alias that reuses the shared DigitalOcean error type.
pub type Result<T> = digitalocean_core::Result<T>;
