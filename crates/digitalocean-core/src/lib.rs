//! # digitalocean-core
//!
//! Core types and utilities for working with the DigitalOcean v1 API.
//!
//! This crate provides the shared error type, client configuration, the credential
//! context, query-string assembly and response-envelope normalization used by
//! `digitalocean-api`.
//!
//! ## Modules
//!
//! - [`error`] - Error type shared by every crate in the workspace
//! - [`config`] - Client configuration (base URL, timeouts)
//! - [`credentials`] - The `client_id`/`api_key` pair attached to every request
//! - [`query`] - Query parameter builder
//! - [`envelope`] - Response envelope and `status` normalization
//! - [`ids`] - Strongly-typed identifiers for DigitalOcean resources

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod query;

// Re-export commonly used types
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use envelope::{Envelope, Reply};
pub use error::{Error, Result};
pub use query::QueryParams;
