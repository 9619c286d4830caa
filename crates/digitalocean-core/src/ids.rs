//! Strongly-typed identifiers for DigitalOcean resources.
//!
//! The v1 API addresses every resource by a numeric id. Wrapping each kind in its own
//! type keeps a droplet id from being passed where an image id is expected.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Macro to generate strongly-typed numeric id wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw numeric id.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw numeric id.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Parses an id from a string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not an unsigned integer.
            pub fn parse_str(input: &str) -> Result<Self> {
                input
                    .trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| Error::InvalidId(format!("{} `{input}`", stringify!($name))))
            }

            /// Reads an id out of a response field.
            ///
            /// Accepts a non-negative integer or a string holding one; any other
            /// shape yields `None`.
            #[must_use]
            pub fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => n.as_u64().map(Self),
                    Value::String(s) => s.trim().parse().ok().map(Self),
                    _ => None,
                }
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(DropletId, "Droplet id");
id_type!(ImageId, "Image or snapshot id");
id_type!(SshKeyId, "SSH key id");
id_type!(RegionId, "Region id");
id_type!(SizeId, "Size id");
id_type!(DomainId, "Domain id");
id_type!(RecordId, "Domain record id");
id_type!(EventId, "Event id, returned by asynchronous droplet and image actions");

/// A domain name usable as a single URL path segment.
///
/// Rejects empty names, `.` and `..`, and names containing `/`, `\`, `?`, `#`,
/// whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Validates and wraps a domain name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the name cannot stand as one path segment.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidId("empty domain name".to_string()));
        }
        if name == "." || name == ".." {
            return Err(Error::InvalidId(format!("domain name `{name}`")));
        }
        if name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_whitespace() || c.is_control())
        {
            return Err(Error::InvalidId(format!(
                "domain name `{}` contains a reserved character",
                name.escape_debug()
            )));
        }
        Ok(Self(name))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A domain addressed either by numeric id or by name (e.g. `example.com`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainRef {
    /// Numeric domain id
    Id(DomainId),
    /// Fully qualified domain name
    Name(DomainName),
}

impl DomainRef {
    /// Refer to a domain by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the name is rejected by [`DomainName::new`].
    pub fn name(name: impl Into<String>) -> Result<Self> {
        DomainName::new(name).map(Self::Name)
    }
}

impl fmt::Display for DomainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for DomainRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<u64>() {
            Ok(id) => Ok(Self::Id(id.into())),
            Err(_) => Self::name(trimmed),
        }
    }
}

impl From<DomainId> for DomainRef {
    fn from(id: DomainId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for DomainRef {
    fn from(id: u64) -> Self {
        Self::Id(DomainId::new(id))
    }
}

impl From<DomainName> for DomainRef {
    fn from(name: DomainName) -> Self {
        Self::Name(name)
    }
}
