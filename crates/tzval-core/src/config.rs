//! # Lookup Configuration
//!
//! Selects the zone source for a [`Caster`](crate::Caster), loaded from
//! YAML:
//!
//! ```yaml
//! source: bundled
//! ```
//!
//! ```yaml
//! source: static
//! zones:
//!   - identifier: UTC
//!   - identifier: Africa/Johannesburg
//!     display_name: South Africa
//! ```
//!
//! Static zones without a `display_name` get one derived from the
//! identifier.

use std::convert::Infallible;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TzvalError;
use crate::lookup::{ChronoTzLookup, StaticLookup, TimezoneHandle, TimezoneLookup};

/// Where zones come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LookupConfig {
    /// The IANA database compiled into `chrono-tz`.
    #[default]
    Bundled,
    /// An explicit zone list.
    Static {
        zones: Vec<ZoneEntry>,
    },
}

/// One zone in a static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ZoneEntry {
    fn into_handle(self) -> TimezoneHandle {
        match self.display_name {
            Some(name) => TimezoneHandle::new(self.identifier, name),
            None => TimezoneHandle::from_identifier(self.identifier),
        }
    }
}

impl LookupConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TzvalError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self, TzvalError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            TzvalError::Config(msg) => {
                TzvalError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    fn validate(&self) -> Result<(), TzvalError> {
        if let Self::Static { zones } = self {
            if let Some(blank) = zones.iter().position(|z| z.identifier.trim().is_empty()) {
                return Err(TzvalError::Config(format!(
                    "zones[{blank}]: identifier must not be blank"
                )));
            }
        }
        Ok(())
    }

    /// Build the configured lookup service.
    pub fn into_lookup(self) -> ConfiguredLookup {
        match self {
            Self::Bundled => ConfiguredLookup::Bundled(ChronoTzLookup),
            Self::Static { zones } => ConfiguredLookup::Static(StaticLookup::new(
                zones.into_iter().map(ZoneEntry::into_handle),
            )),
        }
    }
}

/// A lookup service chosen at runtime.
#[derive(Debug, Clone)]
pub enum ConfiguredLookup {
    Bundled(ChronoTzLookup),
    Static(StaticLookup),
}

impl TimezoneLookup for ConfiguredLookup {
    type Error = Infallible;

    fn resolve(&self, identifier: &str) -> Result<Option<TimezoneHandle>, Infallible> {
        match self {
            Self::Bundled(lookup) => lookup.resolve(identifier),
            Self::Static(lookup) => lookup.resolve(identifier),
        }
    }

    fn all_zones(&self) -> Result<Vec<TimezoneHandle>, Infallible> {
        match self {
            Self::Bundled(lookup) => lookup.all_zones(),
            Self::Static(lookup) => lookup.all_zones(),
        }
    }
}
