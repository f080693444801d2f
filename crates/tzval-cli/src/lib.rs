//! # tzval-cli: Command-Line Interface
//!
//! The `tzval` binary is a thin front end over `tzval-core`.
//!
//! ## Subcommands
//!
//! - `tzval cast <INPUT>...`: classify inputs and show identifier, code
//!   and name.
//! - `tzval code <IDENTIFIER>...`: print the storage code of identifiers.
//! - `tzval list`: print the zone catalog.
//! - `tzval check <INPUT>`: exit 0 if the input is a known zone or code.
//!
//! Every subcommand accepts `--config <FILE>` to select the zone source
//! (see [`tzval_core::LookupConfig`]).

pub mod catalog;
pub mod inspect;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use tzval_core::{Caster, ConfiguredLookup, LookupConfig, TimezoneValue};

/// Build a caster from an optional YAML config; the bundled database
/// otherwise.
pub fn build_caster(config: Option<&Path>) -> Result<Caster<ConfiguredLookup>> {
    let config = match config {
        Some(path) => LookupConfig::load(path)
            .with_context(|| format!("loading lookup config from {}", path.display()))?,
        None => LookupConfig::Bundled,
    };
    tracing::debug!(?config, "using lookup config");
    Ok(Caster::new(config.into_lookup()))
}

/// Flat description of a value for text and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueReport {
    pub kind: &'static str,
    pub identifier: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&TimezoneValue> for ValueReport {
    fn from(value: &TimezoneValue) -> Self {
        let kind = match value {
            TimezoneValue::Regular(_) => "regular",
            TimezoneValue::Blank => "blank",
            TimezoneValue::Exceptional(_) => "exceptional",
        };
        Self {
            kind,
            identifier: value.identifier().to_string(),
            code: value.code(),
            name: value.name().map(str::to_string),
            reason: value.reason().map(str::to_string),
        }
    }
}
