//! # Error Types
//!
//! Invalid timezone input is *not* an error in this crate: it becomes an
//! [`Exceptional`](crate::Exceptional) value. The types here cover the
//! remaining failures: strict lookups, unavailable lookup services,
//! configuration loading and serialization.

use thiserror::Error;

/// Top-level error type for the timezone value stack.
#[derive(Error, Debug)]
pub enum TzvalError {
    /// No zone matches the identifier.
    ///
    /// Only produced by strict APIs such as [`ChronoTzLookup::get`]; the
    /// caster absorbs it.
    ///
    /// [`ChronoTzLookup::get`]: crate::ChronoTzLookup::get
    #[error("unknown timezone identifier: {0:?}")]
    NotFound(String),

    /// The lookup service could not answer at all.
    #[error("timezone lookup unavailable: {0}")]
    LookupUnavailable(String),

    /// Lookup configuration is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TzvalError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}
