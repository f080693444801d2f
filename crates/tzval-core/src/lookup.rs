//! # Timezone Lookup Services
//!
//! The timezone database is an external collaborator. The caster only needs
//! two questions answered: "which zone is this identifier?" and "which zones
//! exist?". [`TimezoneLookup`] captures exactly that.
//!
//! Two implementations ship with the crate:
//!
//! - [`ChronoTzLookup`]: the IANA database bundled by `chrono-tz`.
//! - [`StaticLookup`]: a fixed list of zones, for tests and custom sets.

use std::collections::HashMap;
use std::convert::Infallible;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TzvalError;

/// A resolved zone as reported by a lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimezoneHandle {
    identifier: String,
    display_name: String,
}

impl TimezoneHandle {
    /// Create a handle with an explicit display name.
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }

    /// Create a handle whose display name is derived with [`friendly_name`].
    pub fn from_identifier(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let display_name = friendly_name(&identifier);
        Self {
            identifier,
            display_name,
        }
    }

    /// The canonical identifier, e.g. `"Africa/Johannesburg"`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The human-readable name, e.g. `"Africa - Johannesburg"`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<Tz> for TimezoneHandle {
    fn from(tz: Tz) -> Self {
        Self::from_identifier(tz.name())
    }
}

/// A source of truth for timezone identifiers.
///
/// `resolve` returns `Ok(None)` when the identifier is unknown; that is the
/// normal "not found" outcome and the caster recovers from it. `Err` is
/// reserved for the service itself being unusable.
pub trait TimezoneLookup {
    /// Failure of the service itself. Use [`Infallible`] for in-memory
    /// databases.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve an identifier to a handle.
    fn resolve(&self, identifier: &str) -> Result<Option<TimezoneHandle>, Self::Error>;

    /// Enumerate every known zone.
    fn all_zones(&self) -> Result<Vec<TimezoneHandle>, Self::Error>;
}

/// Lookup over the IANA database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzLookup;

impl ChronoTzLookup {
    /// Strict lookup: an unknown identifier is an error.
    pub fn get(&self, identifier: &str) -> Result<TimezoneHandle, TzvalError> {
        identifier
            .parse::<Tz>()
            .map(TimezoneHandle::from)
            .map_err(|_| TzvalError::NotFound(identifier.to_string()))
    }
}

impl TimezoneLookup for ChronoTzLookup {
    type Error = Infallible;

    fn resolve(&self, identifier: &str) -> Result<Option<TimezoneHandle>, Infallible> {
        Ok(identifier.parse::<Tz>().ok().map(TimezoneHandle::from))
    }

    fn all_zones(&self) -> Result<Vec<TimezoneHandle>, Infallible> {
        Ok(chrono_tz::TZ_VARIANTS
            .iter()
            .copied()
            .map(TimezoneHandle::from)
            .collect())
    }
}

/// Lookup over a fixed, in-memory set of zones.
///
/// Identifiers are matched exactly. When the same identifier is given twice
/// the first handle wins.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    zones: Vec<TimezoneHandle>,
    by_identifier: HashMap<String, usize>,
}

impl StaticLookup {
    /// Build a lookup from handles.
    pub fn new(zones: impl IntoIterator<Item = TimezoneHandle>) -> Self {
        let mut lookup = Self::default();
        for handle in zones {
            if lookup.by_identifier.contains_key(handle.identifier()) {
                continue;
            }
            lookup
                .by_identifier
                .insert(handle.identifier().to_string(), lookup.zones.len());
            lookup.zones.push(handle);
        }
        lookup
    }

    /// Build a lookup from identifiers, deriving display names.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(identifiers.into_iter().map(TimezoneHandle::from_identifier))
    }

    /// Number of distinct zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the lookup knows no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl TimezoneLookup for StaticLookup {
    type Error = Infallible;

    fn resolve(&self, identifier: &str) -> Result<Option<TimezoneHandle>, Infallible> {
        Ok(self
            .by_identifier
            .get(identifier)
            .map(|&idx| self.zones[idx].clone()))
    }

    fn all_zones(&self) -> Result<Vec<TimezoneHandle>, Infallible> {
        Ok(self.zones.clone())
    }
}

/// Derive a readable name from an identifier.
///
/// `"UTC"` stays `"UTC"`; `"America/Argentina/Buenos_Aires"` becomes
/// `"America - Buenos Aires, Argentina"`. Within each non-area part,
/// underscores become spaces; if the part has any lowercase letter, a space
/// is inserted where a lowercase letter runs into an uppercase one (except
/// after `Mc`) and an apostrophe between two adjacent uppercase letters
/// (`"DumontDUrville"` → `"Dumont D'Urville"`).
pub fn friendly_name(identifier: &str) -> String {
    let mut parts = identifier.split('/');
    let area = match parts.next() {
        Some(area) => area,
        None => return identifier.to_string(),
    };
    let mut rest: Vec<String> = parts.map(friendly_part).collect();
    if rest.is_empty() {
        return area.to_string();
    }
    rest.reverse();
    format!("{area} - {}", rest.join(", "))
}

fn friendly_part(part: &str) -> String {
    let part = part.replace('_', " ");
    if !part.chars().any(|c| c.is_ascii_lowercase()) {
        return part;
    }

    let chars: Vec<char> = part.chars().collect();
    let mut out = String::with_capacity(part.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let after_mc = prev == 'c' && i >= 2 && chars[i - 2] == 'M';
            if prev.is_ascii_lowercase() && !after_mc {
                out.push(' ');
            } else if prev.is_ascii_uppercase() {
                out.push('\'');
            }
        }
        out.push(c);
    }
    out
}
