//! # Zone Catalog
//!
//! Every zone a lookup service knows, as regular values sorted by display
//! name. The catalog also indexes entries by code, which is how the caster
//! turns a stored code like `"ETC_GMT_M5"` back into `Etc/GMT-5`.
//!
//! A catalog is a snapshot. Codes are matched exactly against the zones
//! present when it was built; a code stored under a different database
//! version may not be found, in which case casting it yields an
//! exceptional value.

use std::collections::HashMap;

use crate::lookup::{TimezoneHandle, TimezoneLookup};
use crate::value::TimezoneValue;

/// Sorted, deduplicated list of regular values with code and identifier
/// indexes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<TimezoneValue>,
    by_code: HashMap<String, usize>,
    by_identifier: HashMap<String, usize>,
}

impl Catalog {
    /// Enumerate the lookup service and build a catalog from its zones.
    pub fn build<L: TimezoneLookup + ?Sized>(lookup: &L) -> Result<Self, L::Error> {
        let handles = lookup.all_zones()?;
        Ok(Self::from_handles(handles))
    }

    /// Build a catalog from handles. Handles are sorted by display name
    /// (identifier breaks ties); repeated identifiers keep the first entry.
    pub fn from_handles(mut handles: Vec<TimezoneHandle>) -> Self {
        handles.sort_by(|a, b| {
            a.display_name()
                .cmp(b.display_name())
                .then_with(|| a.identifier().cmp(b.identifier()))
        });

        let mut catalog = Self::default();
        for handle in handles {
            if catalog.by_identifier.contains_key(handle.identifier()) {
                tracing::warn!(identifier = handle.identifier(), "duplicate zone dropped from catalog");
                continue;
            }

            let idx = catalog.entries.len();
            let value = TimezoneValue::regular(handle);
            let code = value.code();
            if let Some(&existing) = catalog.by_code.get(&code) {
                tracing::warn!(
                    code = %code,
                    kept = catalog.entries[existing].identifier(),
                    shadowed = value.identifier(),
                    "code collision in catalog"
                );
            } else {
                catalog.by_code.insert(code, idx);
            }
            catalog.by_identifier.insert(value.identifier().to_string(), idx);
            catalog.entries.push(value);
        }

        tracing::debug!(zones = catalog.entries.len(), "built timezone catalog");
        catalog
    }

    /// All entries, sorted by display name.
    pub fn all(&self) -> &[TimezoneValue] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimezoneValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose code is exactly `code` (case-sensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&TimezoneValue> {
        self.by_code.get(code).map(|&idx| &self.entries[idx])
    }

    /// Entry with exactly this identifier.
    pub fn get(&self, identifier: &str) -> Option<&TimezoneValue> {
        self.by_identifier.get(identifier).map(|&idx| &self.entries[idx])
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TimezoneValue;
    type IntoIter = std::slice::Iter<'a, TimezoneValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
