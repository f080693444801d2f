//! # Timezone Values
//!
//! [`TimezoneValue`] is a closed sum of three kinds. Each kind answers the
//! same questions, so code holding a value never needs to know which one it
//! has:
//!
//! | kind        | `identifier()`      | `code()`        | `name()`            |
//! |-------------|---------------------|-----------------|---------------------|
//! | Regular     | canonical id        | `code(id)`      | handle display name |
//! | Blank       | `""`                | `""`            | `"UTC"`             |
//! | Exceptional | raw input           | `code(raw)`     | `None`              |
//!
//! ## Identity
//!
//! Equality, ordering and hashing look at `identifier()` only, across kinds
//! as well as within them. Two blanks are always equal; a blank never equals
//! a regular value. Comparisons against raw strings cast the string first
//! through the process-wide [`Caster`](crate::Caster), so
//! `cast("UTC") == "UTC"` and `cast("Etc/GMT-5") == "ETC_GMT_M5"`.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cast::default_caster;
use crate::code::code;
use crate::lookup::TimezoneHandle;
use crate::validation::ErrorSink;

/// Display name reported by blank values. Blank borrows UTC for display
/// only; its identifier and code stay empty.
pub const BLANK_NAME: &str = "UTC";

/// A timezone, or the absence or invalidity of one.
#[derive(Debug, Clone)]
pub enum TimezoneValue {
    /// A zone known to the lookup service.
    Regular(Regular),
    /// No value was given.
    Blank,
    /// A value was given but it is not a known zone or code.
    Exceptional(Exceptional),
}

/// A resolved zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Regular {
    handle: TimezoneHandle,
}

impl Regular {
    /// Wrap a handle already resolved by a lookup service.
    pub fn new(handle: TimezoneHandle) -> Self {
        Self { handle }
    }

    /// The canonical identifier.
    pub fn identifier(&self) -> &str {
        self.handle.identifier()
    }

    /// The lookup service's display name.
    pub fn name(&self) -> &str {
        self.handle.display_name()
    }

    /// The underlying handle.
    pub fn handle(&self) -> &TimezoneHandle {
        &self.handle
    }
}

/// An input that could not be classified, with the validation message it
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exceptional {
    raw_value: String,
    reason: String,
}

impl Exceptional {
    /// Wrap a raw value with the default reason,
    /// `"has a invalid value of {raw_value}"`.
    pub fn new(raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        let reason = format!("has a invalid value of {raw_value}");
        Self { raw_value, reason }
    }

    /// Wrap a raw value with a custom reason.
    pub fn with_reason(raw_value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            reason: reason.into(),
        }
    }

    /// The input exactly as it was given.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The validation message.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Add the reason as an error against `field`.
    pub fn report_error(&self, sink: &mut dyn ErrorSink, field: &str) {
        sink.add(field, &self.reason);
    }
}

impl TimezoneValue {
    /// Build a regular value from a resolved handle.
    pub fn regular(handle: TimezoneHandle) -> Self {
        Self::Regular(Regular::new(handle))
    }

    /// Build an exceptional value with the default reason.
    pub fn exceptional(raw_value: impl Into<String>) -> Self {
        Self::Exceptional(Exceptional::new(raw_value))
    }

    /// `""` for blank, the raw input for exceptional, the canonical
    /// identifier for regular.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Regular(regular) => regular.identifier(),
            Self::Blank => "",
            Self::Exceptional(exceptional) => exceptional.raw_value(),
        }
    }

    /// Storage-safe code of [`identifier()`](Self::identifier).
    pub fn code(&self) -> String {
        code(self.identifier())
    }

    /// Display name; absent for exceptional values.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Regular(regular) => Some(regular.name()),
            Self::Blank => Some(BLANK_NAME),
            Self::Exceptional(_) => None,
        }
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn is_exceptional(&self) -> bool {
        matches!(self, Self::Exceptional(_))
    }

    /// Anything but blank.
    pub fn is_present(&self) -> bool {
        !self.is_blank()
    }

    pub fn as_regular(&self) -> Option<&Regular> {
        match self {
            Self::Regular(regular) => Some(regular),
            _ => None,
        }
    }

    pub fn as_exceptional(&self) -> Option<&Exceptional> {
        match self {
            Self::Exceptional(exceptional) => Some(exceptional),
            _ => None,
        }
    }

    /// Validation reason; only exceptional values have one.
    pub fn reason(&self) -> Option<&str> {
        self.as_exceptional().map(Exceptional::reason)
    }

    /// Report validation errors for `field`. Regular and blank values have
    /// nothing to report.
    pub fn report_errors(&self, sink: &mut dyn ErrorSink, field: &str) {
        if let Self::Exceptional(exceptional) = self {
            exceptional.report_error(sink, field);
        }
    }

    /// Compare against raw input, casting it first. An absent input
    /// compares this value's string form against `""`.
    pub fn cmp_raw(&self, other: Option<&str>) -> Ordering {
        default_caster().compare_raw(self, other)
    }
}

impl From<Regular> for TimezoneValue {
    fn from(regular: Regular) -> Self {
        Self::Regular(regular)
    }
}

impl From<Exceptional> for TimezoneValue {
    fn from(exceptional: Exceptional) -> Self {
        Self::Exceptional(exceptional)
    }
}

impl std::fmt::Display for TimezoneValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exceptional(exceptional) => f.write_str(exceptional.raw_value()),
            other => f.write_str(other.identifier()),
        }
    }
}

impl PartialEq for TimezoneValue {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for TimezoneValue {}

impl Hash for TimezoneValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl PartialOrd for TimezoneValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimezoneValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier().cmp(other.identifier())
    }
}

impl PartialEq<str> for TimezoneValue {
    fn eq(&self, other: &str) -> bool {
        default_caster().equal_raw(self, other)
    }
}

impl PartialEq<&str> for TimezoneValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for TimezoneValue {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialOrd<str> for TimezoneValue {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.cmp_raw(Some(other)))
    }
}

impl PartialOrd<&str> for TimezoneValue {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.cmp_raw(Some(*other)))
    }
}

impl FromStr for TimezoneValue {
    type Err = Infallible;

    /// Cast through the process-wide caster. Never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(default_caster().cast(s))
    }
}

impl Serialize for TimezoneValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes from a string or `null` and routes through the caster, so a
/// stored code, a blank string or garbage all come back as the value they
/// were cast to originally.
impl<'de> Deserialize<'de> for TimezoneValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(default_caster().cast(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;

    fn regular(identifier: &str) -> TimezoneValue {
        TimezoneValue::regular(TimezoneHandle::from_identifier(identifier))
    }

    #[test]
    fn test_exactly_one_kind() {
        for value in [regular("UTC"), TimezoneValue::Blank, TimezoneValue::exceptional("x")] {
            let kinds = [value.is_regular(), value.is_blank(), value.is_exceptional()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{value:?}");
        }
    }

    #[test]
    fn test_blank_surface() {
        let blank = TimezoneValue::Blank;
        assert_eq!(blank.identifier(), "");
        assert_eq!(blank.code(), "");
        assert_eq!(blank.to_string(), "");
        assert_eq!(blank.name(), Some("UTC"));
        assert!(!blank.is_present());
        assert_eq!(blank.reason(), None);
    }

    #[test]
    fn test_regular_surface() {
        let value = regular("America/Port-au-Prince");
        assert_eq!(value.identifier(), "America/Port-au-Prince");
        assert_eq!(value.code(), "AMERICA_PORT_AU_PRINCE");
        assert_eq!(value.to_string(), "America/Port-au-Prince");
        assert_eq!(value.name(), Some("America - Port-au-Prince"));
        assert!(value.is_present());
    }

    #[test]
    fn test_exceptional_surface() {
        let value = TimezoneValue::exceptional("{exceptional}");
        assert_eq!(value.identifier(), "{exceptional}");
        assert_eq!(value.to_string(), "{exceptional}");
        assert_eq!(value.name(), None);
        assert_eq!(value.reason(), Some("has a invalid value of {exceptional}"));
    }

    #[test]
    fn test_custom_reason() {
        let value: TimezoneValue = Exceptional::with_reason("x", "is not a zone").into();
        assert_eq!(value.reason(), Some("is not a zone"));
    }

    #[test]
    fn test_equality_by_identifier() {
        assert_eq!(regular("UTC"), regular("UTC"));
        assert_ne!(regular("UTC"), regular("Africa/Johannesburg"));
        assert_eq!(TimezoneValue::Blank, TimezoneValue::Blank);
        assert_ne!(TimezoneValue::Blank, regular("UTC"));
        assert_ne!(TimezoneValue::Blank, TimezoneValue::exceptional("BLAHBLAH"));
    }

    #[test]
    fn test_equality_ignores_display_name() {
        let a = TimezoneValue::regular(TimezoneHandle::new("UTC", "one"));
        let b = TimezoneValue::regular(TimezoneHandle::new("UTC", "two"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_dedups_by_identifier() {
        let set: std::collections::HashSet<_> =
            [regular("UTC"), regular("UTC"), TimezoneValue::Blank, TimezoneValue::Blank]
                .into_iter()
                .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering_is_lexicographic_on_identifier() {
        let mut values = vec![
            regular("UTC"),
            TimezoneValue::exceptional("BLAHBLAH"),
            TimezoneValue::Blank,
            regular("Africa/Johannesburg"),
        ];
        values.sort();
        let ids: Vec<_> = values.iter().map(TimezoneValue::identifier).collect();
        assert_eq!(ids, ["", "Africa/Johannesburg", "BLAHBLAH", "UTC"]);
    }

    #[test]
    fn test_report_errors_only_for_exceptional() {
        let mut errors = ValidationErrors::new();
        regular("UTC").report_errors(&mut errors, "zone");
        TimezoneValue::Blank.report_errors(&mut errors, "zone");
        assert!(errors.is_empty());

        TimezoneValue::exceptional("nope").report_errors(&mut errors, "zone");
        assert_eq!(errors.len(), 1);
    }
}
