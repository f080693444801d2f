//! # Casting
//!
//! [`Caster`] is the single entry point that turns any input into a
//! [`TimezoneValue`]:
//!
//! 1. A value is returned unchanged.
//! 2. A handle (or a native `chrono_tz::Tz`) becomes regular without lookup.
//! 3. Nothing, `""` or whitespace becomes blank.
//! 4. Anything else is resolved by the lookup service. If that fails, the
//!    input is tried as a code against the catalog; if that fails too, the
//!    result is exceptional.
//!
//! The catalog is only built when step 4 falls through to the code search
//! (or when it is asked for directly), and then only once per caster.

use std::cmp::Ordering;
use std::convert::Infallible;

use chrono_tz::Tz;
use once_cell::sync::{Lazy, OnceCell};

use crate::catalog::Catalog;
use crate::lookup::{ChronoTzLookup, TimezoneHandle, TimezoneLookup};
use crate::value::TimezoneValue;

/// Anything [`Caster::cast`] accepts.
#[derive(Debug, Clone)]
pub enum CastInput<'a> {
    /// An already-cast value.
    Value(TimezoneValue),
    /// A handle resolved elsewhere.
    Handle(TimezoneHandle),
    /// Raw text, or nothing.
    Raw(Option<&'a str>),
}

impl From<TimezoneValue> for CastInput<'_> {
    fn from(value: TimezoneValue) -> Self {
        Self::Value(value)
    }
}

impl From<&TimezoneValue> for CastInput<'_> {
    fn from(value: &TimezoneValue) -> Self {
        Self::Value(value.clone())
    }
}

impl From<TimezoneHandle> for CastInput<'_> {
    fn from(handle: TimezoneHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<Tz> for CastInput<'_> {
    fn from(tz: Tz) -> Self {
        Self::Handle(tz.into())
    }
}

impl<'a> From<&'a str> for CastInput<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(Some(raw))
    }
}

impl<'a> From<&'a String> for CastInput<'a> {
    fn from(raw: &'a String) -> Self {
        Self::Raw(Some(raw.as_str()))
    }
}

impl<'a> From<Option<&'a str>> for CastInput<'a> {
    fn from(raw: Option<&'a str>) -> Self {
        Self::Raw(raw)
    }
}

/// Casts input through a lookup service, with a lazily built catalog for
/// code recovery.
#[derive(Debug)]
pub struct Caster<L> {
    lookup: L,
    catalog: OnceCell<Catalog>,
}

impl<L: TimezoneLookup> Caster<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            catalog: OnceCell::new(),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The catalog, enumerating the lookup service on first use.
    ///
    /// Concurrent first calls enumerate at most once; every caller sees the
    /// same catalog. A failed enumeration is not cached.
    pub fn try_catalog(&self) -> Result<&Catalog, L::Error> {
        self.catalog.get_or_try_init(|| Catalog::build(&self.lookup))
    }

    /// Every known zone, sorted by display name.
    pub fn try_all(&self) -> Result<&[TimezoneValue], L::Error> {
        self.try_catalog().map(Catalog::all)
    }

    /// Whether the catalog has been built yet.
    pub fn has_catalog(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Drop the cached catalog so the next access re-enumerates the lookup
    /// service.
    pub fn reset_catalog(&mut self) -> Option<Catalog> {
        self.catalog.take()
    }

    /// Cast `input`. Classification never fails; an `Err` means the lookup
    /// service itself failed.
    pub fn try_cast<'a>(&self, input: impl Into<CastInput<'a>>) -> Result<TimezoneValue, L::Error> {
        match input.into() {
            CastInput::Value(value) => Ok(value),
            CastInput::Handle(handle) => Ok(TimezoneValue::regular(handle)),
            CastInput::Raw(raw) => self.try_cast_raw(raw),
        }
    }

    fn try_cast_raw(&self, raw: Option<&str>) -> Result<TimezoneValue, L::Error> {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(TimezoneValue::Blank),
        };

        if let Some(handle) = self.lookup.resolve(raw)? {
            return Ok(TimezoneValue::regular(handle));
        }

        if let Some(found) = self.try_catalog()?.find_by_code(raw) {
            tracing::debug!(code = raw, identifier = found.identifier(), "recovered zone from code");
            return Ok(found.clone());
        }

        tracing::trace!(raw, "unclassifiable timezone input");
        Ok(TimezoneValue::exceptional(raw))
    }
}

impl<L: TimezoneLookup<Error = Infallible>> Caster<L> {
    /// Cast `input`. Total.
    pub fn cast<'a>(&self, input: impl Into<CastInput<'a>>) -> TimezoneValue {
        infallible(self.try_cast(input))
    }

    pub fn catalog(&self) -> &Catalog {
        infallible(self.try_catalog())
    }

    /// Every known zone, sorted by display name.
    pub fn all(&self) -> &[TimezoneValue] {
        self.catalog().all()
    }

    /// Whether `input` casts to a regular value.
    pub fn is_timezone<'a>(&self, input: impl Into<CastInput<'a>>) -> bool {
        self.cast(input).is_regular()
    }

    /// Identifier equality after casting `other`.
    pub fn equal_raw(&self, value: &TimezoneValue, other: &str) -> bool {
        value.identifier() == self.cast(other).identifier()
    }

    /// Identifier ordering after casting `other`; with no `other`, the
    /// value's string form is compared against `""`.
    pub fn compare_raw(&self, value: &TimezoneValue, other: Option<&str>) -> Ordering {
        match other {
            None => value.to_string().as_str().cmp(""),
            Some(other) => value.identifier().cmp(self.cast(other).identifier()),
        }
    }
}

impl Default for Caster<ChronoTzLookup> {
    fn default() -> Self {
        Self::new(ChronoTzLookup)
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

static DEFAULT_CASTER: Lazy<Caster<ChronoTzLookup>> = Lazy::new(Caster::default);

/// The process-wide caster over the bundled `chrono-tz` database.
pub fn default_caster() -> &'static Caster<ChronoTzLookup> {
    &DEFAULT_CASTER
}

/// Cast `input` with the process-wide caster.
pub fn cast<'a>(input: impl Into<CastInput<'a>>) -> TimezoneValue {
    default_caster().cast(input)
}

/// Whether `input` is a known zone (or code) in the bundled database.
pub fn is_timezone<'a>(input: impl Into<CastInput<'a>>) -> bool {
    default_caster().is_timezone(input)
}

/// Every zone in the bundled database, sorted by display name.
pub fn all() -> &'static [TimezoneValue] {
    default_caster().all()
}
