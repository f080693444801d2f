//! # tzval-core: Whole-Value Timezones
//!
//! A timezone, or the absence or invalidity of one, as a single total value.
//! Every input (a string, an already-cast value, a native `chrono_tz::Tz`,
//! or nothing at all) is normalized into exactly one [`TimezoneValue`]
//! variant:
//!
//! - **Regular**: a zone the lookup service knows (`"Africa/Johannesburg"`).
//! - **Blank**: no input, or an empty / whitespace-only string.
//! - **Exceptional**: anything else, kept as data with a validation reason.
//!
//! All three share one API (identifier, code, name, ordering, equality,
//! validation reporting), so callers never special-case missing or malformed
//! input.
//!
//! ## Key Design Principles
//!
//! 1. **Casting is total.** [`cast()`] never fails. Unknown identifiers
//!    become `Exceptional` values; only environment failures of a fallible
//!    [`TimezoneLookup`] surface as errors, through [`Caster::try_cast`].
//!
//! 2. **Codes are a storage form.** [`code()`] derives an uppercase,
//!    delimiter-free code (`"Etc/GMT-5"` → `"ETC_GMT_M5"`). The caster
//!    recovers the original zone from a stored code via the [`Catalog`].
//!
//! 3. **The catalog is owned, not ambient.** A [`Caster`] owns its lookup
//!    service and lazily builds its catalog once. The free functions use a
//!    process-wide caster over the bundled `chrono-tz` database.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Values are immutable; equality, ordering and hashing follow the
//!   identifier alone.

pub mod cast;
pub mod catalog;
pub mod code;
pub mod config;
pub mod error;
pub mod job;
pub mod lookup;
pub mod validation;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use cast::{all, cast, default_caster, is_timezone, CastInput, Caster};
pub use catalog::Catalog;
pub use code::code;
pub use config::{ConfiguredLookup, LookupConfig, ZoneEntry};
pub use error::TzvalError;
pub use job::JobArgument;
pub use lookup::{ChronoTzLookup, StaticLookup, TimezoneHandle, TimezoneLookup};
pub use validation::{ErrorSink, ValidationErrors};
pub use value::{Exceptional, Regular, TimezoneValue};
