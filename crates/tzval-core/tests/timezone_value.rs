//! # Whole-Value Behaviour
//!
//! End-to-end checks of the public API against the bundled `chrono-tz`
//! database: every kind behaves like a whole value, equality and ordering
//! follow identifiers, and every catalog code casts back to its zone.

use std::collections::HashSet;

use proptest::prelude::*;
use tzval_core::{all, cast, code, is_timezone, TimezoneValue, ValidationErrors};

const REGULAR: &str = "UTC";
const REGULAR2: &str = "Africa/Johannesburg";
const EXCEPTIONAL: &str = "BLAHBLAH";

fn blank() -> TimezoneValue {
    cast(None::<&str>)
}

fn kinds(value: &TimezoneValue) -> (bool, bool, bool) {
    (value.is_regular(), value.is_blank(), value.is_exceptional())
}

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

#[test]
fn regular_value_kind() {
    assert_eq!(kinds(&cast(REGULAR2)), (true, false, false));
}

#[test]
fn blank_value_kind() {
    assert_eq!(kinds(&blank()), (false, true, false));
}

#[test]
fn exceptional_value_kind() {
    assert_eq!(kinds(&cast(EXCEPTIONAL)), (false, false, true));
}

#[test]
fn exceptional_reports_error_against_field() {
    let mut errors = ValidationErrors::new();
    cast("{exceptional}").report_errors(&mut errors, "email");
    assert_eq!(errors.full_messages(), vec!["Email has a invalid value of {exceptional}"]);
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn same_regular_value_is_equal() {
    let first = cast(REGULAR);
    let second = cast(REGULAR);
    assert_eq!(first, second);
    let unique: HashSet<_> = [first, second].into_iter().collect();
    assert_eq!(unique.len(), 1);
}

#[test]
fn same_regular_value_is_equal_if_cast_multiple_times() {
    let first = cast(REGULAR);
    let second = cast(cast(REGULAR));
    assert_eq!(first, second);
}

#[test]
fn different_regular_values_are_not_equal() {
    let unique: HashSet<_> = [cast(REGULAR), cast(REGULAR2)].into_iter().collect();
    assert_eq!(unique.len(), 2);
    assert_ne!(cast(REGULAR), cast(REGULAR2));
}

#[test]
fn regular_values_compare_against_strings() {
    let value = cast(REGULAR);
    assert_eq!(value, REGULAR);
    assert_eq!(value, REGULAR.to_string());
    assert_ne!(value, REGULAR2);
}

#[test]
fn regular_values_compare_against_their_code() {
    let value = cast("Etc/GMT-5");
    assert_eq!(value, "ETC_GMT_M5");
    assert_ne!(value, "ETC_GMT_5");
}

#[test]
fn regular_is_not_blank_or_exceptional() {
    assert_ne!(cast(REGULAR), blank());
    assert_ne!(cast(REGULAR), cast(EXCEPTIONAL));
}

#[test]
fn blank_is_not_exceptional() {
    assert_ne!(blank(), cast(EXCEPTIONAL));
}

#[test]
fn blank_equals_blank_strings() {
    assert_eq!(blank(), cast(""));
    assert_eq!(blank(), "   ");
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn ordering_against_values_and_strings() {
    assert!(cast(REGULAR2) < cast(REGULAR));
    assert!(cast(REGULAR) > REGULAR2);
    assert!(blank() < cast(REGULAR2));
    assert_eq!(cast(REGULAR).cmp_raw(None), std::cmp::Ordering::Greater);
    assert_eq!(blank().cmp_raw(None), std::cmp::Ordering::Equal);
}

// ---------------------------------------------------------------------------
// Examples
// ---------------------------------------------------------------------------

#[test]
fn europe_sarajevo() {
    let value = cast("Europe/Sarajevo");
    assert_eq!(value.to_string(), "Europe/Sarajevo");
    assert!(value.is_present());
    assert!(value.is_regular());
    assert!(!value.is_exceptional());
}

#[test]
fn link_names_keep_their_identifier() {
    for name in ["Asia/Calcutta", "Asia/Saigon"] {
        let value = cast(name);
        assert_eq!(value.to_string(), name);
        assert!(value.is_regular());
    }
}

#[test]
fn blank_cast_multiple_times() {
    let value = cast(cast(None::<&str>));
    assert_eq!(value.to_string(), "");
    assert!(value.is_blank());
    assert!(!value.is_regular());
    assert!(!value.is_exceptional());
}

#[test]
fn exceptional_cast_multiple_times() {
    let value = cast(cast("{}"));
    assert_eq!(value.to_string(), "{}");
    assert!(!value.is_blank());
    assert!(value.is_exceptional());
}

#[test]
fn is_timezone_matches_regular() {
    assert!(is_timezone("UTC"));
    assert!(is_timezone("AFRICA_JOHANNESBURG"));
    assert!(!is_timezone(""));
    assert!(!is_timezone(EXCEPTIONAL));
}

#[test]
fn serde_uses_string_form() {
    let value = cast("Europe/Sarajevo");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#""Europe/Sarajevo""#);

    let back: TimezoneValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);

    let from_code: TimezoneValue = serde_json::from_str(r#""EUROPE_SARAJEVO""#).unwrap();
    assert_eq!(from_code, value);

    let from_null: TimezoneValue = serde_json::from_str("null").unwrap();
    assert!(from_null.is_blank());
}

#[test]
fn from_str_never_fails() {
    let value: TimezoneValue = "not a zone".parse().unwrap();
    assert!(value.is_exceptional());
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn all_codes_are_unique() {
    let codes: HashSet<_> = all().iter().map(TimezoneValue::code).collect();
    assert_eq!(codes.len(), all().len());
}

#[test]
fn all_identifiers_are_unique() {
    let identifiers: HashSet<_> = all().iter().map(TimezoneValue::identifier).collect();
    assert_eq!(identifiers.len(), all().len());
}

#[test]
fn every_code_casts_back_to_its_zone() {
    for zone in all() {
        let recovered = cast(zone.code().as_str());
        assert!(recovered.is_regular(), "{} did not recover", zone.code());
        assert_eq!(&recovered, zone);
    }
}

#[test]
fn catalog_is_memoized() {
    assert!(std::ptr::eq(all(), all()));
}

#[test]
fn gmt_codes_do_not_collide() {
    assert_ne!(code("GMT-5"), code("GMT+5"));
    assert_ne!(cast("ETC_GMT_M5"), cast("ETC_GMT_5"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_cast_is_idempotent(raw in "\\PC{0,24}") {
        let once = cast(raw.as_str());
        let twice = cast(&once);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(kinds(&twice), kinds(&once));
    }

    #[test]
    fn prop_exactly_one_kind(raw in "\\PC{0,24}") {
        let value = cast(raw.as_str());
        let (r, b, e) = kinds(&value);
        prop_assert_eq!([r, b, e].iter().filter(|k| **k).count(), 1);
    }

    #[test]
    fn prop_string_form_round_trips(raw in "\\PC{0,24}") {
        let value = cast(raw.as_str());
        prop_assert_eq!(cast(value.to_string().as_str()), value);
    }

    #[test]
    fn prop_whitespace_is_blank(raw in "[ \\t\\n]{0,8}") {
        prop_assert!(cast(raw.as_str()).is_blank());
    }
}
