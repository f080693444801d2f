//! # Timezone Codes
//!
//! A code is the storage-safe form of a timezone identifier: uppercase, with
//! no `/`, `-` or `+`. `"America/Port-au-Prince"` becomes
//! `"AMERICA_PORT_AU_PRINCE"`.
//!
//! The `GMT-` prefix is rewritten to `GMT_M` before the generic delimiter
//! substitution, so `Etc/GMT-5` and `Etc/GMT+5` keep distinct codes
//! (`ETC_GMT_M5` and `ETC_GMT_5`).

/// Derive the code for a timezone identifier.
///
/// Pure and deterministic. The empty identifier maps to the empty code.
pub fn code(identifier: &str) -> String {
    identifier
        .replace("GMT-", "GMT_M")
        .chars()
        .map(|c| match c {
            '/' | '-' | '+' => '_',
            other => other,
        })
        .collect::<String>()
        .to_uppercase()
}
