//! # List and Code Subcommands

use std::io::Write;

use anyhow::Result;
use clap::Args;

use tzval_core::{code, Caster, TimezoneLookup};

use crate::ValueReport;

/// Arguments for `tzval list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit one JSON object per line.
    #[arg(long)]
    pub json: bool,

    /// Print only codes.
    #[arg(long, conflicts_with = "json")]
    pub codes: bool,
}

/// Arguments for `tzval code`.
#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Identifiers to encode. They are not checked against the database.
    #[arg(required = true)]
    pub identifiers: Vec<String>,
}

pub fn run_list<L>(args: &ListArgs, caster: &Caster<L>, out: &mut impl Write) -> Result<u8>
where
    L: TimezoneLookup,
{
    let zones = caster.try_all()?;
    tracing::info!(zones = zones.len(), "listing catalog");
    for zone in zones {
        if args.codes {
            writeln!(out, "{}", zone.code())?;
        } else if args.json {
            writeln!(out, "{}", serde_json::to_string(&ValueReport::from(zone))?)?;
        } else {
            writeln!(
                out,
                "{:<40} {:<40} {}",
                zone.name().unwrap_or_default(),
                zone.identifier(),
                zone.code()
            )?;
        }
    }
    Ok(0)
}

pub fn run_code(args: &CodeArgs, out: &mut impl Write) -> Result<u8> {
    for identifier in &args.identifiers {
        writeln!(out, "{}", code(identifier))?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzval_core::StaticLookup;

    fn list(codes: bool, json: bool) -> String {
        let caster = Caster::new(StaticLookup::from_identifiers(["UTC", "Etc/GMT+5", "Africa/Abidjan"]));
        let mut out = Vec::new();
        run_list(&ListArgs { json, codes }, &caster, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_codes_sorted_by_display_name() {
        assert_eq!(list(true, false), "AFRICA_ABIDJAN\nETC_GMT_5\nUTC\n");
    }

    #[test]
    fn list_json_lines() {
        let out = list(false, true);
        let kinds: Vec<String> = out
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["kind"].to_string())
            .collect();
        assert_eq!(kinds, vec!["\"regular\""; 3]);
    }

    #[test]
    fn list_text_has_name_identifier_code() {
        let out = list(false, false);
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("Africa - Abidjan"));
        assert!(first.contains("Africa/Abidjan"));
        assert!(first.ends_with("AFRICA_ABIDJAN"));
    }

    #[test]
    fn code_prints_one_per_line() {
        let args = CodeArgs {
            identifiers: vec!["GMT-5".into(), "GMT+5".into()],
        };
        let mut out = Vec::new();
        run_code(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "GMT_M5\nGMT_5\n");
    }
}
