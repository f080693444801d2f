//! # Cast and Check Subcommands
//!
//! `tzval cast` prints how each input classifies; `tzval check` answers
//! with an exit status only.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use tzval_core::{Caster, TimezoneLookup};

use crate::ValueReport;

/// Arguments for `tzval cast`.
#[derive(Args, Debug)]
pub struct CastArgs {
    /// Identifiers, codes, or arbitrary text. An empty string casts to blank.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Emit one JSON object per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `tzval check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifier or code to check.
    pub input: String,

    /// Suppress the explanation on stderr.
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run_cast<L>(args: &CastArgs, caster: &Caster<L>, out: &mut impl Write) -> Result<u8>
where
    L: TimezoneLookup,
{
    for input in &args.inputs {
        let value = caster.try_cast(input.as_str())?;
        let report = ValueReport::from(&value);
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            let detail = report.name.as_deref().or(report.reason.as_deref()).unwrap_or_default();
            writeln!(
                out,
                "{:<12} {:<32} {:<32} {detail}",
                report.kind, report.identifier, report.code
            )?;
        }
    }
    Ok(0)
}

pub fn run_check<L>(args: &CheckArgs, caster: &Caster<L>) -> Result<u8>
where
    L: TimezoneLookup,
{
    let value = caster.try_cast(args.input.as_str())?;
    if value.is_regular() {
        tracing::info!(input = %args.input, identifier = value.identifier(), "known timezone");
        return Ok(0);
    }
    if !args.quiet {
        let reason = value.reason().unwrap_or("is blank");
        eprintln!("{:?} {reason}", args.input);
    }
    Ok(1)
}
