//! # tzval CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tzval_cli::catalog::{run_code, run_list, CodeArgs, ListArgs};
use tzval_cli::inspect::{run_cast, run_check, CastArgs, CheckArgs};

/// Classify timezone identifiers, derive storage codes, and browse the zone
/// catalog.
#[derive(Parser, Debug)]
#[command(name = "tzval", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML file selecting the zone source (bundled or static).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cast inputs and show their kind, identifier, code and name.
    Cast(CastArgs),

    /// Print the storage code of identifiers.
    Code(CodeArgs),

    /// Print every zone in the catalog, sorted by display name.
    List(ListArgs),

    /// Exit with status 0 if the input is a known zone or code.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = tzval_cli::build_caster(cli.config.as_deref()).and_then(|caster| {
        let mut stdout = std::io::stdout().lock();
        match &cli.command {
            Commands::Cast(args) => run_cast(args, &caster, &mut stdout),
            Commands::Code(args) => run_code(args, &mut stdout),
            Commands::List(args) => run_list(args, &caster, &mut stdout),
            Commands::Check(args) => run_check(args, &caster),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
