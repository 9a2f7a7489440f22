//! Command-line front end for VideoScape-3D objects.
//!
//! # Commands
//!
//! - `vs3d info <FILE>` - Decode and summarize an object
//! - `vs3d dump <FILE>` - Decode and print the mesh as JSON
//! - `vs3d ffp <WORD>` - Convert one Fast Floating Point word
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (default `warn`, or `debug` with `--verbose`).

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mesh_vs3d::{DecodeOutcome, Decoded, load_vs3d};
use tracing_subscriber::EnvFilter;

/// Inspect VideoScape-3D object files.
#[derive(Parser)]
#[command(name = "vs3d")]
#[command(about = "Inspect VideoScape-3D object files", long_about = None)]
#[command(version)]
struct Cli {
    /// Log decoder progress (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an object and print a summary
    Info {
        /// Object file, text or binary
        #[arg(name = "FILE")]
        path: PathBuf,
    },

    /// Decode an object and print its mesh as JSON
    Dump {
        /// Object file, text or binary
        #[arg(name = "FILE")]
        path: PathBuf,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert a raw FFP word (hex with 0x prefix, or decimal)
    Ffp {
        /// The 32-bit word
        #[arg(name = "WORD", value_parser = parse_word)]
        word: u32,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { path } => with_object(&path, |decoded| {
            report::print_summary(&path, decoded);
            Ok(())
        }),
        Commands::Dump { path, pretty } => with_object(&path, |decoded| {
            let json = if pretty {
                serde_json::to_string_pretty(&decoded.mesh)
            } else {
                serde_json::to_string(&decoded.mesh)
            }
            .context("serializing mesh")?;
            println!("{json}");
            Ok(())
        }),
        Commands::Ffp { word } => {
            report::print_ffp(word);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Decode `path` and hand the object to `consume`.
///
/// A soft abort prints its diagnostic and exits with status 2 without
/// calling `consume`; hard failures propagate as errors.
fn with_object(path: &Path, consume: impl FnOnce(&Decoded) -> Result<()>) -> Result<ExitCode> {
    let outcome = load_vs3d(path).with_context(|| format!("decoding {}", path.display()))?;

    match outcome {
        DecodeOutcome::Success(decoded) => {
            consume(&decoded)?;
            Ok(ExitCode::SUCCESS)
        }
        DecodeOutcome::SoftAbort(diagnostic) => {
            report::print_soft_abort(path, &diagnostic);
            Ok(ExitCode::from(2))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_word(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid FFP word {s:?}: {e}"))
}
