mod errors;
mod mover;
mod parser;
mod runner;
mod store;
mod writer;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Print per-file results to standard output (human-readable)
    Stdout,
    /// Write one self-contained HTML report per validated file
    Html,
    /// Write a single JSON summary for the whole batch
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "parcelguard",
    version,
    about = "ParcelGuard CLI - batch validation of parcel CSV extracts",
    long_about = "ParcelGuard fetches the most recently modified parcel CSV files from an \
                  object-storage bucket, runs each one through a fixed battery of data-quality \
                  checks (schema presence, coordinate range, null handling, duplicates, date \
                  format), and writes one report per file.\n\n\
                  Example usage:\n  \
                  parcelguard --config parcels.toml --output html"
)]
pub struct Args {
    /// Path to the TOML configuration file (storage bucket, prefix, credentials)
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Output format for validation reports
    #[arg(short, long, value_enum, default_value = "html")]
    output: OutputFormat,

    /// Enable debug-level logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match runner::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
