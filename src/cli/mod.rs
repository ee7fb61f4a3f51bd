//! CLI interface for ticker-merge
//!
//! Provides subcommands for:
//! - `merge`: Combine the input files into one wide CSV (the default)
//! - `inspect`: Dry-run the ingest of a single file
//! - `config`: Show the resolved configuration

mod inspect;
mod merge;

pub use inspect::InspectArgs;
pub use merge::MergeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ticker-merge")]
#[command(about = "Merges per-ticker daily price CSVs into one date-keyed wide table")]
#[command(version)]
pub struct Cli {
    /// Bare invocation runs `merge` with the configured file list
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Combine the input files into one wide CSV
    Merge(MergeArgs),
    /// Dry-run the ingest of a single file
    Inspect(InspectArgs),
    /// Show the resolved configuration
    Config,
}
