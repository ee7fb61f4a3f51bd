//! ticker-merge: merges per-ticker daily price CSVs into one wide table
//!
//! This library provides the core components for:
//! - Per-file CSV ingest with price-column resolution
//! - Date-keyed full outer joins accumulating a wide table
//! - Skip-and-continue handling of unusable input files
//! - Sorted CSV output with explicit empty cells for missing prices
//! - CLI, configuration, and logging around the merge run

pub mod cli;
pub mod config;
pub mod ingest;
pub mod merge;
pub mod output;
pub mod telemetry;
