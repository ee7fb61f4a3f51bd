//! Per-file CSV ingest
//!
//! Turns one input file into a strongly-typed [`PriceSeries`] through an
//! explicit column-resolution step. Anything dynamically shaped stops here;
//! downstream code only ever sees dates and optional prices.

mod column;
mod reader;
mod types;

pub use column::{ColumnRule, ResolvedColumn};
pub use reader::{read_series, ticker_from_path};
pub use types::{PricePoint, PriceSeries};

use std::io;
use thiserror::Error;

/// Why a single input file was skipped
///
/// Every variant fails the file, never the run; the merge loop records the
/// error and moves on to the next file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file is missing or unreadable
    #[error("cannot open file: {0}")]
    FileAccess(#[source] io::Error),

    /// The file is not well-formed CSV
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row has no `Date` column
    #[error("no `Date` column in header")]
    MissingDateColumn,

    /// A `Date` cell that does not parse as a calendar date
    #[error("unparseable date `{value}` on line {line}")]
    BadDate { value: String, line: usize },

    /// No column-resolution rule matched the header
    #[error("could not find `Close` or `{ticker}` column")]
    NoPriceColumn { ticker: String },
}
