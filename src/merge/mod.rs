//! Outer-join accumulation of per-ticker series
//!
//! [`Merger`] drives the run file by file; [`MergedTable`] is the wide table
//! it builds, one `Date` row per distinct date and one column per ticker.

mod merger;
mod table;

pub use merger::{MergeReport, Merger, SkippedFile};
pub use table::{MergedTable, Row};
