//! Rendering the merged table
//!
//! The CSV writer is the product; the preview is a console courtesy showing
//! the first few rows of what was written.

mod preview;
mod writer;

pub use preview::head;
pub use writer::write_table;
