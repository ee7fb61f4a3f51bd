//! Inspect command implementation

use clap::Args;
use std::path::PathBuf;

use crate::ingest::{self, ColumnRule};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File to inspect
    pub file: PathBuf,
}

impl InspectArgs {
    /// Dry-run the ingest of a single file and describe what a merge would
    /// see, without touching any output
    pub fn execute(&self) -> anyhow::Result<()> {
        let series = ingest::read_series(&self.file)?;

        let column = match series.column.rule {
            ColumnRule::Close => format!("`Close` (written as {})", series.ticker),
            ColumnRule::Ticker => format!("`{}`", series.ticker),
            ColumnRule::Msft => "`MSFT`".to_string(),
        };

        println!("File:           {}", self.file.display());
        println!("Ticker:         {}", series.ticker);
        println!("Price column:   {}", column);
        println!("Rows:           {}", series.len());
        match series.date_range() {
            Some((first, last)) => println!("Dates:          {} to {}", first, last),
            None => println!("Dates:          (no data rows)"),
        }
        println!("Missing prices: {}", series.missing_prices());

        Ok(())
    }
}
