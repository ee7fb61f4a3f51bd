//! Merge command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::merge::Merger;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    /// Input files in merge order; empty means the configured list
    pub files: Vec<PathBuf>,

    /// Output file; defaults to the configured path
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl MergeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let files = if self.files.is_empty() {
            config.input.files.clone()
        } else {
            self.files.clone()
        };
        let out = self.out.as_deref().unwrap_or(&config.output.path);

        let report = Merger::run(&files);

        match &report.table {
            Some(table) => {
                output::write_table(out, table)?;
                println!("Successfully created {}", out.display());
                print!("{}", output::head(table, config.output.preview_rows));
            }
            None => {
                // Nothing merged is a reported outcome, not a failure.
                println!("No data was merged.");
            }
        }

        Ok(())
    }
}
