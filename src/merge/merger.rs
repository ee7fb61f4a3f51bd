//! The merge run: folding input files into one table

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::table::MergedTable;
use crate::ingest::{self, IngestError};

/// One input file the run skipped, and why
#[derive(Debug)]
pub struct SkippedFile {
    /// File that was skipped
    pub path: PathBuf,

    /// The per-file failure
    pub error: IngestError,
}

/// Outcome of a merge run
#[derive(Debug)]
pub struct MergeReport {
    /// The combined table, sorted by date; `None` when every file failed or
    /// the input list was empty
    pub table: Option<MergedTable>,

    /// Skipped files with their causes, in input order
    pub skipped: Vec<SkippedFile>,
}

impl MergeReport {
    /// True when at least one file contributed data
    pub fn merged_any(&self) -> bool {
        self.table.is_some()
    }
}

/// Accumulates per-ticker series into one wide table, skipping bad files
///
/// Input order is an observable contract: the first file that parses seeds
/// the table and owns the first ticker column, and every later file joins
/// onto the accumulated result. A failing file leaves the accumulator
/// untouched and never aborts the run.
#[derive(Debug, Default)]
pub struct Merger {
    table: Option<MergedTable>,
    skipped: Vec<SkippedFile>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one file and fold it into the table
    pub fn add_file(&mut self, path: &Path) {
        match ingest::read_series(path) {
            Ok(series) => {
                info!(
                    file = %path.display(),
                    ticker = %series.ticker,
                    rows = series.len(),
                    "merging"
                );
                self.table = Some(match self.table.take() {
                    None => MergedTable::seed(series),
                    Some(mut table) => {
                        table.outer_join(series);
                        table
                    }
                });
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping file");
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    /// Sort the accumulated rows by date and hand back the result
    pub fn finish(mut self) -> MergeReport {
        if let Some(table) = self.table.as_mut() {
            table.sort_by_date();
        }
        MergeReport {
            table: self.table,
            skipped: self.skipped,
        }
    }

    /// Merge a whole file list in order
    pub fn run(files: &[PathBuf]) -> MergeReport {
        let mut merger = Self::new();
        for path in files {
            merger.add_file(path);
        }
        merger.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_run_merges_good_files() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write_csv(&dir, "AAPL.csv", "Date,Close\n2024-01-01,100\n2024-01-02,101\n"),
            write_csv(&dir, "MSFT.csv", "Date,MSFT\n2024-01-02,50\n2024-01-03,51\n"),
        ];

        let report = Merger::run(&files);
        assert!(report.merged_any());
        assert!(report.skipped.is_empty());

        let table = report.table.unwrap();
        assert_eq!(table.tickers(), ["AAPL", "MSFT"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(date(2), "MSFT"), Some(dec!(50)));
    }

    #[test]
    fn test_bad_file_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write_csv(&dir, "AAPL.csv", "Date,Close\n2024-01-01,100\n"),
            write_csv(&dir, "ABB.csv", "Date,Open\n2024-01-01,30\n"),
            write_csv(&dir, "NVDA.csv", "Date,Close\n2024-01-02,500\n"),
        ];

        let report = Merger::run(&files);
        let table = report.table.unwrap();
        assert_eq!(table.tickers(), ["AAPL", "NVDA"]);
        assert_eq!(table.len(), 2);

        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("ABB.csv"));
        assert!(matches!(
            report.skipped[0].error,
            IngestError::NoPriceColumn { .. }
        ));
    }

    #[test]
    fn test_seed_is_first_file_that_parses() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            dir.path().join("GONE.csv"),
            write_csv(&dir, "MSFT.csv", "Date,MSFT\n2024-01-01,50\n"),
            write_csv(&dir, "AAPL.csv", "Date,Close\n2024-01-01,100\n"),
        ];

        let report = Merger::run(&files);
        let table = report.table.unwrap();
        assert_eq!(table.tickers(), ["MSFT", "AAPL"]);
    }

    #[test]
    fn test_all_files_failing_leaves_no_table() {
        let dir = TempDir::new().unwrap();
        let files = vec![dir.path().join("A.csv"), dir.path().join("B.csv")];

        let report = Merger::run(&files);
        assert!(!report.merged_any());
        assert!(report.table.is_none());
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn test_empty_input_list_leaves_no_table() {
        let report = Merger::run(&[]);
        assert!(!report.merged_any());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_finish_sorts_rows_by_date() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write_csv(&dir, "AAPL.csv", "Date,Close\n2024-01-09,1\n2024-01-02,2\n"),
            write_csv(&dir, "MSFT.csv", "Date,MSFT\n2024-01-05,3\n"),
        ];

        let report = Merger::run(&files);
        let table = report.table.unwrap();
        let dates: Vec<_> = table.rows().iter().map(|r| r.date).collect();
        assert_eq!(dates, [date(2), date(5), date(9)]);
    }

    #[test]
    fn test_add_file_incremental() {
        let dir = TempDir::new().unwrap();
        let aapl = write_csv(&dir, "AAPL.csv", "Date,Close\n2024-01-01,100\n");

        let mut merger = Merger::new();
        merger.add_file(&aapl);
        merger.add_file(&dir.path().join("missing.csv"));

        let report = merger.finish();
        assert!(report.merged_any());
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0].error,
            IngestError::FileAccess(_)
        ));
    }
}
