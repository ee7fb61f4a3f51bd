//! CSV reading: one input file to one `PriceSeries`

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::column;
use super::types::{PricePoint, PriceSeries};
use super::IngestError;

/// Accepted `Date` formats, tried in order; slashed dates are month-first
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Derive the ticker symbol from a filename by stripping directories and the
/// extension: `data/AAPL.csv` names the AAPL series
pub fn ticker_from_path(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Read one input file into a [`PriceSeries`]
///
/// Any failure here fails the file, never the run: an unreadable path,
/// malformed CSV, a missing `Date` column, an unparseable date cell, or a
/// header no resolution rule matches. Within a healthy file, two anomalies
/// are tolerated row-by-row: a duplicate date keeps its first occurrence,
/// and an empty or non-numeric price cell becomes a missing price.
pub fn read_series(path: &Path) -> Result<PriceSeries, IngestError> {
    let ticker = ticker_from_path(path);
    let file = File::open(path).map_err(IngestError::FileAccess)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let date_index = headers
        .iter()
        .position(|h| h == "Date")
        .ok_or(IngestError::MissingDateColumn)?;
    let column = column::resolve(&headers, &ticker)?;

    let mut points = Vec::new();
    let mut seen_dates = HashSet::new();
    let mut duplicate_dates = 0usize;
    let mut bad_prices = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line()) as usize;

        let raw_date = record.get(date_index).unwrap_or("");
        let date = parse_date(raw_date).ok_or_else(|| IngestError::BadDate {
            value: raw_date.to_string(),
            line,
        })?;

        // First occurrence of a date wins; a repeat would multiply rows
        // through the outer join downstream.
        if !seen_dates.insert(date) {
            duplicate_dates += 1;
            continue;
        }

        let price = match record.get(column.index).filter(|cell| !cell.is_empty()) {
            Some(raw) => match Decimal::from_str(raw) {
                Ok(value) => Some(value),
                Err(_) => {
                    bad_prices += 1;
                    None
                }
            },
            None => None,
        };

        points.push(PricePoint { date, price });
    }

    if duplicate_dates > 0 {
        warn!(
            file = %path.display(),
            count = duplicate_dates,
            "dropped rows with duplicate dates, keeping the first of each"
        );
    }
    if bad_prices > 0 {
        warn!(
            file = %path.display(),
            count = bad_prices,
            "non-numeric price cells read as missing"
        );
    }
    debug!(
        file = %path.display(),
        ticker = %ticker,
        rows = points.len(),
        "read series"
    );

    Ok(PriceSeries {
        ticker,
        column,
        points,
    })
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
}
