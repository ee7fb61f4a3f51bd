//! CSV serialization of the merged table

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::merge::MergedTable;

/// Write the table as CSV: a `Date` column plus one column per ticker
///
/// Missing prices become empty fields, so a gap stays visible in the output
/// instead of silently borrowing a neighbor's value. Dates are ISO `%Y-%m-%d`
/// and prices keep the precision they were read with.
pub fn write_table(path: &Path, table: &MergedTable) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    let mut header = Vec::with_capacity(table.tickers().len() + 1);
    header.push("Date".to_string());
    header.extend(table.tickers().iter().cloned());
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.date.format("%Y-%m-%d").to_string());
        for cell in &row.cells {
            record.push(match cell {
                Some(price) => price.to_string(),
                None => String::new(),
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = table.len(), "wrote merged table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{ColumnRule, PricePoint, PriceSeries, ResolvedColumn};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn series(ticker: &str, points: &[(u32, Option<rust_decimal::Decimal>)]) -> PriceSeries {
        PriceSeries {
            ticker: ticker.to_string(),
            column: ResolvedColumn {
                index: 1,
                rule: ColumnRule::Close,
            },
            points: points
                .iter()
                .map(|&(d, price)| PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    price,
                })
                .collect(),
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let mut table = MergedTable::seed(series("AAPL", &[(1, Some(dec!(100)))]));
        table.outer_join(series("MSFT", &[(2, Some(dec!(50)))]));
        table.sort_by_date();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("merged.csv");
        write_table(&out, &table).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "Date,AAPL,MSFT\n2024-01-01,100,\n2024-01-02,,50\n");
    }

    #[test]
    fn test_prices_round_trip_textually() {
        let table = MergedTable::seed(series("AAPL", &[(1, Some(dec!(185.64)))]));

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("merged.csv");
        write_table(&out, &table).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("2024-01-01,185.64"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let table = MergedTable::seed(series("AAPL", &[]));

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("merged.csv");
        write_table(&out, &table).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "Date,AAPL\n");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let table = MergedTable::seed(series("AAPL", &[(1, Some(dec!(1)))]));
        let result = write_table(Path::new("/nonexistent/dir/out.csv"), &table);
        assert!(result.is_err());
    }
}
