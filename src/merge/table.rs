//! The accumulating wide table

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ingest::PriceSeries;

/// One output row: a date and one price cell per merged ticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Calendar date, the join key
    pub date: NaiveDate,

    /// One cell per ticker in column order; `None` renders as an empty field
    pub cells: Vec<Option<Decimal>>,
}

/// Date-keyed wide table built by outer-joining one series at a time
///
/// Ticker columns accumulate in the order their series arrive and are never
/// dropped. Rows hold their insertion order until [`MergedTable::sort_by_date`]
/// runs; the sort is stable, so rows never swap on equal keys.
#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    tickers: Vec<String>,
    rows: Vec<Row>,
    index: HashMap<NaiveDate, usize>,
}

impl MergedTable {
    /// Start a table from the first successfully ingested series
    pub fn seed(series: PriceSeries) -> Self {
        let mut table = Self::default();
        table.outer_join(series);
        table
    }

    /// Full outer join on date
    ///
    /// The result covers the union of the table's dates and the series'
    /// dates. A date only one side knows gets `None` cells for the other;
    /// every existing row widens by one cell whether or not the series has
    /// that date.
    pub fn outer_join(&mut self, series: PriceSeries) {
        let new_column = self.tickers.len();
        self.tickers.push(series.ticker);

        for row in &mut self.rows {
            row.cells.push(None);
        }

        for point in series.points {
            match self.index.get(&point.date) {
                Some(&at) => self.rows[at].cells[new_column] = point.price,
                None => {
                    let mut cells = vec![None; new_column];
                    cells.push(point.price);
                    self.index.insert(point.date, self.rows.len());
                    self.rows.push(Row {
                        date: point.date,
                        cells,
                    });
                }
            }
        }
    }

    /// Sort rows by date, ascending
    pub fn sort_by_date(&mut self) {
        self.rows.sort_by_key(|row| row.date);
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(at, row)| (row.date, at))
            .collect();
    }

    /// Ticker columns in the order they were introduced
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Rows in their current order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of date rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Price in the cell for a (date, ticker) pair; `None` both when the
    /// coordinates do not exist and when the cell is an explicit gap
    pub fn get(&self, date: NaiveDate, ticker: &str) -> Option<Decimal> {
        let at = *self.index.get(&date)?;
        let column = self.tickers.iter().position(|t| t == ticker)?;
        self.rows[at].cells[column]
    }
}
