//! Parsed input types

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::column::ResolvedColumn;

/// A single (date, price) observation from one input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    /// Calendar date of the observation
    pub date: NaiveDate,

    /// Closing price; `None` for an empty or non-numeric cell
    pub price: Option<Decimal>,
}

/// Everything one input file contributes to the merge
#[derive(Debug, Clone)]
pub struct PriceSeries {
    /// Ticker symbol derived from the filename stem (e.g. "AAPL")
    pub ticker: String,

    /// Which header column supplied the prices, and by which rule
    pub column: ResolvedColumn,

    /// Observations in file order, one per surviving data row
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the file had a valid header but no data rows
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How many observations carry no price
    pub fn missing_prices(&self) -> usize {
        self.points.iter().filter(|p| p.price.is_none()).count()
    }

    /// Earliest and latest observation dates, if any rows exist
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.points.iter().map(|p| p.date).min()?;
        let last = self.points.iter().map(|p| p.date).max()?;
        Some((first, last))
    }
}
