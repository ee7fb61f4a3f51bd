//! Price column resolution
//!
//! Input files do not share one schema. Most carry the closing price under a
//! `Close` header, while some exports label the column with the ticker symbol
//! itself. Resolution tries a fixed rule list in priority order and fails the
//! file when nothing matches; header lookups are exact, case included.

use csv::StringRecord;

use super::IngestError;

/// The rule that located the price column, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// A column literally named `Close`, written out under the ticker symbol
    Close,

    /// A column already named after the ticker
    Ticker,

    /// The literal `MSFT` header in Microsoft exports
    Msft,
}

/// Outcome of resolving which header column holds the price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Index of the price column in the header row
    pub index: usize,

    /// Rule that matched
    pub rule: ColumnRule,
}

/// Find the price column for `ticker` in a header row
pub fn resolve(headers: &StringRecord, ticker: &str) -> Result<ResolvedColumn, IngestError> {
    if let Some(index) = position(headers, "Close") {
        return Ok(ResolvedColumn {
            index,
            rule: ColumnRule::Close,
        });
    }

    if let Some(index) = position(headers, ticker) {
        return Ok(ResolvedColumn {
            index,
            rule: ColumnRule::Ticker,
        });
    }

    // Some Microsoft exports label the price column `MSFT` rather than
    // `Close`. Only the MSFT file itself may claim that header; in any other
    // file an `MSFT` column is a different ticker's data.
    if ticker == "MSFT" {
        if let Some(index) = position(headers, "MSFT") {
            return Ok(ResolvedColumn {
                index,
                rule: ColumnRule::Msft,
            });
        }
    }

    Err(IngestError::NoPriceColumn {
        ticker: ticker.to_string(),
    })
}

fn position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}
