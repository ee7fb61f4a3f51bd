//! Console preview of the merged table

use crate::merge::MergedTable;

const COLUMN_WIDTH: usize = 12;

/// Format the first `rows` data rows as an aligned console table
///
/// Shows exactly what landed in the output file: ISO dates, ticker columns
/// in introduction order, and visible blanks where a price is missing.
pub fn head(table: &MergedTable, rows: usize) -> String {
    let mut out = String::new();

    let mut header = String::new();
    pad(&mut header, "Date");
    for ticker in table.tickers() {
        pad(&mut header, ticker);
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for row in table.rows().iter().take(rows) {
        let mut line = String::new();
        pad(&mut line, &row.date.format("%Y-%m-%d").to_string());
        for cell in &row.cells {
            match cell {
                Some(price) => pad(&mut line, &price.to_string()),
                None => pad(&mut line, ""),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn pad(line: &mut String, field: &str) {
    line.push_str(field);
    for _ in field.len()..COLUMN_WIDTH {
        line.push(' ');
    }
    // Long fields still get a separator from the next column.
    if field.len() >= COLUMN_WIDTH {
        line.push(' ');
    }
}
