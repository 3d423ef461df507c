use crate::error::{ExpensegenError, Result};
use crate::models::{Candidate, RawRow, RawTable};
use crate::parser::parse_row;

impl RawTable {
    /// Data rows in document order, header excluded. Each call starts over.
    pub fn data_rows(&self) -> impl Iterator<Item = &RawRow> + '_ {
        self.rows.iter().skip(1)
    }
}

/// Parse every data row of `table`. The first bad row fails the whole table.
pub fn extract_candidates(table: &RawTable, date_format: &str) -> Result<Vec<Candidate>> {
    table
        .data_rows()
        .enumerate()
        .map(|(i, row)| {
            parse_row(row, date_format).map_err(|e| match e {
                ExpensegenError::Parse { reason, .. } => ExpensegenError::Parse { row: i + 1, reason },
                other => other,
            })
        })
        .collect()
}
