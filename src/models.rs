/// One rendered `<tr>` of the statement table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub cells: Vec<String>,
    /// Full text content of the row, trimmed at both ends. Source of the checksum.
    pub original_row_text: String,
}

impl RawRow {
    pub fn new<S: Into<String>>(cells: Vec<S>, original_row_text: impl Into<String>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            original_row_text: original_row_text.into(),
        }
    }
}

/// Table as handed over by the page session. The first row is the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

/// Intermediate representation from the row parser before checksumming.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub date: i64,
    pub description: String,
    pub amount: f64,
    pub is_debit: bool,
    pub closing_balance: f64,
    pub original_row_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Epoch milliseconds, midnight UTC of the statement date.
    pub date: i64,
    pub description: String,
    pub amount: f64,
    pub is_debit: bool,
    pub closing_balance: f64,
    pub checksum: String,
}
