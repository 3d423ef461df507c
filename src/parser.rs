use chrono::{Duration, Local, NaiveDate, TimeZone};

use crate::error::{ExpensegenError, Result};
use crate::models::{Candidate, RawRow};

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

const COL_DATE: usize = 0;
const COL_DESCRIPTION: usize = 1;
const COL_DEBIT: usize = 4;
const COL_CREDIT: usize = 5;
const COL_BALANCE: usize = 6;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a statement amount such as `1,23,456.70`. Thousands separators are
/// stripped; anything else that is not a finite decimal is rejected.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.replace(',', "");
    let s = s.trim();
    if s.is_empty() {
        return Err(ExpensegenError::parse("empty amount"));
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ExpensegenError::parse(format!("not a decimal amount: {raw:?}"))),
    }
}

/// Epoch milliseconds of local midnight on `date`. When a DST jump skips
/// midnight the first valid instant of that hour is used instead.
pub fn local_midnight_millis(date: NaiveDate) -> Option<i64> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp_millis())
}

/// Parse a statement date into epoch milliseconds at local midnight, the
/// value existing `expensegen` stores hold.
pub fn parse_statement_date(raw: &str, format: &str) -> Result<i64> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, format).map_err(|e| {
        ExpensegenError::parse(format!("bad date {raw:?} for format {format:?}: {e}"))
    })?;
    local_midnight_millis(date).ok_or_else(|| ExpensegenError::parse(format!("bad date {raw:?}")))
}

fn cell<'a>(row: &'a RawRow, idx: usize) -> Result<&'a str> {
    row.cells.get(idx).map(String::as_str).ok_or_else(|| {
        ExpensegenError::parse(format!(
            "expected at least {} cells, found {}",
            COL_BALANCE + 1,
            row.cells.len()
        ))
    })
}

// ---------------------------------------------------------------------------
// parse_row
// ---------------------------------------------------------------------------

/// Turn one data row into a candidate transaction.
///
/// Direction comes from the debit column alone; the amount falls back to the
/// credit column when the debit column is blank.
pub fn parse_row(row: &RawRow, date_format: &str) -> Result<Candidate> {
    let balance_cell = cell(row, COL_BALANCE)?;
    let debit = cell(row, COL_DEBIT)?.trim();
    let credit = cell(row, COL_CREDIT)?.trim();

    let date = parse_statement_date(cell(row, COL_DATE)?, date_format)?;
    let description = cell(row, COL_DESCRIPTION)?.to_string();

    let is_debit = !debit.is_empty();
    let amount = parse_amount(if is_debit { debit } else { credit })?;
    if amount < 0.0 {
        return Err(ExpensegenError::parse(format!("negative amount: {amount}")));
    }
    let closing_balance = parse_amount(balance_cell)?;

    Ok(Candidate {
        date,
        description,
        amount,
        is_debit,
        closing_balance,
        original_row_text: row.original_row_text.clone(),
    })
}
