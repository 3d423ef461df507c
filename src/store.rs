use std::collections::HashSet;

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::error::{ExpensegenError, Result};
use crate::models::Transaction;

/// SQLite caps bound parameters per statement; stay well below the old 999 limit.
const LOOKUP_CHUNK: usize = 500;

#[derive(Debug, Default)]
pub struct IngestResult {
    pub inserted: usize,
    /// Checksums that were already present (in the store or earlier in the batch).
    pub skipped: Vec<String>,
}

/// Which of `checksums` are already stored.
pub fn existing_checksums(conn: &Connection, checksums: &[&str]) -> rusqlite::Result<HashSet<String>> {
    let mut found = HashSet::new();
    for chunk in checksums.chunks(LOOKUP_CHUNK) {
        let placeholders = vec!["?"; chunk.len()].join(", ");
        let mut stmt = conn.prepare(&format!(
            "SELECT checksum FROM expensegen WHERE checksum IN ({placeholders})"
        ))?;
        let rows = stmt.query_map(rusqlite::params_from_iter(chunk.iter()), |row| {
            row.get::<_, String>(0)
        })?;
        for checksum in rows {
            found.insert(checksum?);
        }
    }
    Ok(found)
}

fn insert_unseen(
    conn: &Connection,
    batch: &[Transaction],
    mut seen: HashSet<String>,
) -> Result<IngestResult> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO expensegen (date, description, amount, is_debit, closing_balance, checksum) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    let mut result = IngestResult::default();
    for txn in batch {
        if seen.contains(&txn.checksum) {
            debug!(checksum = %txn.checksum, "already ingested, skipping");
            result.skipped.push(txn.checksum.clone());
            continue;
        }
        stmt.execute(rusqlite::params![
            txn.date,
            txn.description,
            txn.amount,
            txn.is_debit,
            txn.closing_balance,
            txn.checksum,
        ])
        .map_err(|source| ExpensegenError::Insert {
            checksum: txn.checksum.clone(),
            source,
        })?;
        seen.insert(txn.checksum.clone());
        result.inserted += 1;
    }
    Ok(result)
}

/// Persist the transactions of `batch` whose checksum is not stored yet.
///
/// The lookup and every insert share one SQLite transaction: on any error the
/// batch is rolled back and the store is left as it was.
pub fn ingest(conn: &mut Connection, batch: &[Transaction]) -> Result<IngestResult> {
    if batch.is_empty() {
        return Ok(IngestResult::default());
    }

    let tx = conn.transaction()?;
    let checksums: Vec<&str> = batch.iter().map(|t| t.checksum.as_str()).collect();
    let existing = existing_checksums(&tx, &checksums).map_err(|e| {
        warn!(error = %e, "checksum lookup failed, aborting batch");
        ExpensegenError::ExistenceQuery(e)
    })?;
    debug!(batch = batch.len(), existing = existing.len(), "checksum lookup done");

    match insert_unseen(&tx, batch, existing) {
        Ok(result) => {
            tx.commit()?;
            info!(
                inserted = result.inserted,
                skipped = result.skipped.len(),
                "batch committed"
            );
            Ok(result)
        }
        Err(e) => {
            warn!(error = %e, "insert failed, rolling back batch");
            Err(e)
        }
    }
}

// ---------------------------------------------------------------------------
// Read side
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ListFilter {
    /// Inclusive lower bound, epoch milliseconds.
    pub from: Option<i64>,
    /// Exclusive upper bound, epoch milliseconds.
    pub until: Option<i64>,
    pub limit: Option<usize>,
}

/// Stored transactions, newest first. Same-day rows keep reverse insertion order.
pub fn load_transactions(conn: &Connection, filter: &ListFilter) -> Result<Vec<Transaction>> {
    let limit = filter.limit.map_or(-1, |l| l as i64);
    let mut stmt = conn.prepare(
        "SELECT date, description, amount, is_debit, closing_balance, checksum FROM expensegen \
         WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date < ?2) \
         ORDER BY date DESC, rowid DESC LIMIT ?3",
    )?;
    let rows = stmt
        .query_map(rusqlite::params![filter.from, filter.until, limit], |row| {
            Ok(Transaction {
                date: row.get(0)?,
                description: row.get(1)?,
                amount: row.get(2)?,
                is_debit: row.get(3)?,
                closing_balance: row.get(4)?,
                checksum: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub struct StoreSummary {
    pub count: i64,
    pub first_date: Option<i64>,
    pub last_date: Option<i64>,
    pub latest_balance: Option<f64>,
}

pub fn summary(conn: &Connection) -> Result<StoreSummary> {
    let (count, first_date, last_date): (i64, Option<i64>, Option<i64>) = conn.query_row(
        "SELECT count(*), min(date), max(date) FROM expensegen",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
    )?;
    let latest_balance = conn
        .query_row(
            "SELECT closing_balance FROM expensegen ORDER BY date DESC, rowid DESC LIMIT 1",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(StoreSummary {
        count,
        first_date,
        last_date,
        latest_balance,
    })
}
