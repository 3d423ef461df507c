use rusqlite::Connection;
use tracing::info;

use crate::checksum::assign_checksums;
use crate::error::Result;
use crate::extractor::extract_candidates;
use crate::models::RawTable;
use crate::session::PageSession;
use crate::store::{ingest, IngestResult};

#[derive(Debug)]
pub struct ImportResult {
    pub extracted: usize,
    pub inserted: usize,
    pub skipped: Vec<String>,
}

/// Extract, checksum and store one statement table.
pub fn import_table(conn: &mut Connection, table: &RawTable, date_format: &str) -> Result<ImportResult> {
    let candidates = extract_candidates(table, date_format)?;
    info!(rows = candidates.len(), "extracted candidates");
    let batch = assign_checksums(candidates);
    let IngestResult { inserted, skipped } = ingest(conn, &batch)?;
    Ok(ImportResult {
        extracted: batch.len(),
        inserted,
        skipped,
    })
}

pub fn import_from_session(
    conn: &mut Connection,
    session: &mut dyn PageSession,
    date_format: &str,
) -> Result<ImportResult> {
    let table = session.extract_raw_table()?;
    import_table(conn, &table, date_format)
}
