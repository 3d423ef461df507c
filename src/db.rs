use std::path::Path;

use rusqlite::Connection;

use crate::error::{ExpensegenError, Result};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS expensegen (
    date INTEGER,
    description TEXT,
    amount FLOAT,
    is_debit INTEGER,
    closing_balance FLOAT,
    checksum TEXT
);

CREATE INDEX IF NOT EXISTS expensegen_date_ind ON expensegen(date);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path).map_err(ExpensegenError::Schema)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .map_err(ExpensegenError::Schema)?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA).map_err(ExpensegenError::Schema)
}

/// Open the store at `db_path`, creating the schema if needed.
pub fn open_store(db_path: &Path) -> Result<Connection> {
    let conn = get_connection(db_path)?;
    init_db(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_store(&dir.path().join("test.db")).unwrap();
        (dir, conn)
    }

    fn count_objects(conn: &Connection, kind: &str, name: &str) -> i64 {
        conn.query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |r| r.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_init_db_creates_table_and_index() {
        let (_dir, conn) = test_db();
        assert_eq!(count_objects(&conn, "table", "expensegen"), 1);
        assert_eq!(count_objects(&conn, "index", "expensegen_date_ind"), 1);
    }

    #[test]
    fn test_init_db_columns() {
        let (_dir, conn) = test_db();
        let cols: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('expensegen') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(
            cols,
            ["date", "description", "amount", "is_debit", "closing_balance", "checksum"]
        );
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (dir, conn) = test_db();
        init_db(&conn).unwrap();
        drop(conn);
        let conn = open_store(&dir.path().join("test.db")).unwrap();
        assert_eq!(count_objects(&conn, "table", "expensegen"), 1);
        assert_eq!(count_objects(&conn, "index", "expensegen_date_ind"), 1);
    }

    #[test]
    fn test_open_store_unwritable_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("test.db");
        assert!(matches!(open_store(&path), Err(ExpensegenError::Schema(_))));
    }
}
