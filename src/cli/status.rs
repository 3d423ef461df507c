use std::path::PathBuf;

use crate::db::open_store;
use crate::error::Result;
use crate::fmt::{amount, date, format_bytes};
use crate::settings::{load_settings, resolve_db_path};
use crate::store::summary;

pub fn run(db: Option<PathBuf>) -> Result<()> {
    let settings = load_settings();
    let db_path = resolve_db_path(db, &settings);

    println!("Database:     {}", db_path.display());
    println!("Date format:  {}", settings.date_format);
    println!("Table:        {}", settings.table_selector);

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `expensegen init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&db_path)?.len();
    println!("DB size:      {}", format_bytes(size));

    let conn = open_store(&db_path)?;
    let s = summary(&conn)?;
    println!();
    println!("Transactions: {}", s.count);
    if let (Some(first), Some(last)) = (s.first_date, s.last_date) {
        println!("Range:        {} to {}", date(first), date(last));
    }
    if let Some(balance) = s.latest_balance {
        println!("Balance:      {}", amount(balance));
    }
    Ok(())
}
