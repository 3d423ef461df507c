use std::path::PathBuf;

use rusqlite::backup::Backup;

use crate::db::get_connection;
use crate::error::{ExpensegenError, Result};
use crate::fmt::format_bytes;
use crate::settings::{load_settings, resolve_db_path};

pub fn run(db: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let db_path = resolve_db_path(db, &load_settings());
    if !db_path.exists() {
        return Err(ExpensegenError::Settings(format!(
            "No database found at {}",
            db_path.display()
        )));
    }
    let conn = get_connection(&db_path)?;

    let dest_path = match output {
        Some(p) => p,
        None => {
            let backups_dir = db_path
                .parent()
                .map(|p| p.join("backups"))
                .unwrap_or_else(|| PathBuf::from("backups"));
            std::fs::create_dir_all(&backups_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            backups_dir.join(format!("expensegen-{stamp}.db"))
        }
    };

    let mut dest_conn = rusqlite::Connection::open(&dest_path)?;
    let backup = Backup::new(&conn, &mut dest_conn)?;
    backup.run_to_completion(100, std::time::Duration::from_millis(10), None)?;

    let size = std::fs::metadata(&dest_path)?.len();
    println!("Backup saved to {}", dest_path.display());
    println!("Size: {}", format_bytes(size));
    Ok(())
}
