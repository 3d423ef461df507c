use std::path::PathBuf;

use crate::db::open_store;
use crate::error::Result;
use crate::settings::{load_settings, resolve_db_path, save_settings};

pub fn run(db: Option<PathBuf>) -> Result<()> {
    let mut settings = load_settings();
    let db_path = resolve_db_path(db, &settings);
    let db_path = if db_path.is_absolute() {
        db_path
    } else {
        std::env::current_dir()?.join(db_path)
    };

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    open_store(&db_path)?;

    settings.db_path = db_path.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Initialized store at {}", db_path.display());
    Ok(())
}
