use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::db::open_store;
use crate::error::Result;
use crate::importer::import_from_session;
use crate::session::HtmlSession;
use crate::settings::{load_settings, resolve_db_path};

pub fn run(
    db: Option<PathBuf>,
    file: &Path,
    selector: Option<String>,
    date_format: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let db_path = resolve_db_path(db, &settings);
    let selector = selector.unwrap_or(settings.table_selector);
    let date_format = date_format.unwrap_or(settings.date_format);

    let mut session = HtmlSession::from_file(file, &selector)?;
    let mut conn = open_store(&db_path)?;
    let result = import_from_session(&mut conn, &mut session, &date_format)?;

    println!(
        "{} rows read, {} imported, {} skipped (already stored)",
        result.extracted,
        result.inserted.to_string().green(),
        result.skipped.len().to_string().yellow()
    );
    Ok(())
}
