use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ExpensegenError, Result};
use crate::parser::DEFAULT_DATE_FORMAT;
use crate::session::DEFAULT_TABLE_SELECTOR;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_db_path_string")]
    pub db_path: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_table_selector")]
    pub table_selector: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_table_selector() -> String {
    DEFAULT_TABLE_SELECTOR.to_string()
}

fn default_db_path_string() -> String {
    default_db_path().to_string_lossy().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path_string(),
            date_format: default_date_format(),
            table_selector: default_table_selector(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("expensegen")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("expensegen")
        .join("expensegen.db")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ExpensegenError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Store location: explicit flag (or `DB_LOCATION`) first, then settings.
pub fn resolve_db_path(explicit: Option<PathBuf>, settings: &Settings) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(expand_home(&settings.db_path)))
}

pub fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}
