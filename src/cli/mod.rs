pub mod backup;
pub mod import;
pub mod init;
pub mod list;
pub mod status;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{ExpensegenError, Result};

pub(crate) fn parse_day_opt(day: Option<&str>) -> Result<Option<NaiveDate>> {
    day.map(|d| {
        NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| ExpensegenError::Settings(format!("expected YYYY-MM-DD, got {d:?}")))
    })
    .transpose()
}

#[derive(Parser)]
#[command(name = "expensegen", about = "Ingest bank statement tables into a local store, without duplicates.")]
pub struct Cli {
    /// Path to the SQLite store (default: from settings)
    #[arg(long, env = "DB_LOCATION", global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a store location and create the schema.
    Init,
    /// Import the transaction table from a saved statement page.
    Import {
        /// Path to the saved HTML page
        file: PathBuf,
        /// CSS selector for the transaction table
        #[arg(long)]
        selector: Option<String>,
        /// chrono format of the date column (e.g. %d/%m/%Y)
        #[arg(long = "date-format")]
        date_format: Option<String>,
    },
    /// Show store location and summary statistics.
    Status,
    /// List stored transactions, newest first.
    List {
        /// Maximum number of rows
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Earliest date, inclusive: YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// Latest date, inclusive: YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
    },
    /// Back up the store.
    Backup {
        /// Output path (default: <store dir>/backups/expensegen-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
