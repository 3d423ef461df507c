use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::parse_day_opt;
use crate::db::open_store;
use crate::error::{ExpensegenError, Result};
use crate::fmt::{amount, date};
use crate::models::Transaction;
use crate::parser::local_midnight_millis;
use crate::settings::{load_settings, resolve_db_path};
use crate::store::{load_transactions, ListFilter};

pub fn format_transactions(rows: &[Transaction]) -> String {
    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Withdrawal", "Deposit", "Balance"]);
    for t in rows {
        let (withdrawal, deposit) = if t.is_debit {
            (amount(t.amount).red().to_string(), String::new())
        } else {
            (String::new(), amount(t.amount).green().to_string())
        };
        table.add_row(vec![
            Cell::new(date(t.date)),
            Cell::new(t.description.trim()),
            Cell::new(withdrawal),
            Cell::new(deposit),
            Cell::new(amount(t.closing_balance)),
        ]);
    }
    table.to_string()
}

pub fn run(db: Option<PathBuf>, limit: usize, from: Option<String>, to: Option<String>) -> Result<()> {
    let db_path = resolve_db_path(db, &load_settings());
    if !db_path.exists() {
        return Err(ExpensegenError::Settings(format!(
            "No database found at {}\nRun `expensegen init` to set up.",
            db_path.display()
        )));
    }
    let conn = open_store(&db_path)?;
    let filter = ListFilter {
        from: parse_day_opt(from.as_deref())?.and_then(local_midnight_millis),
        until: parse_day_opt(to.as_deref())?
            .and_then(|d| d.succ_opt())
            .and_then(local_midnight_millis),
        limit: Some(limit),
    };
    let rows = load_transactions(&conn, &filter)?;
    println!("{}", format_transactions(&rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_transactions_empty() {
        assert_eq!(format_transactions(&[]), "No transactions found.");
    }

    #[test]
    fn test_format_transactions_columns() {
        colored::control::set_override(false);
        let rows = vec![Transaction {
            date: Local.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap().timestamp_millis(),
            description: " UPI-XYZ-STORE ".to_string(),
            amount: 1234.5,
            is_debit: true,
            closing_balance: 45678.9,
            checksum: "00".to_string(),
        }];
        let out = format_transactions(&rows);
        assert!(out.contains("2024-04-01"));
        assert!(out.contains("UPI-XYZ-STORE"));
        assert!(out.contains("1,234.50"));
        assert!(out.contains("45,678.90"));
    }

    #[test]
    fn test_run_refuses_missing_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.db");
        let err = run(Some(path.clone()), 20, None, None).unwrap_err();
        assert!(matches!(err, ExpensegenError::Settings(_)));
        assert!(!path.exists());
    }
}
