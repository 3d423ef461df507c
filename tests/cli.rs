use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const STATEMENT: &str = r#"<html><body><table class="datatable"><tbody>
<tr><th>Date</th><th>Narration</th><th>Chq./Ref.No.</th><th>Value Dt</th><th>Withdrawal Amt.</th><th>Deposit Amt.</th><th>Closing Balance</th></tr>
<tr><td>01/04/2024</td><td>UPI-XYZ-STORE</td><td>0000412</td><td>01/04/24</td><td>1,234.50</td><td></td><td>45,678.90</td></tr>
<tr><td>02/04/2024</td><td>SALARY APR</td><td>0000413</td><td>02/04/24</td><td></td><td>80,000.00</td><td>1,25,678.90</td></tr>
</tbody></table></body></html>"#;

fn expensegen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expensegen").unwrap();
    cmd.env("HOME", home)
        .env_remove("DB_LOCATION")
        .env("NO_COLOR", "1")
        .current_dir(home);
    cmd
}

#[test]
fn import_twice_does_not_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("statement.html");
    std::fs::write(&page, STATEMENT).unwrap();
    let db = dir.path().join("store.db");

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("import")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows read, 2 imported, 0 skipped"));

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("import")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rows read, 0 imported, 2 skipped"));

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 2"))
        .stdout(predicate::str::contains("2024-04-01 to 2024-04-02"));
}

#[test]
fn db_location_env_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("statement.html");
    std::fs::write(&page, STATEMENT).unwrap();
    let db = dir.path().join("env.db");

    expensegen(dir.path())
        .env("DB_LOCATION", &db)
        .arg("import")
        .arg(&page)
        .assert()
        .success();
    assert!(db.exists());

    expensegen(dir.path())
        .env("DB_LOCATION", &db)
        .args(["list", "--from", "2024-04-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SALARY APR"))
        .stdout(predicate::str::contains("UPI-XYZ-STORE").not());
}

#[test]
fn init_persists_store_location() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("data").join("store.db");

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized store"));
    assert!(db.exists());
    assert!(dir.path().join(".config/expensegen/settings.json").exists());

    expensegen(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 0"));
}

#[test]
fn malformed_statement_fails_without_storing() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("statement.html");
    std::fs::write(&page, STATEMENT.replace("45,678.90", "abc")).unwrap();
    let db = dir.path().join("store.db");

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("import")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error in row 1"));

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 0"));
}

#[test]
fn missing_table_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("statement.html");
    std::fs::write(&page, "<html><body>Session expired</body></html>").unwrap();

    expensegen(dir.path())
        .arg("--db")
        .arg(dir.path().join("store.db"))
        .arg("import")
        .arg(&page)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No table matching"));
}

#[test]
fn backup_copies_store() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("statement.html");
    std::fs::write(&page, STATEMENT).unwrap();
    let db = dir.path().join("store.db");
    let out = dir.path().join("copy.db");

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("import")
        .arg(&page)
        .assert()
        .success();

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("backup")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup saved to"));
    assert!(out.exists());
}

#[test]
fn list_does_not_create_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("typo.db");

    expensegen(dir.path())
        .arg("--db")
        .arg(&db)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database found"));
    assert!(!db.exists());
}
