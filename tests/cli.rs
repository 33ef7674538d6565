//! End-to-end CLI tests
//!
//! These run the compiled binary in offline/unconfigured mode only, so no
//! network access is needed.

use assert_cmd::Command;
use predicates::prelude::*;

fn wrench() -> Command {
    let mut cmd = Command::cargo_bin("wrench").unwrap();
    // Make sure ambient configuration never leaks into the tests.
    cmd.env_remove("SHEETS_API_KEY")
        .env_remove("SHEETS_SPREADSHEET_ID")
        .env_remove("SHEETS_SHEET_NAME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_mentions_subcommands() {
    wrench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn offline_catalog_lists_fallback_services() {
    wrench()
        .args(["catalog", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Brakes"))
        .stdout(predicate::str::contains("$199.99"))
        .stdout(predicate::str::contains("Turbo"))
        .stdout(predicate::str::contains("built-in fallback data"));
}

#[test]
fn catalog_category_filter() {
    wrench()
        .args(["catalog", "--offline", "--category", "brakes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance Brakes"))
        .stdout(predicate::str::contains("Turbo").not());
}

#[test]
fn catalog_rejects_unknown_category() {
    wrench()
        .args(["catalog", "--offline", "--category", "exhaust"])
        .assert()
        .failure();
}

#[test]
fn catalog_search_filter() {
    wrench()
        .args(["catalog", "--offline", "--search", "restoration"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Restoration Kit"))
        .stdout(predicate::str::contains("Lock Pick").not());
}

#[test]
fn unconfigured_catalog_still_works_on_fallback() {
    // No API key or spreadsheet id set: the command must still succeed.
    wrench()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard Brakes"))
        .stdout(predicate::str::contains("built-in fallback data"));
}

#[test]
fn quote_computes_total() {
    wrench()
        .args(["quote", "--offline", "standard-brakes=2", "turbo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items selected"))
        .stdout(predicate::str::contains("Standard Brakes x 2"))
        .stdout(predicate::str::contains("$1299.97"));
}

#[test]
fn quote_unknown_service_fails() {
    wrench()
        .args(["quote", "--offline", "exhaust=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service not found"));
}

#[test]
fn config_reports_missing_settings() {
    wrench()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("API key:        missing"))
        .stdout(predicate::str::contains("Sheet1 (default)"));
}
