//! CLI Integration Tests
//!
//! Tests the binary directly using assert_cmd: argument handling, stdout
//! format and exit status mapping.

#![cfg(feature = "xlsx")]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{damaged_finance_workbook, finance_workbook};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sheet_inspect() -> Command {
    let mut cmd = Command::cargo_bin("sheet-inspect").unwrap();
    cmd.env_remove("SHEET_INSPECT_PATH")
        .env_remove("SHEET_INSPECT_ROWS")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    sheet_inspect()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheet-inspect"))
        .stdout(predicate::str::contains("EXIT STATUS"));
}

#[test]
fn test_cli_version() {
    sheet_inspect()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheet-inspect"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SUCCESSFUL RUNS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_prints_every_sheet() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Sheet names: [\"Income\", \"Expenses\", \"Assets\"]\n",
        ))
        .stdout(predicate::str::contains("--- Sheet: Income ---"))
        .stdout(predicate::str::contains("--- Sheet: Expenses ---"))
        .stdout(predicate::str::contains("--- Sheet: Assets ---"))
        .stdout(predicate::str::contains("Empty sheet"))
        .stdout(predicate::str::contains("Column types:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_path_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .env("SHEET_INSPECT_PATH", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Sheet: Income ---"));
}

#[test]
fn test_rows_and_sheet_flags() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .args(["--rows", "1", "--sheet", "Income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0  2026-01-05    1500    Salary"))
        .stdout(predicate::str::contains("2026-01-20").not())
        .stdout(predicate::str::contains("--- Sheet: Assets ---").not());
}

#[test]
fn test_rows_must_be_positive() {
    sheet_inspect()
        .args(["book.xlsx", "--rows", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    let output = sheet_inspect()
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sheet_names"][0], "Income");
    assert_eq!(value["sheets"][0]["columns"][0]["type"], "datetime");
    assert_eq!(value["sheets"][0]["rows"][0][1], 1500.0);
}

#[test]
fn test_yaml_format() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .args(["--format", "yaml", "--sheet", "Assets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sheet_names:"))
        .stdout(predicate::str::contains("name: Assets"));
}

#[test]
fn test_repeated_runs_identical() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    let first = sheet_inspect().arg(&path).output().unwrap();
    let second = sheet_inspect().arg(&path).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.xlsx");

    sheet_inspect()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: File not found at"))
        .stdout(predicate::str::contains("Sheet names").not());
}

#[test]
fn test_default_path_missing() {
    let dir = TempDir::new().unwrap();

    sheet_inspect()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Personal Finance 2026.xlsx"));
}

#[test]
fn test_read_error_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.xlsx");
    fs::write(&path, "not a workbook").unwrap();

    sheet_inspect()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading excel:"))
        .stdout(predicate::str::contains("Sheet names").not());
}

#[test]
fn test_read_error_strict() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.xlsx");
    fs::write(&path, "not a workbook").unwrap();

    sheet_inspect()
        .arg(&path)
        .arg("--strict")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error reading excel:"));
}

#[test]
fn test_unknown_sheet_reported() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .args(["--sheet", "Journal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sheet names:"))
        .stdout(predicate::str::contains(
            "Error reading excel: Worksheet named 'Journal' not found",
        ))
        .stdout(predicate::str::contains("--- Sheet:").not());
}

#[test]
fn test_damaged_sheet_keeps_earlier_output() {
    let dir = TempDir::new().unwrap();
    let path = damaged_finance_workbook(&dir);

    let output = sheet_inspect().arg(&path).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("Sheet names: [\"Income\", \"Expenses\", \"Assets\"]\n"));
    let income = stdout.find("--- Sheet: Income ---").expect("Income block");
    let error = stdout.find("Error reading excel:").expect("error line");
    assert!(income < error, "{}", stdout);
    assert!(stdout.contains("0  2026-01-05    1500    Salary"));
    assert!(!stdout.contains("--- Sheet: Expenses ---"));
    assert!(!stdout.contains("--- Sheet: Assets ---"));
    assert_eq!(stdout[error..].lines().count(), 1);
}

#[test]
fn test_damaged_sheet_json_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    let path = damaged_finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .args(["--format", "json", "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error reading excel:"))
        .stdout(predicate::str::contains("sheet_names").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let path = finance_workbook(&dir);

    sheet_inspect()
        .arg(&path)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sheet names:"))
        .stderr(predicate::str::contains("opened workbook"));
}
