//! Integration tests for the linemean binary
//!
//! The binary takes no arguments; behaviour is driven by environment variables.

use assert_cmd::Command;
use predicates::prelude::*;

fn linemean() -> Command {
    let mut cmd = Command::cargo_bin("linemean").unwrap();
    cmd.env_remove("LINEMEAN_LOG_LEVEL").env_remove("LINEMEAN_FORMAT");
    cmd
}

#[test]
fn test_prints_average_of_builtin_text() {
    linemean()
        .assert()
        .success()
        .stdout("Average line length: 28.26086956521739\n");
}

#[test]
fn test_json_format() {
    let output = linemean()
        .env("LINEMEAN_FORMAT", "json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["line_count"], 46);
    assert_eq!(value["total_chars"], 1300);
    assert!((value["average"].as_f64().unwrap() - 1300.0 / 46.0).abs() < 1e-12);
}

#[test]
fn test_invalid_format_fails() {
    linemean()
        .env("LINEMEAN_FORMAT", "yaml")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid output format: yaml"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    linemean()
        .env("LINEMEAN_LOG_LEVEL", "debug")
        .assert()
        .success()
        .stdout("Average line length: 28.26086956521739\n")
        .stderr(predicate::str::contains("Measured built-in text"));
}

#[test]
fn test_default_level_is_quiet() {
    linemean()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
