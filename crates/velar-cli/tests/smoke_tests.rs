//! Smoke tests for the velador CLI
//!
//! These tests verify basic CLI functionality works correctly.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the velador binary
fn velador() -> Command {
    Command::cargo_bin("velador").expect("velador binary should exist")
}

const VIOLATING_SOURCE: &str = r#"
fn login(driver: &WebDriver) {
    driver.find_element(By::css("form button.login-button"));
}
"#;

const CLEAN_SOURCE: &str = r#"
fn hotels(driver: &WebDriver) {
    driver.find_elements(By::css("[data-selenium='hotel-item']"));
}
"#;

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    velador()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2.1"));
}

#[test]
fn test_help_flag() {
    velador()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("selector"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn test_no_args_shows_help() {
    // Running with no args should error gracefully; a subcommand is required
    velador().assert().failure();
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_reports_violation() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("login.rs"), VIOLATING_SOURCE).unwrap();

    velador()
        .args(["check", "--color", "never"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("SEL-HOOK-001"))
        .stdout(predicate::str::contains("login.rs"))
        .stderr(predicate::str::contains("1 forbidden selector(s) found"));
}

#[test]
fn test_check_passes_on_clean_tree() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hotels.rs"), CLEAN_SOURCE).unwrap();

    velador()
        .args(["check", "--color", "never"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 forbidden selector(s)"));
}

#[test]
fn test_check_json_format() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("login.rs"), VIOLATING_SOURCE).unwrap();

    velador()
        .args(["check", "--format", "json"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"diagnostics\""))
        .stdout(predicate::str::contains("\"rule\": \"SEL-HOOK-001\""));
}

#[test]
fn test_check_attribute_override() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("start.rs"),
        r#"
fn start(driver: &WebDriver) {
    driver.find_element(By::css("[data-testid=start]"));
}
"#,
    )
    .unwrap();

    velador()
        .args(["check", "--attribute", "data-testid"])
        .arg(temp.path())
        .assert()
        .success();

    // Same tree fails under the default data-selenium policy
    velador().arg("check").arg(temp.path()).assert().failure();
}

#[test]
fn test_check_quiet_still_prints_diagnostics() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("login.rs"), VIOLATING_SOURCE).unwrap();

    velador()
        .args(["check", "--quiet", "--color", "never"])
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("SEL-HOOK-001"));
}

// ============================================================================
// Explain Command Tests
// ============================================================================

#[test]
fn test_explain_prints_rule() {
    velador()
        .arg("explain")
        .assert()
        .success()
        .stdout(predicate::str::contains("SEL-HOOK-001"))
        .stdout(predicate::str::contains("data-selenium"))
        .stdout(predicate::str::contains("Permitted"))
        .stdout(predicate::str::contains("Forbidden"));
}

#[test]
fn test_explain_unknown_rule_fails() {
    velador()
        .args(["explain", "SEL-HOOK-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rule"));
}
