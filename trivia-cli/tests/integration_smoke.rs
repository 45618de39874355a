//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve")
        .current_dir(home.path())
        .env_remove("DATABASE_URL")
        .env("TRIVIA_CONFIG", home.path().join("missing.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
