//! Smoke tests for the marquee binary's startup path

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn marquee() -> Command {
    let mut cmd = Command::cargo_bin("marquee").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("MARQUEE_ENV_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    marquee()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_serve_help() {
    marquee()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--env-file"));
}

#[test]
fn test_serve_fails_without_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.env");

    marquee()
        .arg("serve")
        .arg("--env-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error loading env file"));
}

#[test]
fn test_serve_fails_without_database_url() {
    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "UNRELATED=1").unwrap();

    marquee()
        .arg("serve")
        .arg("--env-file")
        .arg(env_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not found"))
        .stderr(predicate::str::contains("Server is running").not());
}

#[test]
fn test_check_fails_without_database_url() {
    let env_file = NamedTempFile::new().unwrap();

    marquee()
        .arg("check")
        .env("MARQUEE_ENV_FILE", env_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_startup_error_reported_once() {
    let env_file = NamedTempFile::new().unwrap();

    marquee()
        .arg("serve")
        .arg("--env-file")
        .arg(env_file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not found").count(1))
        .stderr(predicate::str::contains("Error: ").not());
}
