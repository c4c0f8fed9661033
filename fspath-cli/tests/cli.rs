//! Integration tests for the fspath CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fspath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("real"))
        .stdout(predicate::str::contains("chmod"));
}

#[test]
fn test_unknown_command_fails() {
    let env = TestEnv::new();
    env.command()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_get_requires_integer_index() {
    let env = TestEnv::new();
    env.command()
        .args(["get", "/usr", "first"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fspath"));
}

#[test]
fn test_quiet_completions_have_no_hint() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
