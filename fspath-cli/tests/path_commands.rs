//! Integration tests for the component arithmetic commands.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_show_canonicalizes() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["show", "//usr/./local/../bin/"]), "/usr/bin");
    assert_eq!(env.stdout(&["show", "/.."]), "/");
}

#[test]
fn test_show_relative_uses_working_directory() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["show", "."]), env.root.to_string_lossy());
    assert_eq!(env.stdout(&["show", "a/b"]), env.display("a/b"));
}

#[test]
fn test_show_components() {
    let env = TestEnv::new();
    let out = env.stdout(&["show", "--components", "/usr/local/bin"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(&lines[1..], ["usr", "local", "bin"]);
}

#[test]
fn test_show_expands_tilde_and_variables() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["show", "~/notes"]), env.display("notes"));

    let out = env
        .command()
        .env("FSPATH_TEST_DIR", "/opt/data")
        .args(["show", "$FSPATH_TEST_DIR/x"])
        .output()
        .expect("Failed to run fspath");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim_end(), "/opt/data/x");
}

#[test]
fn test_no_expand_keeps_variables_literal() {
    let env = TestEnv::new();
    env.command()
        .env("FSPATH_TEST_DIR", "/opt/data")
        .args(["--no-expand", "show", "/$FSPATH_TEST_DIR"])
        .assert()
        .success()
        .stdout("/$FSPATH_TEST_DIR\n");
}

#[test]
fn test_get_ancestors() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["get", "/usr/local/bin", "0"]), "/");
    assert_eq!(env.stdout(&["get", "/usr/local/bin", "1"]), "/usr");
    assert_eq!(env.stdout(&["get", "/usr/local/bin", "-1"]), "/usr/local/bin");
    assert_eq!(env.stdout(&["get", "/usr/local/bin", "-2"]), "/usr/local");
    assert_eq!(env.stdout(&["get", "--name", "/usr/local/bin", "2"]), "local");
}

#[test]
fn test_get_out_of_range() {
    let env = TestEnv::new();
    env.command()
        .args(["get", "/usr/local/bin", "4"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_set_single_component() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["set", "/usr/local/bin", "-1", "share"]), "/usr/local/share");
    assert_eq!(
        env.stdout(&["set", "/usr/local/bin", "2", "testfolder/test2"]),
        "/usr/testfolder/test2/bin"
    );
}

#[test]
fn test_set_range_and_insert() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["set", "/usr/local/bin", "1:3", "opt"]), "/opt/bin");
    assert_eq!(env.stdout(&["set", "/usr/bin", "2:2", "local"]), "/usr/local/bin");
    assert_eq!(env.stdout(&["set", "/usr/local/bin", "-2:", "lib"]), "/usr/lib");
}

#[test]
fn test_set_root_is_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["set", "/usr", "0", "x"])
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_delete_forms() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["delete", "/usr/local/bin", "2"]), "/usr/bin");
    assert_eq!(env.stdout(&["delete", "/usr/local/bin", "-2:"]), "/usr");
    assert_eq!(env.stdout(&["delete", "/usr/local/bin", "1:"]), "/");
    assert_eq!(env.stdout(&["delete", "/usr/local/bin", "3:3"]), "/usr/local/bin");
}

#[test]
fn test_delete_bad_selection() {
    let env = TestEnv::new();
    env.command()
        .args(["delete", "/usr/local/bin", "one:two"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid index"));
}

#[test]
fn test_delete_index_out_of_range() {
    let env = TestEnv::new();
    env.command()
        .args(["delete", "/usr", "5"])
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_join_multiple_suffixes() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["join", "/usr", "local", "lib/x"]), "/usr/local/lib/x");
    assert_eq!(env.stdout(&["join", "/", "etc"]), "/etc");
}

#[test]
fn test_join_keeps_tilde_in_suffix() {
    let env = TestEnv::new();
    assert_eq!(env.stdout(&["join", "/usr", "~/x"]), "/usr/~/x");
}

#[test]
fn test_join_respects_no_expand() {
    let env = TestEnv::new();
    env.command()
        .env("FSPATH_TEST_DIR", "/opt/data")
        .args(["--no-expand", "join", "/a", "$FSPATH_TEST_DIR"])
        .assert()
        .success()
        .stdout("/a/$FSPATH_TEST_DIR\n");

    assert_eq!(
        env.stdout(&["join", "/a", "$HOME"]),
        format!("/a{}", env.root.to_string_lossy())
    );
}
