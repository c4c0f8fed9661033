//! Integration tests for the filesystem commands.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;

#[test]
fn test_type_tags() {
    let env = TestEnv::new();
    env.mkdir("d");
    env.write("f.txt", "x");
    env.symlink("to-d", "d");
    env.symlink("dangling", "nowhere");

    assert_eq!(env.stdout(&["type", "d"]), "dir");
    assert_eq!(env.stdout(&["type", "f.txt"]), "file");
    assert_eq!(env.stdout(&["type", "to-d"]), "dir, link");
    assert_eq!(env.stdout(&["type", "dangling"]), "missing, link");
    assert_eq!(env.stdout(&["type", "absent"]), "missing");
}

#[test]
fn test_real_follows_chain() {
    let env = TestEnv::new();
    env.write("target.txt", "x");
    env.symlink("one", "target.txt");
    env.symlink("two", "one");

    assert_eq!(env.stdout(&["real", "two"]), env.display("target.txt"));
}

#[test]
fn test_real_reports_loop() {
    let env = TestEnv::new();
    env.symlink("a", "b");
    env.symlink("b", "a");

    env.command()
        .args(["real", "a"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("loop"));
}

#[test]
fn test_link_symbolic_and_hard() {
    let env = TestEnv::new();
    env.write("data.txt", "hello");

    env.command().args(["link", "soft", "data.txt"]).assert().success();
    assert_eq!(
        std::fs::read_link(env.path("soft")).unwrap(),
        std::path::PathBuf::from("data.txt")
    );

    env.command()
        .args(["link", "--hard", "hard", "data.txt"])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(env.path("hard")).unwrap(), "hello");
    assert_eq!(env.stdout(&["type", "hard"]), "file");
}

#[test]
fn test_link_existing_destination_fails() {
    let env = TestEnv::new();
    env.write("data.txt", "hello");
    env.write("taken", "");

    env.command()
        .args(["link", "taken", "data.txt"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_ls_sorted_human_and_json() {
    let env = TestEnv::new();
    env.mkdir("d");
    env.write("d/b.txt", "");
    env.mkdir("d/a");

    let human = env.stdout(&["ls", "d"]);
    let lines: Vec<&str> = human.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("  a"));
    assert!(lines[0].starts_with("dir"));
    assert!(lines[1].ends_with("  b.txt"));

    let json = env.stdout(&["ls", "--format", "json", "d"]);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "a");
    assert_eq!(parsed[0]["type"][0], "dir");
    assert_eq!(parsed[1]["name"], "b.txt");
    assert_eq!(parsed[1]["path"], env.display("d/b.txt"));
}

#[test]
fn test_ls_missing_directory() {
    let env = TestEnv::new();
    env.command()
        .args(["ls", "absent"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_stat_json() {
    let env = TestEnv::new();
    let file = env.write("f.txt", "12345");
    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640)).unwrap();

    let json = env.stdout(&["stat", "--format", "json", "f.txt"]);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["size"], 5);
    assert_eq!(parsed["owner"], "rw-");
    assert_eq!(parsed["type"][0], "file");
    assert!(parsed["modified"].as_i64().unwrap() > 0);
}

#[test]
fn test_stat_human() {
    let env = TestEnv::new();
    env.write("f.txt", "abc");
    env.command()
        .args(["stat", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 3"))
        .stdout(predicate::str::contains("Type: file"));
}

#[test]
fn test_access_and_chmod() {
    let env = TestEnv::new();
    let file = env.write("f.txt", "");

    env.command().args(["chmod", "f.txt", "r"]).assert().success();
    assert_eq!(
        std::fs::metadata(&file).unwrap().permissions().mode() & 0o777,
        0o400
    );

    env.command().args(["access", "f.txt", "r"]).assert().success();
    env.command()
        .args(["access", "f.txt", "rw"])
        .assert()
        .failure()
        .code(1);

    env.command().args(["chmod", "f.txt", "rw-"]).assert().success();
    env.command().args(["access", "f.txt", "rw"]).assert().success();
}

#[test]
fn test_access_bad_mode() {
    let env = TestEnv::new();
    env.write("f.txt", "");
    env.command()
        .args(["access", "f.txt", "rwz"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_mkdir_modes() {
    let env = TestEnv::new();

    env.command().args(["mkdir", "plain"]).assert().success();
    assert!(env.path("plain").is_dir());

    env.command()
        .args(["mkdir", "--mode", "700", "private"])
        .assert()
        .success();
    let mode = std::fs::metadata(env.path("private")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);

    env.command()
        .args(["mkdir", "--mode", "9", "bad"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_mkdir_existing_fails() {
    let env = TestEnv::new();
    env.mkdir("d");
    env.command()
        .args(["mkdir", "d"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_touch_rm_file() {
    let env = TestEnv::new();
    env.command().args(["touch", "new.txt"]).assert().success();
    assert!(env.path("new.txt").is_file());

    env.command().args(["rm", "new.txt"]).assert().success();
    assert!(!env.path("new.txt").exists());
}

#[test]
fn test_rm_directory_requires_recursive() {
    let env = TestEnv::new();
    env.mkdir("tree/inner");
    env.write("tree/inner/f", "x");

    env.command()
        .args(["rm", "tree"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("--recursive"));

    env.command().args(["rm", "-r", "tree"]).assert().success();
    assert!(!env.path("tree").exists());
}

#[test]
fn test_rm_link_keeps_target() {
    let env = TestEnv::new();
    env.mkdir("d");
    env.write("d/keep", "x");
    env.symlink("to-d", "d");

    env.command().args(["rm", "-r", "to-d"]).assert().success();
    assert!(env.path("d/keep").exists());
    assert!(std::fs::symlink_metadata(env.path("to-d")).is_err());
}

#[test]
fn test_cp_file_and_tree() {
    let env = TestEnv::new();
    env.write("a.txt", "alpha");
    env.mkdir("src/sub");
    env.write("src/sub/b.txt", "beta");

    env.command().args(["cp", "a.txt", "copy.txt"]).assert().success();
    assert_eq!(std::fs::read_to_string(env.path("copy.txt")).unwrap(), "alpha");

    env.command().args(["cp", "src", "dst"]).assert().failure().code(4);
    env.command().args(["cp", "-r", "src", "dst"]).assert().success();
    assert_eq!(
        std::fs::read_to_string(env.path("dst/sub/b.txt")).unwrap(),
        "beta"
    );
}

#[test]
fn test_cp_refuses_existing_destination() {
    let env = TestEnv::new();
    env.write("a.txt", "alpha");
    env.write("b.txt", "beta");

    env.command().args(["cp", "a.txt", "b.txt"]).assert().failure().code(5);
    assert_eq!(std::fs::read_to_string(env.path("b.txt")).unwrap(), "beta");
}

#[test]
fn test_mv_entry() {
    let env = TestEnv::new();
    env.write("a.txt", "alpha");
    env.mkdir("d");

    env.command().args(["mv", "a.txt", "d/b.txt"]).assert().success();
    assert!(!env.path("a.txt").exists());
    assert_eq!(std::fs::read_to_string(env.path("d/b.txt")).unwrap(), "alpha");

    env.write("c.txt", "");
    env.command().args(["mv", "c.txt", "d/b.txt"]).assert().failure().code(5);
}
