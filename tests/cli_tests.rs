//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn res_packer() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("res-packer"))
}

#[test]
fn test_cli_version() {
    let mut cmd = res_packer();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("res-packer"));
}

#[test]
fn test_cli_help() {
    let mut cmd = res_packer();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pack the files listed"))
        .stdout(predicate::str::contains("--max-depth"));
}

#[test]
fn test_no_arguments_prints_usage_line() {
    let work = TempDir::new().expect("temp dir");
    let mut cmd = res_packer();
    cmd.current_dir(work.path());
    cmd.assert().success().stdout("Drop res list on me!\n");
    assert!(!work.path().join("Archive.7z").exists());
}

#[test]
fn test_two_arguments_print_usage_line() {
    let work = TempDir::new().expect("temp dir");
    std::fs::write(work.path().join("a.txt"), "base\n").expect("write manifest");
    std::fs::write(work.path().join("b.txt"), "base\n").expect("write manifest");

    let mut cmd = res_packer();
    cmd.current_dir(work.path()).args(["a.txt", "b.txt"]);
    cmd.assert().success().stdout("Drop res list on me!\n");
    assert!(!work.path().join("Archive.7z").exists());
}

#[test]
fn test_missing_manifest_fails_before_archive() {
    let work = TempDir::new().expect("temp dir");
    let mut cmd = res_packer();
    cmd.current_dir(work.path()).arg("missing.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read manifest"));
    assert!(!work.path().join("Archive.7z").exists());
}

#[test]
fn test_empty_manifest_fails() {
    let work = TempDir::new().expect("temp dir");
    std::fs::write(work.path().join("list.txt"), "").expect("write manifest");

    let mut cmd = res_packer();
    cmd.current_dir(work.path()).arg("list.txt");
    cmd.assert().failure().stderr(predicate::str::contains("is empty"));
    assert!(!work.path().join("Archive.7z").exists());
}

#[test]
fn test_zero_max_depth_is_rejected() {
    let work = TempDir::new().expect("temp dir");
    std::fs::write(work.path().join("list.txt"), "base\n").expect("write manifest");

    let mut cmd = res_packer();
    cmd.current_dir(work.path()).args(["--max-depth", "0", "list.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_nesting_depth must be at least 1"));
}

#[test]
fn test_hyphen_manifest_name_after_separator() {
    let work = TempDir::new().expect("temp dir");
    std::fs::write(work.path().join("-list.txt"), "base\n").expect("write manifest");

    let mut cmd = res_packer();
    cmd.current_dir(work.path()).args(["--", "-list.txt"]);
    cmd.assert().success().stdout("");
    assert!(work.path().join("Archive.7z").exists());
}
