// crates/cli/tests/integration_test.rs
//! End-to-end tests for the `gitver` binary against scratch repositories.

use std::fs;
use std::path::Path;
use std::process::Command as ProcessCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = ProcessCommand::new("git")
        .args([
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

fn tagged_repo(tag: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    fs::write(dir.path().join("README.md"), "# Test Project\n").unwrap();
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-q", "-m", "Initial commit"]);
    git(dir.path(), &["tag", tag]);
    dir
}

fn gitver() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gitver").unwrap()
}

#[test]
fn table_output_for_an_exact_tag() {
    let repo = tagged_repo("v1.2.3");
    gitver()
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:      1.2.3"))
        .stdout(predicate::str::contains("Full version: 1.2.3"))
        .stdout(predicate::str::contains("State:        tagged"))
        .stdout(predicate::str::contains("Tag:          v1.2.3"));
}

#[test]
fn json_output_carries_components_and_flags() {
    let repo = tagged_repo("1.2.3");
    let assert = gitver()
        .arg(repo.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["version"], "1.2.3");
    assert_eq!(json["major"], 1);
    assert_eq!(json["minor"], 2);
    assert_eq!(json["patch"], 3);
    assert_eq!(json["tagged"], true);
    assert_eq!(json["development"], false);
    assert_eq!(json["dirty"], false);
}

#[test]
fn env_output_emits_cargo_directives() {
    let repo = tagged_repo("v0.9.1");
    gitver()
        .arg(repo.path())
        .args(["--format", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cargo:rustc-env=GITVER_VERSION=0.9.1"))
        .stdout(predicate::str::contains("cargo:rustc-env=GITVER_MAJOR=0"))
        .stdout(predicate::str::contains("cargo:rustc-env=GITVER_MINOR=9"))
        .stdout(predicate::str::contains("cargo:rustc-env=GITVER_PATCH=1"));
}

#[test]
fn quiet_prints_the_full_version_alone() {
    let repo = tagged_repo("1.2.3");
    gitver()
        .arg(repo.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout("1.2.3\n");
}

#[test]
fn development_version_after_extra_commit() {
    let repo = tagged_repo("v1.5.2");
    fs::write(repo.path().join("feature.txt"), "New feature\n").unwrap();
    git(repo.path(), &["add", "."]);
    git(repo.path(), &["commit", "-q", "-m", "Add new feature"]);

    let assert = gitver()
        .arg(repo.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["version"], "1.5.2");
    assert_eq!(json["development"], true);
    assert_eq!(json["commits_since_tag"], 1);
    let full = json["full_version"].as_str().unwrap();
    assert!(full.starts_with("1.5.2-dev.1+"), "unexpected full version: {full}");
}

#[test]
fn untagged_repository_falls_back_to_the_default_version() {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    fs::write(dir.path().join("README.md"), "# Test Project\n").unwrap();
    git(dir.path(), &["add", "."]);
    git(dir.path(), &["commit", "-q", "-m", "Initial commit"]);

    gitver()
        .arg(dir.path())
        .args(["--default-version", "1.0.0", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1.0.0+"));
}

#[test]
fn plain_directory_reports_the_default_version() {
    let dir = TempDir::new().unwrap();
    gitver()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout("0.0.0\n");
}

#[test]
fn mismatch_is_a_failure_when_requested() {
    let repo = tagged_repo("1.2.3");
    gitver()
        .arg(repo.path())
        .args(["--default-version", "2.0.0", "--fail-on-mismatch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version mismatch"));
}

#[test]
fn matching_declared_version_passes_the_check() {
    let repo = tagged_repo("v1.2.3");
    gitver()
        .arg(repo.path())
        .args([
            "--prefix",
            "v",
            "--default-version",
            "1.2.3",
            "--fail-on-mismatch",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout("1.2.3\n");
}

#[test]
fn invalid_default_version_is_a_usage_error() {
    gitver()
        .args(["--default-version", "not-a-version"])
        .assert()
        .failure();
}
