//! Exit codes and messages for failing invocations.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn archgen(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("archgen");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

#[test]
fn test_error_missing_description() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .arg("generate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cta.json"))
        .stderr(predicate::str::contains("archgen init"));
}

#[test]
fn test_error_malformed_description() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cta.json"), "{ \"project\": ").unwrap();
    archgen(temp.path())
        .arg("generate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to parse project description"));
}

#[test]
fn test_error_description_without_module() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cta.json"), r#"{"project":{"name":"shop"}}"#).unwrap();
    archgen(temp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project.module"));
}

#[test]
fn test_error_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cta.json"), "{}").unwrap();
    archgen(temp.path())
        .args(["init", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    archgen(temp.path())
        .args(["init", "--yes", "--force"])
        .assert()
        .success();
}

#[test]
fn test_error_init_without_terminal() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    assert!(!temp.path().join("cta.json").exists());
}

#[test]
fn test_error_unknown_subcommand() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_error_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["--config", "absent.toml", "templates"])
        .assert()
        .code(4);
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["config", "get", "nope.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_impl_without_module_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.go"), "package a\n").unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("archgen-impl");
    cmd.current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .assert()
        .code(5)
        .stderr(predicate::str::contains("go.mod"));
}
