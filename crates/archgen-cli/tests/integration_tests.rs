//! Integration tests for the archgen binaries.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn archgen(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("archgen");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn archgen_impl(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("archgen-impl");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

const REPOSITORY_GO: &str = "package domain

import \"context\"

// UserRepository persists users.
type UserRepository interface {
\tCreate(ctx context.Context, user *User) error
\tGetByID(ctx context.Context, id string) (*User, error)
}

type User struct {
\tID   string
\tName string
}
";

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean-architecture"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_then_generate() {
    let temp = TempDir::new().unwrap();

    archgen(temp.path())
        .args(["init", "--yes", "--name", "shop", "--module", "example.com/shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved to cta.json"))
        .stdout(predicate::str::contains("User Domain"));

    let desc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("cta.json")).unwrap())
            .unwrap();
    assert_eq!(desc["project"]["module"], "example.com/shop");
    assert_eq!(desc["database"]["type"], "postgres");
    assert_eq!(desc["domains"].as_array().unwrap().len(), 2);

    archgen(temp.path())
        .args(["generate", "cta.json", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));

    let out = temp.path().join("out");
    let go_mod = fs::read_to_string(out.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/shop"));
    assert!(out.join("cmd/server/main.go").is_file());
    assert!(out.join("internal/domain/entity/user.go").is_file());
    assert!(out.join("internal/handler/http/user_handler.go").is_file());
    assert!(out.join("sqlc.yaml").is_file());
}

#[test]
fn test_generate_twice_skips_existing() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["init", "--yes", "--name", "shop"])
        .assert()
        .success();
    archgen(temp.path()).arg("gen").assert().success();

    archgen(temp.path())
        .arg("gen")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 generated"));

    archgen(temp.path())
        .args(["gen", "--no-skip-existing", "--backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backed up"));
    assert!(temp.path().join("go.mod.backup").is_file());
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["init", "--yes", "--database", "both"])
        .assert()
        .success();

    archgen(temp.path())
        .args(["generate", "--dry-run", "cta.json", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("internal/infrastructure/database/mongodb/connection.go"));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_templates_listing() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["templates", "--names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go_mod"))
        .stdout(predicate::str::contains("repository_mongodb"));

    let output = archgen(temp.path())
        .args(["--output-format", "json", "ls"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 19);
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("archgen"));
}

#[test]
fn test_config_init_and_get() {
    let temp = TempDir::new().unwrap();
    archgen(temp.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(temp.path().join(".archgen.toml").is_file());

    archgen(temp.path())
        .args(["config", "get", "generate.skip_existing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    archgen(temp.path())
        .args(["config", "get", "generate.force"])
        .env("ARCHGEN__GENERATE__FORCE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_impl_dry_run_lists_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example.com/app\n\ngo 1.22\n").unwrap();
    fs::write(temp.path().join("repository.go"), REPOSITORY_GO).unwrap();

    archgen_impl(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would generate: user_repository.gen.go"))
        .stdout(predicate::str::contains("factory.gen.go"))
        .stdout(predicate::str::contains("wire.gen.go"));
    assert!(!temp.path().join("factory.gen.go").exists());
}

#[test]
fn test_impl_writes_then_skips() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example.com/app\n").unwrap();
    fs::write(temp.path().join("repository.go"), REPOSITORY_GO).unwrap();

    archgen_impl(temp.path()).assert().success();
    let stub = fs::read_to_string(temp.path().join("user_repository.gen.go")).unwrap();
    assert!(stub.contains("func NewUserRepository(db *sql.DB) UserRepository {"));

    archgen_impl(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 generated, 3 skipped"));

    archgen_impl(temp.path())
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 generated"));
}
