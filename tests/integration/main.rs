//! Integration tests for the itemproc CLI
//!
//! These tests drive the binary end to end: read items, process them,
//! store them, and load them back.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an itemproc command with an isolated config directory
fn itemproc(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("itemproc"));
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

/// Helper to write an input file
fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("itemproc"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trim and lowercase every text item"));
}

#[test]
fn test_short_help() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize batches of text items"));
}

#[test]
fn test_run_help_lists_log_diagnostics() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp)
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-diagnostics"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp).assert().success().stdout(predicate::str::contains("itemproc v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    itemproc(&temp)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// RUN
// =============================================================================

#[test]
fn test_run_from_file() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "items.json", r#"["  Hello  ", "WORLD", "", "  MiXeD CaSe  "]"#);

    itemproc(&temp)
        .arg("run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("world"))
        .stdout(predicate::str::contains("<absent>"))
        .stdout(predicate::str::contains("mixed case"))
        .stdout(predicate::str::contains("dropped 0"))
        .stderr(predicate::str::contains("Error processing").not());
}

#[test]
fn test_run_from_stdin_reports_failures() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .arg("run")
        .write_stdin(r#"["abc", 42, "DEF"]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("abc"))
        .stdout(predicate::str::contains("def"))
        .stdout(predicate::str::contains("dropped 1"))
        .stderr(predicate::str::contains("Error processing 42: "));
}

#[test]
fn test_run_log_diagnostics() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .args(["run", "--log-diagnostics"])
        .env_remove("RUST_LOG")
        .write_stdin(r#"["abc", 42]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("dropped 1"))
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("Error processing 42: "));
}

#[test]
fn test_run_json_output() {
    let temp = TempDir::new().unwrap();

    let output = itemproc(&temp)
        .args(["--json", "run", "-"])
        .write_stdin(r#"["  A ", null, true]"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["items"], serde_json::json!(["a", null]));
    assert_eq!(value["dropped"], 1);
    assert_eq!(value["store"], "noop");
}

#[test]
fn test_run_empty_array() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .arg("run")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 0 item(s), dropped 0"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_rejects_invalid_json() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .arg("run")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn test_run_file_store_requires_path() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .args(["run", "--store", "file"])
        .write_stdin("[\"a\"]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--store-path"));
}

#[test]
fn test_run_unknown_store() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .args(["run", "--store", "postgres"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown store"));
}

// =============================================================================
// STORE ROUND TRIP
// =============================================================================

#[test]
fn test_run_then_load_with_file_store() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("store/items.json");

    itemproc(&temp)
        .args(["run", "--store", "file", "--store-path"])
        .arg(&store)
        .write_stdin(r#"["Apple", "Banana", ""]"#)
        .assert()
        .success();

    assert!(store.exists());

    itemproc(&temp)
        .args(["load", "an", "--store-path"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("banana"))
        .stdout(predicate::str::contains("apple").not());
}

#[test]
fn test_load_without_store_is_empty() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .arg("load")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored items found."));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_shows_defaults() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[processing]"))
        .stdout(predicate::str::contains("batch_size = 100"))
        .stdout(predicate::str::contains("host = \"localhost\""));
}

#[test]
fn test_config_from_explicit_file() {
    let temp = TempDir::new().unwrap();
    let config = write_input(&temp, "custom.toml", "[database]\nport = 6543\n");

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 6543"));
}

#[test]
fn test_config_validate_fails_on_bad_settings() {
    let temp = TempDir::new().unwrap();
    let config = write_input(&temp, "bad.toml", "[database]\nhost = \"\"\n");

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .args(["config", "--validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("database.host"));
}

#[test]
fn test_run_refuses_invalid_settings() {
    let temp = TempDir::new().unwrap();
    let config = write_input(&temp, "bad.toml", "[processing]\nbatch_size = 0\n");

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .arg("run")
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch_size"));
}

#[test]
fn test_config_init_writes_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("nested/config.toml");

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("batch_size = 100"));
    assert!(content.contains("name = \"testdb\""));

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .args(["config", "--validate"])
        .assert()
        .success();
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let config = write_input(&temp, "config.toml", "[database]\nport = 6543\n");

    itemproc(&temp)
        .arg("--config")
        .arg(&config)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(fs::read_to_string(&config).unwrap().contains("6543"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();

    itemproc(&temp)
        .args(["--config", "does-not-exist.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
