#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly and responds to basic
//! commands without crashing. Config lookup is pointed at a temp directory so
//! a developer's real configuration never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn barua(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("barua").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_dir.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cover letter"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--tone"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_displays_version() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("sw"))
        .stdout(predicate::str::contains("Kiswahili"));
}

#[test]
fn test_tones_list_shows_presets() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .arg("tones")
        .assert()
        .success()
        .stdout(predicate::str::contains("friendly"))
        .stdout(predicate::str::contains("professional"))
        .stdout(predicate::str::contains("bold"));
}

#[test]
fn test_tones_list_swahili_interface() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .args(["--lang", "sw", "tones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitaalamu"));
}

#[test]
fn test_configure_show_without_config() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_init_writes_template() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    barua(&config)
        .arg("init")
        .current_dir(workdir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("barua-form.toml"));

    let template = std::fs::read_to_string(workdir.path().join("barua-form.toml")).unwrap();
    assert!(template.contains("full_name"));
    assert!(template.contains("institution_type"));
}

#[test]
fn test_init_refuses_overwrite() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join("barua-form.toml"), "existing").unwrap();

    barua(&config)
        .arg("init")
        .current_dir(workdir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_tone_flag() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .args(["--tone", "shouty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_form_file() {
    let config = TempDir::new().unwrap();
    barua(&config)
        .arg("/nonexistent/form.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read form file"));
}
