//! CLI integration tests
//!
//! These tests run the permgen binary and check exit codes and output streams.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Get the path to the fixture app
fn fixture_app() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/contacts")
}

fn permgen() -> Command {
    Command::cargo_bin("permgen").expect("permgen binary should be built")
}

fn fixture_args() -> Vec<String> {
    let app = fixture_app();
    vec![
        "-m".to_string(),
        app.join("AndroidManifest.xml").display().to_string(),
        "-r".to_string(),
        app.join("res/values").display().to_string(),
    ]
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    permgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("permgen"))
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--resources"))
        .stdout(predicate::str::contains("--tag"));
}

#[test]
fn test_cli_short_help_does_not_need_paths() {
    permgen().arg("-h").assert().success();
}

#[test]
fn test_cli_version() {
    permgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("permgen"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_cli_unknown_flag() {
    permgen()
        .args(["-x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("-x"));
}

#[test]
fn test_cli_missing_manifest() {
    let app = fixture_app();
    permgen()
        .args(["-r", app.join("res/values").to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_cli_missing_resources() {
    let app = fixture_app();
    permgen()
        .args(["-m", app.join("AndroidManifest.xml").to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--resources"));
}

// ============================================================================
// Report output
// ============================================================================

#[test]
fn test_cli_html_report() {
    let output = permgen()
        .args(fixture_args())
        .args(["-t", "Contacts provider"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let html = String::from_utf8(output).unwrap();

    assert!(html.starts_with("<tr>\n<td colspan=\"5\""));
    assert!(html.contains(">Contacts provider</td>"));
    assert!(html.contains(">com.example.contacts.READ</td>"));
    assert!(html.contains(">read contacts</td>"));
    assert!(html.contains(">Allows the app to read contact data stored on the device.</td>"));
    assert!(html.contains(">modify contacts</td>"));
    assert_eq!(html.matches("<tr>").count(), 4);
}

#[test]
fn test_cli_logs_stay_off_stdout() {
    permgen()
        .args(fixture_args())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<tr>"))
        .stderr(predicate::str::contains("permgen v"));
}

#[test]
fn test_cli_json_report() {
    let output = permgen()
        .args(fixture_args())
        .args(["--format", "json", "-t", "core"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");

    assert_eq!(value["tag"], "core");
    assert_eq!(value["permissions"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["permissions"][1]["label"], "modify contacts");
}

#[test]
fn test_cli_escape_html() {
    permgen()
        .args(fixture_args())
        .args(["-t", "<b>", "--escape-html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">&lt;b&gt;</td>"))
        .stdout(predicate::str::contains("data &amp; groups."));
}

#[test]
fn test_cli_no_permissions_prints_nothing() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let manifest = temp.path().join("AndroidManifest.xml");
    fs::write(&manifest, "<manifest package=\"com.example\"/>").unwrap();

    permgen()
        .args(["-m", manifest.to_str().unwrap()])
        .args(["-r", temp.path().to_str().unwrap()])
        .args(["-t", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("permgen.toml");
    fs::write(&config, "[report]\ncell_style = \"color:gray\"\n").unwrap();

    permgen()
        .args(fixture_args())
        .args(["-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("style=\"color:gray\""));
}

// ============================================================================
// Processing errors
// ============================================================================

#[test]
fn test_cli_malformed_manifest_fails_visibly() {
    let temp = tempfile::tempdir().unwrap();
    let manifest = temp.path().join("AndroidManifest.xml");
    fs::write(&manifest, "<manifest><permission android:name=\"x\">").unwrap();

    permgen()
        .args(["-m", manifest.to_str().unwrap()])
        .args(["-r", temp.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("AndroidManifest.xml"));
}

#[test]
fn test_cli_missing_resource_directory() {
    let app = fixture_app();
    permgen()
        .args(["-m", app.join("AndroidManifest.xml").to_str().unwrap()])
        .args(["-r", "/nonexistent/res/values"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
