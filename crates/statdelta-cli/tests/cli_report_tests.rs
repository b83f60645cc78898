//! CLI report integration tests

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const BEFORE: &str = include_str!("../../statdelta-core/tests/fixtures/before.json");
const AFTER: &str = include_str!("../../statdelta-core/tests/fixtures/after.json");
const RAW: &str = include_str!("../../statdelta-core/tests/fixtures/raw_snapshot.json");

fn history(entries: &[&str]) -> String {
    format!("[{}]", entries.join(","))
}

fn run_report(dir: &TempDir, contents: &str, extra: &[&str]) -> Output {
    let path = dir.path().join("history.json");
    fs::write(&path, contents).unwrap();
    Command::new(env!("CARGO_BIN_EXE_statdelta"))
        .arg("report")
        .arg(&path)
        .args(extra)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_report_table() {
    let dir = TempDir::new().unwrap();
    let output = run_report(&dir, &history(&[BEFORE, AFTER]), &[]);
    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("user\tname\tenergy"));
    assert!(lines[1].starts_with("2040809\t-\t9630\t"));
}

#[test]
fn test_report_mixed_shapes_and_users() {
    let dir = TempDir::new().unwrap();
    let other = r#"{"bars": {"energy": {"current": 10, "maximum": 100}}, "userId": 7, "name": "Bo"}"#;
    let output = run_report(&dir, &history(&[RAW, other, AFTER]), &["--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summaries = report["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["userId"], 2040809);
    assert_eq!(summaries[0]["name"], "Kasumi");
    assert_eq!(summaries[1]["userId"], 7);
    assert_eq!(summaries[1]["energy"], 0);
    assert!(report.get("relevant").is_none());
}

#[test]
fn test_report_relevant_only_lists_intervals() {
    let dir = TempDir::new().unwrap();
    let output = run_report(
        &dir,
        &history(&[BEFORE, AFTER, AFTER]),
        &["--relevant-only", "--json"],
    );
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let relevant = report["relevant"].as_array().unwrap();
    // the repeated snapshot forms a quiet interval and is dropped
    assert_eq!(relevant.len(), 1);
    assert_eq!(relevant[0]["energyTrained"], 9630);
    assert_eq!(relevant[0]["tags"][0], "attack");
    assert!(relevant[0]["events"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "trained 9630e gaining 34644697.1024 stats"));
}

#[test]
fn test_report_text_relevant_section() {
    let dir = TempDir::new().unwrap();
    let output = run_report(&dir, &history(&[BEFORE, AFTER]), &["--relevant-only"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2040809 [attack, booster, consumable"));
    assert!(stdout.contains("] 9630e"));
}

#[test]
fn test_report_rejects_non_array() {
    let dir = TempDir::new().unwrap();
    let output = run_report(&dir, BEFORE, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON array"), "stderr: {stderr}");
    assert!(stderr.contains("ERR_INVALID_INPUT"));
}

#[test]
fn test_report_names_bad_entry() {
    let dir = TempDir::new().unwrap();
    let output = run_report(&dir, &history(&[BEFORE, r#"{"level": 3}"#]), &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("snapshot #1"), "stderr: {stderr}");
    assert!(stderr.contains("ERR_UNRECOGNIZED_SHAPE"));
}

#[test]
fn test_json_log_format_flag_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, history(&[BEFORE, AFTER])).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_statdelta"))
        .args(["--log-format", "json", "report"])
        .arg(&path)
        .env("RUST_LOG", "statdelta_core=info")
        .output()
        .expect("Failed to execute CLI");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("a log line");
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(line["fields"]["op"], "summarize_users");
}
