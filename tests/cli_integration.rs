//! Integration tests for the `lx` CLI.
//!
//! Each test creates a temp directory, runs `lx` as a subprocess, and
//! verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `lx` binary.
fn lx_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("lx");
    path
}

/// Run `lx` with the given args in the given directory, returning (stdout, stderr, success).
fn run_lx(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(lx_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run lx");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `lx` expecting success, return stdout.
fn run_lx_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_lx(dir, args);
    if !success {
        panic!(
            "lx {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn init_dir() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    run_lx_ok(tmp.path(), &["init"]);
    tmp
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

#[test]
fn test_init_creates_layout() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_lx_ok(tmp.path(), &["init"]);
    assert!(out.contains("initialized"));

    let dir = tmp.path().join("lectio");
    assert!(dir.join("config.toml").exists());
    assert_eq!(
        fs::read_to_string(dir.join("completedReadings.json")).unwrap(),
        "[]"
    );
    assert_eq!(
        fs::read_to_string(dir.join("readingNotes.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_init_refuses_reinit_without_force() {
    let tmp = init_dir();
    let (_, stderr, success) = run_lx(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));

    run_lx_ok(tmp.path(), &["init", "--force"]);
}

#[test]
fn test_commands_require_init() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_lx(tmp.path(), &["progress"]);
    assert!(!success);
    assert!(stderr.contains("lx init"));
}

// ---------------------------------------------------------------------------
// Catalog commands
// ---------------------------------------------------------------------------

#[test]
fn test_months_lists_all_thirteen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_lx_ok(tmp.path(), &["months"]);
    assert!(out.contains("meskerem"));
    assert!(out.contains("pagume"));
    assert_eq!(out.lines().count(), 13);
}

#[test]
fn test_months_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_lx_ok(tmp.path(), &["months", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 13);
    assert_eq!(arr[0]["slug"], "meskerem");
    assert_eq!(arr[12]["days"], 5);
}

#[test]
fn test_list_month() {
    let tmp = init_dir();
    let out = run_lx_ok(tmp.path(), &["list", "calendar", "--month", "meskerem"]);
    assert!(out.contains("meskerem-1"));
    assert!(out.contains("meskerem-30"));
    assert!(out.contains("Genesis 1-3"));
    assert!(!out.contains("tikimt-1"));
}

#[test]
fn test_list_nt90_json() {
    let tmp = init_dir();
    let out = run_lx_ok(tmp.path(), &["list", "nt90", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 90);
    assert_eq!(arr[0]["id"], "nt90-1");
    assert_eq!(arr[0]["completed"], false);
}

#[test]
fn test_show_unknown_id_fails() {
    let tmp = init_dir();
    let (_, stderr, success) = run_lx(tmp.path(), &["show", "nowhere-1"]);
    assert!(!success);
    assert!(stderr.contains("no such reading"));
}

#[test]
fn test_search_with_plan_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_lx_ok(tmp.path(), &["search", "Romans", "--plan", "nt90"]);
    assert!(out.contains("nt90-"));
    assert!(!out.contains("chrono-"));
}

#[test]
fn test_details_has_fallback() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_lx_ok(tmp.path(), &["details", "chrono-1"]);
    assert!(out.contains("Creation & The Fall"));
    assert!(out.contains("Genesis 1:27"));

    // Weeks without specific content fall back to the plan default
    let out = run_lx_ok(tmp.path(), &["details", "chrono-40"]);
    assert!(out.contains("God's Faithfulness in Scripture"));
}

// ---------------------------------------------------------------------------
// Progress round trip
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_note_progress_round_trip() {
    let tmp = init_dir();

    let out = run_lx_ok(tmp.path(), &["toggle", "meskerem-3"]);
    assert!(out.contains("marked complete"));
    run_lx_ok(tmp.path(), &["toggle", "nt90-1"]);
    run_lx_ok(tmp.path(), &["note", "meskerem-3", "great passage"]);

    // State survives separate invocations
    let out = run_lx_ok(tmp.path(), &["show", "meskerem-3"]);
    assert!(out.contains("[x]"));
    assert!(out.contains("great passage"));

    let out = run_lx_ok(tmp.path(), &["progress"]);
    assert!(out.contains("2/365"));
    assert!(out.contains("(1%)"));

    // Toggling back off
    let out = run_lx_ok(tmp.path(), &["toggle", "meskerem-3"]);
    assert!(out.contains("marked incomplete"));
    let out = run_lx_ok(tmp.path(), &["progress"]);
    assert!(out.contains("1/365"));
}

#[test]
fn test_note_show_and_clear() {
    let tmp = init_dir();

    run_lx_ok(tmp.path(), &["note", "chrono-2", "  trimmed  "]);
    let out = run_lx_ok(tmp.path(), &["note", "chrono-2"]);
    assert_eq!(out.trim(), "trimmed");

    run_lx_ok(tmp.path(), &["note", "chrono-2", ""]);
    let out = run_lx_ok(tmp.path(), &["note", "chrono-2"]);
    assert!(out.contains("(no note)"));
}

#[test]
fn test_progress_json_breakdown() {
    let tmp = init_dir();
    run_lx_ok(tmp.path(), &["toggle", "meskerem-1"]);
    run_lx_ok(tmp.path(), &["toggle", "chrono-1"]);
    run_lx_ok(tmp.path(), &["toggle", "nt90-1"]);

    let out = run_lx_ok(tmp.path(), &["progress", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["completed"], 3);
    assert_eq!(parsed["total"], 365);
    assert_eq!(parsed["calendar"], 1);
    assert_eq!(parsed["chronological"], 1);
    assert_eq!(parsed["nt90"], 1);
}

#[test]
fn test_dir_flag_from_outside() {
    let tmp = init_dir();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let dir_arg = tmp.path().to_str().unwrap();
    run_lx_ok(elsewhere.path(), &["-C", dir_arg, "toggle", "nt90-5"]);
    let out = run_lx_ok(tmp.path(), &["progress"]);
    assert!(out.contains("1/365"));
}

#[test]
fn test_discovery_walks_up() {
    let tmp = init_dir();
    let nested = tmp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();

    run_lx_ok(&nested, &["toggle", "meskerem-1"]);
    let out = run_lx_ok(tmp.path(), &["progress"]);
    assert!(out.contains("1/365"));
}

// ---------------------------------------------------------------------------
// Corruption resilience
// ---------------------------------------------------------------------------

#[test]
fn test_corrupted_storage_degrades_to_empty() {
    let tmp = init_dir();
    fs::write(
        tmp.path().join("lectio/completedReadings.json"),
        "{definitely not json",
    )
    .unwrap();

    let out = run_lx_ok(tmp.path(), &["progress"]);
    assert!(out.contains("0/365"));

    // The failure is journaled
    let journal = fs::read_to_string(tmp.path().join("lectio/.journal.log")).unwrap();
    assert!(journal.contains("completedReadings"));
}
