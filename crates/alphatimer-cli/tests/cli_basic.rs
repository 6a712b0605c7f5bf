//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "alphatimer-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn frame_prints_idle_card() {
    let (stdout, _, code) = run_cli(&["frame"]);
    assert_eq!(code, 0, "frame failed");
    assert!(stdout.contains("00 : 06"));
    assert!(stdout.contains("\"visible\": true"));
    assert!(stdout.contains("\"label\": \"START\""));
}

#[test]
fn frame_respects_locale() {
    let (stdout, _, code) = run_cli(&["--locale", "ja", "frame"]);
    assert_eq!(code, 0, "frame --locale ja failed");
    assert!(stdout.contains("開始"));
}

#[test]
fn ticks_counts_down_then_resets() {
    let (stdout, _, code) = run_cli(&["ticks"]);
    assert_eq!(code, 0, "ticks failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "00 : 05", "00 : 04", "00 : 03", "00 : 02", "00 : 01", "00 : 00", "00 : 06",
        ]
    );
}

#[test]
fn ticks_json_ends_with_completion() {
    let (stdout, _, code) = run_cli(&["ticks", "--json"]);
    assert_eq!(code, 0, "ticks --json failed");
    assert!(stdout.contains("\"type\":\"CountdownStarted\""));
    assert!(stdout.contains("\"remaining_secs\":0"));
    let last = stdout.lines().last().unwrap_or_default();
    assert!(last.contains("\"type\":\"CountdownCompleted\""));
}

#[test]
fn unknown_locale_is_rejected() {
    let (_, stderr, code) = run_cli(&["--locale", "tlh", "frame"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown locale"));
}
