//! Tests for the timers binary, driven over stdin.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run_timers(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_timers"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn timers");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for timers")
}

#[test]
fn test_add_and_status() {
    let output = run_timers(&["--quiet"], "add Tea 180\nstatus\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("added 'Tea' (180s)"));
    assert!(stdout.contains("[stopped] 1 timer"));
    assert!(stdout.contains("Tea  180s"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = run_timers(&["--verbose"], "start\nquit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("INFO"));
    assert!(!stdout.contains("DEBUG"));
    assert!(stdout.contains("[running] 0 timers"));
}

#[test]
fn test_json_format() {
    let output = run_timers(&["--format", "json", "--quiet"], "add Rice 900\nstatus\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("non-JSON line in output"))
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["status"], "ok");
    assert_eq!(lines[0]["message"], "added 'Rice' (900s)");

    assert_eq!(lines[1]["state"]["isRunning"], false);
    assert_eq!(lines[1]["state"]["timers"][0]["duration"], 900);
    assert_eq!(lines[1]["runState"], "stopped");
    assert_eq!(lines[1]["lastAction"]["action"], "add-timer");
}

#[test]
fn test_invalid_format_exits_with_error() {
    let output = run_timers(&["--format", "xml"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xml"));
}
