//! CLI wiring integration tests
//!
//! Tests end-to-end CLI behavior:
//! - Mode dispatch (analyze, call, methods, serve)
//! - Exit codes
//! - Output formats
//!
//! All tests use real binary execution via std::process::Command, run from a
//! temp directory so no stray `textbridge.toml` is picked up.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

// Test helper: Command for the textbridge binary in an isolated directory
fn textbridge(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textbridge"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TEXTBRIDGE_CHANNEL")
        .env_remove("TEXTBRIDGE_LOG__LEVEL")
        .env_remove("TEXTBRIDGE_LOG__FORMAT")
        .env_remove("TEXTBRIDGE_SERVE__MAX_LINE_BYTES");
    cmd
}

// Test helper: Run with stdin contents
fn run_with_stdin(mut cmd: Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_analyze_plain() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path()).args(["analyze", "Hello world"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Letters: 10, Words: 2\n");
}

#[test]
fn test_analyze_without_text() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path()).arg("analyze").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Empty input\n");
}

#[test]
fn test_analyze_json() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path())
        .args(["--json", "analyze", "   "])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(report["summary"], "Letters: 0, Words: 0");
    assert_eq!(report["letters"], 0);
    assert_eq!(report["words"], 0);
}

#[test]
fn test_analyze_stdin() {
    let dir = TempDir::new().unwrap();
    let mut cmd = textbridge(dir.path());
    cmd.args(["analyze", "--stdin"]);
    let output = run_with_stdin(cmd, "123!!!\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Letters: 0, Words: 1\n");
}

#[test]
fn test_call_success_and_not_implemented() {
    let dir = TempDir::new().unwrap();

    let ok = textbridge(dir.path())
        .args(["call", "analyzeInput", "--args", r#"{"input":"a b   c"}"#])
        .output()
        .unwrap();
    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout_of(&ok), "Letters: 3, Words: 3\n");

    let missing = textbridge(dir.path()).args(["call", "unknownMethod"]).output().unwrap();
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("not implemented"));
}

#[test]
fn test_call_invalid_args_json() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path())
        .args(["call", "analyzeInput", "--args", "{oops"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid arguments"));
}

#[test]
fn test_methods_json() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path()).args(["methods", "--json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let methods: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(methods[0]["name"], "analyzeInput");
    assert_eq!(methods[0]["arguments"][0]["name"], "input");
}

#[test]
fn test_serve_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut cmd = textbridge(dir.path());
    cmd.arg("serve");
    let output = run_with_stdin(
        cmd,
        "{\"method\":\"analyzeInput\",\"arguments\":{\"input\":\"Hello world\"}}\n{\"method\":\"other\"}\n",
    );

    assert_eq!(output.status.code(), Some(0));
    let out = stdout_of(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"status":"success","result":"Letters: 10, Words: 2"}"#,
            r#"{"status":"not_implemented"}"#,
        ]
    );
}

#[test]
fn test_config_file_channel() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("textbridge.toml"), "channel = \"app/text\"\n").unwrap();

    let output = textbridge(dir.path()).arg("methods").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Channel: app/text"));
}

#[test]
fn test_env_overrides_config() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path())
        .env("TEXTBRIDGE_CHANNEL", "env/channel")
        .arg("methods")
        .output()
        .unwrap();

    assert!(stdout_of(&output).contains("Channel: env/channel"));
}

#[test]
fn test_missing_config_file_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = textbridge(dir.path())
        .args(["--config", "does-not-exist.toml", "analyze", "x"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_exit_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("textbridge.toml"), "[serve]\nmax_line_bytes = 0\n").unwrap();

    let output = textbridge(dir.path()).args(["analyze", "x"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
