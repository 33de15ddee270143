//! Integration tests for the `suite-hierarchy` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const DEFINITION: &str = r#"
[hierarchy]
A = { B = { C = { E = {} }, D = {} } }
P = { Q = { B = {} } }

[suites]
A = ["t1", "t2", "t3"]
B = ["t1", "t2", "t3", "t4"]
C = ["t1", "t2", "t3", "t5"]
D = ["t2", "t3", "t5", "t6"]
E = ["t1", "t2", "t3", "t7"]
P = ["t1"]
Q = ["t1", "t7"]
"#;

fn definition(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("hierarchy.toml");
    fs::write(&path, DEFINITION).unwrap();
    path
}

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_suite-hierarchy"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_ancestors_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["ancestors", "E"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["A", "B", "C", "P", "Q"]);
}

#[test]
fn test_minimal_command_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["--json", "minimal", "D"]);
    assert!(output.status.success());
    let tests: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tests, ["t5", "t6"]);
}

#[test]
fn test_minimal_all_suites() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["minimal"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"B (1/4 tests)".to_string()));
    assert!(lines.contains(&"E (0/4 tests)".to_string()));
}

#[test]
fn test_find_suites_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["find-suites", "t7"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["E", "Q"]);
}

#[test]
fn test_order_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["order"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["A", "P", "Q", "B", "C", "D", "E"]);
}

#[test]
fn test_dag_command_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["dag", "--json"]);
    assert!(output.status.success());
    let dag: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dag["B"]["parents"], serde_json::json!(["A", "Q"]));
    assert_eq!(dag["B"]["children"], serde_json::json!(["C", "D"]));
}

#[test]
fn test_unknown_suite_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&definition(&temp_dir), &["ancestors", "Z"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown suite: Z"));
}
