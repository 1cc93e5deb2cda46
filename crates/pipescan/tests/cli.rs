//! Binary-level tests for `pipescan check`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ACYCLIC: &str = r#"{
  "nodes": [
    {"id": "input-1", "type": "customInput", "position": {"x": 0, "y": 0}, "data": {}},
    {"id": "llm-1", "type": "llm", "position": {"x": 200, "y": 0}, "data": {}}
  ],
  "edges": [
    {"source": "input-1", "target": "llm-1", "id": "e1"}
  ]
}"#;

const CYCLIC: &str = r#"{
  "nodes": [
    {"id": "a", "type": "text", "position": {"x": 0, "y": 0}, "data": {}},
    {"id": "b", "type": "text", "position": {"x": 1, "y": 1}, "data": {}}
  ],
  "edges": [
    {"source": "a", "target": "b", "id": "a->b"},
    {"source": "b", "target": "a", "id": "b->a"}
  ]
}"#;

fn pipescan(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pipescan").expect("pipescan binary should build");
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env("PIPESCAN_COLOR", "never");
    for var in [
        "PIPESCAN_HOST",
        "PIPESCAN_PORT",
        "PIPESCAN_BODY_LIMIT",
        "PIPESCAN_LOG_LEVEL",
        "PIPESCAN_LOG_FORMAT",
        "PIPESCAN_LOG_OUTPUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn check_prints_analysis_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("pipeline.json");
    fs::write(&file, ACYCLIC).unwrap();

    pipescan(&dir)
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"num_nodes":2,"num_edges":1,"is_dag":true}"#,
        ));
}

#[test]
fn check_reports_cycle_without_failing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("loop.json");
    fs::write(&file, CYCLIC).unwrap();

    pipescan(&dir)
        .args(["check", "--pretty"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_dag\": false"))
        .stderr(predicate::str::contains("Pipeline contains a cycle: a -> b -> a"));
}

#[test]
fn check_keeps_stdout_clean_when_logs_target_stdout() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("loop.json");
    fs::write(&file, CYCLIC).unwrap();

    pipescan(&dir)
        .args(["--log-output", "stdout", "check"])
        .arg(&file)
        .assert()
        .success()
        .stdout("{\"num_nodes\":2,\"num_edges\":2,\"is_dag\":false}\n")
        .stderr(predicate::str::contains("Pipeline contains a cycle"));
}

#[test]
fn check_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    pipescan(&dir)
        .args(["check", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pipeline file"));
}

#[test]
fn check_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.json");
    fs::write(&file, r#"{"nodes": [], "edges": [{"source": "a"}]}"#).unwrap();

    pipescan(&dir)
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pipeline JSON"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    pipescan(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"));
}
