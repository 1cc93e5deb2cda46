use super::*;
use std::fs;
use tempfile::TempDir;

fn write_pipeline(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const CHAIN: &str = r#"{
    "nodes": [
        {"id": "in", "type": "customInput", "position": {"x": 0, "y": 0}, "data": {}},
        {"id": "llm", "type": "llm", "position": {"x": 200, "y": 0}, "data": {}},
        {"id": "out", "type": "customOutput", "position": {"x": 400, "y": 0}, "data": {}}
    ],
    "edges": [
        {"source": "in", "target": "llm", "id": "e1"},
        {"source": "llm", "target": "out", "id": "e2"},
        {"source": "llm", "target": "missing", "id": "e3"}
    ]
}"#;

const LOOP: &str = r#"{
    "nodes": [
        {"id": "a", "type": "text", "position": {"x": 0, "y": 0}, "data": {}},
        {"id": "b", "type": "text", "position": {"x": 0, "y": 0}, "data": {}}
    ],
    "edges": [
        {"source": "a", "target": "b", "id": "e1"},
        {"source": "b", "target": "a", "id": "e2"}
    ]
}"#;

#[tokio::test]
async fn test_check_file_reports_dag() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "chain.json", CHAIN);

    let report = check_file(&path).await.unwrap();
    assert_eq!(
        report.result,
        AnalysisResult {
            num_nodes: 3,
            num_edges: 3,
            is_dag: true
        }
    );
    assert_eq!(report.cycle, None);
}

#[tokio::test]
async fn test_check_file_reports_cycle_witness() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "loop.json", LOOP);

    let report = check_file(&path).await.unwrap();
    assert!(!report.result.is_dag);
    assert_eq!(report.cycle, Some(vec!["a".to_string(), "b".to_string()]));
}

#[tokio::test]
async fn test_check_file_missing() {
    let dir = TempDir::new().unwrap();
    let err = check_file(&dir.path().join("absent.json")).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read pipeline file"));
}

#[tokio::test]
async fn test_check_file_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "bad.json", r#"{"nodes": [], "edges": [{"id": "e1"}]}"#);

    let err = check_file(&path).await.unwrap_err();
    assert!(err.to_string().contains("Invalid pipeline JSON"));
}

#[tokio::test]
async fn test_handle_check_writes_json() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "loop.json", LOOP);

    let mut out: Vec<u8> = Vec::new();
    handle_check(&path, false, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed.trim(),
        r#"{"num_nodes":2,"num_edges":2,"is_dag":false}"#
    );
}

#[tokio::test]
async fn test_handle_check_pretty() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "chain.json", CHAIN);

    let mut out: Vec<u8> = Vec::new();
    handle_check(&path, true, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("\n  \"is_dag\": true"));
}
