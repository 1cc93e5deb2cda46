//! E2E tests for `POST /pipelines/parse`
//!
//! Each test starts a real server on a loopback port and talks to it over
//! HTTP, the way the graph editor does.

use anyhow::Result;
use pipescan_tests::{TestServer, editor_edge, editor_node, pipeline_payload, prompt_pipeline};
use serde_json::json;

#[tokio::test]
async fn realistic_prompt_pipeline_is_dag() -> Result<()> {
    let server = TestServer::start().await?;

    let (status, body) = server.parse(&prompt_pipeline()).await?;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "num_nodes": 5, "num_edges": 5, "is_dag": true }));

    server.stop().await
}

#[tokio::test]
async fn empty_pipeline() -> Result<()> {
    let server = TestServer::start().await?;

    let (status, body) = server.parse(&pipeline_payload(&[], &[])).await?;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "num_nodes": 0, "num_edges": 0, "is_dag": true }));

    server.stop().await
}

#[tokio::test]
async fn small_graph_verdicts() -> Result<()> {
    let server = TestServer::start().await?;

    let cases: Vec<(Vec<&str>, Vec<(&str, &str)>, bool)> = vec![
        (vec!["a"], vec![], true),
        (vec!["a", "b"], vec![("a", "b")], true),
        (vec!["a", "b"], vec![("a", "b"), ("b", "a")], false),
        (vec!["a", "b", "c"], vec![("a", "b"), ("b", "c")], true),
        (vec!["a", "b", "c"], vec![("a", "b"), ("b", "c"), ("c", "a")], false),
        (vec!["a"], vec![("a", "a")], false),
    ];

    for (nodes, edges, expected) in cases {
        let (status, body) = server.parse(&pipeline_payload(&nodes, &edges)).await?;

        assert_eq!(status, 200);
        assert_eq!(body["num_nodes"], nodes.len());
        assert_eq!(body["num_edges"], edges.len());
        assert_eq!(
            body["is_dag"], expected,
            "nodes {:?} edges {:?}",
            nodes, edges
        );
    }

    server.stop().await
}

#[tokio::test]
async fn dangling_edge_counted_but_ignored() -> Result<()> {
    let server = TestServer::start().await?;

    // b -> deleted-node -> a would close a loop if the node still existed
    let payload = pipeline_payload(
        &["a", "b"],
        &[("a", "b"), ("b", "deleted-node"), ("deleted-node", "a")],
    );
    let (status, body) = server.parse(&payload).await?;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "num_nodes": 2, "num_edges": 3, "is_dag": true }));

    server.stop().await
}

#[tokio::test]
async fn repeated_requests_are_identical() -> Result<()> {
    let server = TestServer::start().await?;
    let payload = pipeline_payload(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "b")]);

    let first = server.parse(&payload).await?;
    let second = server.parse(&payload).await?;

    assert_eq!(first, second);
    assert_eq!(first.1["is_dag"], false);

    server.stop().await
}

#[tokio::test]
async fn concurrent_requests_are_independent() -> Result<()> {
    let server = TestServer::start().await?;
    let acyclic = pipeline_payload(&["a", "b"], &[("a", "b")]);
    let cyclic = pipeline_payload(&["a", "b"], &[("a", "b"), ("b", "a")]);

    let mut tasks = Vec::new();
    for i in 0..16 {
        let client = server.client().clone();
        let url = server.url("/pipelines/parse");
        let payload = if i % 2 == 0 { acyclic.clone() } else { cyclic.clone() };
        tasks.push(tokio::spawn(async move {
            let body: serde_json::Value = client.post(url).json(&payload).send().await?.json().await?;
            Ok::<_, reqwest::Error>((i, body))
        }));
    }

    for task in tasks {
        let (i, body) = task.await??;
        assert_eq!(body["is_dag"], i % 2 == 0);
    }

    server.stop().await
}

#[tokio::test]
async fn missing_required_field_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let mut node = editor_node("a", "text", 0.0, 0.0);
    node.as_object_mut().unwrap().remove("data");
    let payload = json!({ "nodes": [node], "edges": [] });

    let (status, body) = server.parse(&payload).await?;

    assert_eq!(status, 422);
    assert!(body["detail"].as_str().unwrap().contains("data"));

    server.stop().await
}

#[tokio::test]
async fn mistyped_edge_is_rejected() -> Result<()> {
    let server = TestServer::start().await?;

    let mut edge = editor_edge("a", "b");
    edge["target"] = json!(42);
    let payload = json!({ "nodes": [editor_node("a", "text", 0.0, 0.0)], "edges": [edge] });

    let (status, body) = server.parse(&payload).await?;

    assert_eq!(status, 422);
    assert!(body["detail"].is_string());

    server.stop().await
}

#[tokio::test]
async fn unparseable_body_is_bad_request() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .client()
        .post(server.url("/pipelines/parse"))
        .header("content-type", "application/json")
        .body("{\"nodes\": [")
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await?;
    assert!(body["detail"].is_string());

    server.stop().await
}
