//! E2E tests for the liveness route and the cross-origin policy

use anyhow::Result;
use pipescan_lib::ServerConfig;
use pipescan_tests::{TestServer, pipeline_payload};
use std::net::SocketAddr;

#[tokio::test]
async fn health_check_answers_pong() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.client().get(server.url("/")).send().await?;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({ "Ping": "Pong" }));

    server.stop().await
}

#[tokio::test]
async fn browser_origin_is_allowed() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .client()
        .post(server.url("/pipelines/parse"))
        .header("origin", "http://localhost:3000")
        .json(&pipeline_payload(&["a"], &[]))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );

    server.stop().await
}

#[tokio::test]
async fn preflight_allows_any_method_and_header() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/pipelines/parse"))
        .header("origin", "https://pipelines.example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-request-id")
        .send()
        .await?;

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://pipelines.example.org"
    );
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(
        headers["access-control-allow-headers"],
        "content-type,x-request-id"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");

    server.stop().await
}

#[tokio::test]
async fn oversized_body_is_rejected() -> Result<()> {
    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0))).with_body_limit(256);
    let server = TestServer::start_with(config).await?;

    let ids: Vec<String> = (0..50).map(|i| format!("node-{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let (status, _) = server.parse(&pipeline_payload(&id_refs, &[])).await?;

    assert_eq!(status, 413);

    server.stop().await
}
