use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(PARSE_ROUTE)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health_route() {
    let request = Request::builder().uri(HEALTH_ROUTE).body(Body::empty()).unwrap();
    let (status, _, body) = send(test_config().router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Ping": "Pong" }));
}

#[tokio::test]
async fn test_parse_route_reports_cycle() {
    let payload = json!({
        "nodes": [
            { "id": "a", "type": "text", "position": { "x": 0, "y": 0 }, "data": {} },
            { "id": "b", "type": "llm", "position": { "x": 1, "y": 1 }, "data": {} }
        ],
        "edges": [
            { "source": "a", "target": "b", "id": "e1" },
            { "source": "b", "target": "a", "id": "e2" },
            { "source": "b", "target": "ghost", "id": "e3" }
        ]
    });

    let (status, _, body) = send(test_config().router(), post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "num_nodes": 2, "num_edges": 3, "is_dag": false }));
}

#[tokio::test]
async fn test_parse_route_empty_pipeline() {
    let (status, _, body) = send(
        test_config().router(),
        post_json(r#"{"nodes": [], "edges": []}"#.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "num_nodes": 0, "num_edges": 0, "is_dag": true }));
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let (status, _, body) = send(
        test_config().router(),
        post_json(r#"{"nodes": []}"#.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("edges"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, _, body) = send(test_config().router(), post_json("{nodes:".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri(PARSE_ROUTE)
        .body(Body::from(r#"{"nodes": [], "edges": []}"#))
        .unwrap();

    let (status, _, body) = send(test_config().router(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_body_limit_enforced() {
    let config = test_config().with_body_limit(64);
    let nodes: Vec<Value> = (0..10)
        .map(|i| json!({ "id": format!("n{}", i), "type": "text", "position": { "x": 0, "y": 0 }, "data": {} }))
        .collect();
    let payload = json!({ "nodes": nodes, "edges": [] });

    let (status, _, _) = send(config.router(), post_json(payload.to_string())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_cors_mirrors_any_origin() {
    let request = Request::builder()
        .uri(HEALTH_ROUTE)
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_config().router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri(PARSE_ROUTE)
        .header(header::ORIGIN, "https://editor.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(test_config().router(), request).await;

    assert!(status.is_success());
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://editor.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder().uri("/pipelines").body(Body::empty()).unwrap();
    let (status, _, _) = send(test_config().router(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_serve_on_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let config = test_config();
    let handle = tokio::spawn(async move {
        serve_on(listener, &config, async {
            let _ = rx.await;
        })
        .await
    });

    tx.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}

#[test]
fn test_server_error_display() {
    let err = ServerError::Bind {
        address: SocketAddr::from(([127, 0, 0, 1], 8000)),
        source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
    };
    assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:8000: address in use");
}
