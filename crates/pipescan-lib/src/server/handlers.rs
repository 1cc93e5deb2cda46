use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::ApiError;
use crate::pipeline::{AnalysisResult, Pipeline};

/// `GET /` liveness check
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// `POST /pipelines/parse`
pub async fn parse_pipeline(
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(pipeline) = payload?;

    debug!(
        nodes = pipeline.nodes.len(),
        edges = pipeline.edges.len(),
        "Analyzing pipeline"
    );
    let result = pipeline.analyze();

    info!(
        num_nodes = result.num_nodes,
        num_edges = result.num_edges,
        is_dag = result.is_dag,
        "Pipeline parsed"
    );

    Ok(Json(result))
}
