//! Pipeline payload fixtures for end-to-end tests
//!
//! Payloads are shaped like the ones a graph editor posts: nodes carry
//! positions, payloads and editor bookkeeping fields the server must ignore.

use serde_json::{Value, json};

/// A node as a graph editor would send it
pub fn editor_node(id: &str, kind: &str, x: f64, y: f64) -> Value {
    json!({
        "id": id,
        "type": kind,
        "position": { "x": x, "y": y },
        "positionAbsolute": { "x": x, "y": y },
        "data": { "id": id, "nodeType": kind },
        "width": 220,
        "height": 120,
        "selected": false,
        "dragging": false
    })
}

/// An edge as a graph editor would send it
pub fn editor_edge(source: &str, target: &str) -> Value {
    json!({
        "source": source,
        "sourceHandle": format!("{}-output", source),
        "target": target,
        "targetHandle": format!("{}-input", target),
        "type": "smoothstep",
        "animated": true,
        "markerEnd": { "type": "arrow", "height": "20px", "width": "20px" },
        "id": format!("reactflow__edge-{}-{}", source, target)
    })
}

/// Build a request body from node ids and `(source, target)` pairs
pub fn pipeline_payload(node_ids: &[&str], edges: &[(&str, &str)]) -> Value {
    let nodes: Vec<Value> = node_ids
        .iter()
        .enumerate()
        .map(|(i, id)| editor_node(id, "text", i as f64 * 250.0, 100.0))
        .collect();
    let edges: Vec<Value> = edges.iter().map(|(s, t)| editor_edge(s, t)).collect();

    json!({ "nodes": nodes, "edges": edges })
}

/// A realistic prompt pipeline: input -> text -> llm -> output, plus a filter branch
pub fn prompt_pipeline() -> Value {
    json!({
        "nodes": [
            editor_node("customInput-1", "customInput", 0.0, 0.0),
            editor_node("text-1", "text", 250.0, 0.0),
            editor_node("llm-1", "llm", 500.0, 0.0),
            editor_node("filter-1", "filter", 500.0, 200.0),
            editor_node("customOutput-1", "customOutput", 750.0, 0.0)
        ],
        "edges": [
            editor_edge("customInput-1", "text-1"),
            editor_edge("text-1", "llm-1"),
            editor_edge("customInput-1", "filter-1"),
            editor_edge("filter-1", "llm-1"),
            editor_edge("llm-1", "customOutput-1")
        ]
    })
}
