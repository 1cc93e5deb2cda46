use super::*;
use serde_json::json;

#[test]
fn test_deserialize_editor_payload() {
    // Graph editors send extra bookkeeping fields alongside the required ones
    let body = json!({
        "nodes": [
            {
                "id": "customInput-1",
                "type": "customInput",
                "position": { "x": 100.0, "y": 250.5 },
                "data": { "id": "customInput-1", "nodeType": "customInput" },
                "width": 200,
                "height": 90,
                "selected": false
            },
            {
                "id": "llm-1",
                "type": "llm",
                "position": { "x": 400, "y": 250 },
                "data": {}
            }
        ],
        "edges": [
            {
                "source": "customInput-1",
                "sourceHandle": "customInput-1-value",
                "target": "llm-1",
                "targetHandle": "llm-1-prompt",
                "type": "smoothstep",
                "animated": true,
                "id": "reactflow__edge-customInput-1-llm-1"
            }
        ]
    });

    let pipeline: Pipeline = serde_json::from_value(body).unwrap();

    assert_eq!(pipeline.nodes.len(), 2);
    assert_eq!(pipeline.nodes[0].kind, "customInput");
    assert_eq!(pipeline.nodes[0].position, Position { x: 100.0, y: 250.5 });
    assert_eq!(pipeline.nodes[1].position, Position { x: 400.0, y: 250.0 });
    assert_eq!(pipeline.edges[0].source, "customInput-1");
    assert_eq!(pipeline.edges[0].target, "llm-1");
    assert_eq!(pipeline.edges[0].id, "reactflow__edge-customInput-1-llm-1");
}

#[test]
fn test_missing_required_field_is_rejected() {
    let body = json!({
        "nodes": [{ "id": "a", "type": "text", "position": { "x": 0, "y": 0 } }],
        "edges": []
    });

    assert!(serde_json::from_value::<Pipeline>(body).is_err());
}

#[test]
fn test_mistyped_field_is_rejected() {
    let body = json!({
        "nodes": [],
        "edges": [{ "source": "a", "target": 7, "id": "e1" }]
    });

    assert!(serde_json::from_value::<Pipeline>(body).is_err());
}

#[test]
fn test_node_type_serializes_as_type() {
    let node = Node::new("a", "text").at(1.0, 2.0).with_data("text", json!("{{input}}"));
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(value["type"], "text");
    assert_eq!(value["position"]["x"], 1.0);
    assert_eq!(value["data"]["text"], "{{input}}");
    assert!(value.get("kind").is_none());
}

#[test]
fn test_edge_builder_ids() {
    let edge = Edge::new("a", "b");
    assert_eq!(edge.id, "a->b");

    let edge = Edge::new("a", "b").with_id("e-1");
    assert_eq!(edge.id, "e-1");
    assert_eq!(edge.source, "a");
    assert_eq!(edge.target, "b");
}

#[test]
fn test_pipeline_analyze_delegates() {
    let pipeline = Pipeline::new(
        vec![Node::new("a", "input"), Node::new("b", "output")],
        vec![Edge::new("a", "b"), Edge::new("b", "a")],
    );

    let result = pipeline.analyze();
    assert_eq!(result.num_nodes, 2);
    assert_eq!(result.num_edges, 2);
    assert!(!result.is_dag);
    assert!(pipeline.find_cycle().is_some());
}
