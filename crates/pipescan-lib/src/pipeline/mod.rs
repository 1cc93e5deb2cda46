//! Pipeline graph model and structural analysis
//!
//! A pipeline arrives as an ordered list of nodes plus an ordered list of
//! directed edges. The types here mirror the wire format accepted by
//! `POST /pipelines/parse`; unknown fields sent by graph editors are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod analysis;
pub mod graph;

pub use analysis::{AnalysisResult, analyze, find_cycle};
pub use graph::PipelineGraph;

/// Canvas coordinates of a node (carried through, never inspected)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single pipeline step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, expected unique within a pipeline
    pub id: String,
    /// Node type tag (`llm`, `text`, `customInput`, ...), opaque here
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    /// Free-form node payload
    pub data: Map<String, Value>,
}

impl Node {
    /// Create a node with an origin position and empty payload
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: Position::default(),
            data: Map::new(),
        }
    }

    /// Place the node on the canvas
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    /// Attach a payload entry
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// A directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub id: String,
}

impl Edge {
    /// Create an edge with an id derived from its endpoints
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        let id = format!("{}->{}", source, target);
        Self { source, target, id }
    }

    /// Override the derived edge id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request body of `POST /pipelines/parse`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Pipeline {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Count nodes and edges and check acyclicity
    pub fn analyze(&self) -> AnalysisResult {
        analyze(&self.nodes, &self.edges)
    }

    /// Return the first cycle found, if any
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        find_cycle(&self.nodes, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
