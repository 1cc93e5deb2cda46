//! Structural analysis: counts and cycle detection
//!
//! Cycle detection is a three-colour depth-first search driven by an explicit
//! work stack, so deeply chained pipelines cannot exhaust the call stack.
//! Roots are visited in node order and neighbours in edge order; the first
//! back-edge ends the search.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, Node, PipelineGraph};

/// Response body of `POST /pipelines/parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Nodes as received
    pub num_nodes: usize,
    /// Edges as received, dangling ones included
    pub num_edges: usize,
    /// Whether the valid edges form a directed acyclic graph
    pub is_dag: bool,
}

/// Traversal state of a node id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// One entry of the DFS work stack: a node, its targets and the next one to try
#[derive(Debug)]
struct Frame {
    node: NodeIndex,
    targets: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn enter(graph: &PipelineGraph<'_>, node: NodeIndex) -> Self {
        Self {
            node,
            targets: graph.successors(node),
            cursor: 0,
        }
    }
}

/// Count nodes and edges and check the pipeline for cycles
pub fn analyze(nodes: &[Node], edges: &[Edge]) -> AnalysisResult {
    let graph = PipelineGraph::build(nodes, edges);
    let is_dag = first_cycle(&graph).is_none();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        valid_edges = graph.valid_edge_count(),
        is_dag,
        "Pipeline analyzed"
    );

    AnalysisResult {
        num_nodes: nodes.len(),
        num_edges: edges.len(),
        is_dag,
    }
}

/// Return the node ids of the first cycle the search runs into
///
/// The ids are listed in path order starting at the node the back-edge
/// points to, so `a -> b -> c -> a` yields `["a", "b", "c"]` and a
/// self-loop on `a` yields `["a"]`.
pub fn find_cycle(nodes: &[Node], edges: &[Edge]) -> Option<Vec<String>> {
    let graph = PipelineGraph::build(nodes, edges);
    first_cycle(&graph).map(|path| path.into_iter().map(str::to_string).collect())
}

fn first_cycle<'a>(graph: &PipelineGraph<'a>) -> Option<Vec<&'a str>> {
    let mut colors = vec![Color::Unvisited; graph.vertex_count()];
    let mut stack: Vec<Frame> = Vec::new();

    for &root in graph.roots() {
        if colors[root.index()] != Color::Unvisited {
            continue;
        }

        colors[root.index()] = Color::InProgress;
        stack.push(Frame::enter(graph, root));

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.targets.get(frame.cursor) else {
                colors[frame.node.index()] = Color::Done;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            match colors[next.index()] {
                Color::InProgress => {
                    let start = stack.iter().position(|f| f.node == next).unwrap_or(0);
                    return Some(stack[start..].iter().map(|f| graph.id(f.node)).collect());
                }
                Color::Unvisited => {
                    colors[next.index()] = Color::InProgress;
                    stack.push(Frame::enter(graph, next));
                }
                Color::Done => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    include!("analysis.test.rs");
}
