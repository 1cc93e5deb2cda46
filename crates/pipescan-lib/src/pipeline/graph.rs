//! Directed graph over a borrowed pipeline
//!
//! Only edges whose endpoints are both known node ids take part in the
//! graph. Dangling edges are remembered by id for diagnostics.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::{debug, trace};

use super::{Edge, Node};

/// Directed graph view of a pipeline, borrowing ids from the request
#[derive(Debug, Clone)]
pub struct PipelineGraph<'a> {
    /// Directed graph: nodes = distinct ids, edges weighted by edge id
    graph: DiGraph<&'a str, &'a str>,
    /// Map from node id to node index; repeated ids share one index
    node_map: HashMap<&'a str, NodeIndex>,
    /// One index per supplied node, in supply order (duplicates kept)
    order: Vec<NodeIndex>,
    dangling: Vec<&'a str>,
}

impl<'a> PipelineGraph<'a> {
    /// Build the graph from nodes and edges
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::with_capacity(nodes.len());

        let order: Vec<NodeIndex> = nodes
            .iter()
            .map(|node| {
                let id = node.id.as_str();
                *node_map.entry(id).or_insert_with(|| graph.add_node(id))
            })
            .collect();

        let mut dangling = Vec::new();

        for edge in edges {
            let endpoints = (
                node_map.get(edge.source.as_str()),
                node_map.get(edge.target.as_str()),
            );
            match endpoints {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, edge.id.as_str());
                }
                _ => {
                    trace!(
                        edge = %edge.id,
                        source = %edge.source,
                        target = %edge.target,
                        "Skipping edge with unknown endpoint"
                    );
                    dangling.push(edge.id.as_str());
                }
            }
        }

        if !dangling.is_empty() {
            debug!(count = dangling.len(), edges = ?dangling, "Ignored dangling edges");
        }

        Self {
            graph,
            node_map,
            order,
            dangling,
        }
    }

    /// Node indices in supply order
    pub fn roots(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Node id stored at `index`
    pub fn id(&self, index: NodeIndex) -> &'a str {
        self.graph[index]
    }

    /// Index of a node id, if the pipeline has it
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Number of distinct node ids
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Outgoing targets of a node in the order their edges were supplied
    ///
    /// petgraph walks a node's edge list newest first; sorting by edge index
    /// restores request order. Parallel edges are kept.
    pub fn successors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut outgoing: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
            .collect();
        outgoing.sort_unstable_by_key(|&(edge, _)| edge);
        outgoing.into_iter().map(|(_, target)| target).collect()
    }

    /// Number of edges with both endpoints known
    pub fn valid_edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Ids of edges excluded from the graph
    pub fn dangling_edges(&self) -> &[&'a str] {
        &self.dangling
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
