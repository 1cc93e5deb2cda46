use super::*;

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id, "text")).collect()
}

fn targets<'a>(graph: &PipelineGraph<'a>, id: &str) -> Vec<&'a str> {
    match graph.index_of(id) {
        Some(index) => graph
            .successors(index)
            .into_iter()
            .map(|target| graph.id(target))
            .collect(),
        None => Vec::new(),
    }
}

fn root_ids<'a>(graph: &PipelineGraph<'a>) -> Vec<&'a str> {
    graph.roots().iter().map(|&index| graph.id(index)).collect()
}

#[test]
fn test_successors_follow_edge_order() {
    let nodes = nodes(&["a", "b", "c", "d"]);
    let edges = vec![
        Edge::new("a", "c"),
        Edge::new("b", "d"),
        Edge::new("a", "b"),
        Edge::new("a", "d"),
    ];

    let graph = PipelineGraph::build(&nodes, &edges);

    assert_eq!(targets(&graph, "a"), ["c", "b", "d"]);
    assert_eq!(targets(&graph, "b"), ["d"]);
    assert!(targets(&graph, "c").is_empty());
    assert_eq!(root_ids(&graph), ["a", "b", "c", "d"]);
}

#[test]
fn test_parallel_edges_are_kept() {
    let nodes = nodes(&["a", "b"]);
    let edges = vec![
        Edge::new("a", "b").with_id("e1"),
        Edge::new("a", "b").with_id("e2"),
    ];

    let graph = PipelineGraph::build(&nodes, &edges);

    assert_eq!(targets(&graph, "a"), ["b", "b"]);
    assert_eq!(graph.valid_edge_count(), 2);
}

#[test]
fn test_dangling_edges_are_filtered() {
    let nodes = nodes(&["a", "b"]);
    let edges = vec![
        Edge::new("a", "b").with_id("ok"),
        Edge::new("a", "ghost").with_id("bad-target"),
        Edge::new("ghost", "b").with_id("bad-source"),
    ];

    let graph = PipelineGraph::build(&nodes, &edges);

    assert_eq!(graph.valid_edge_count(), 1);
    assert_eq!(graph.dangling_edges(), &["bad-target", "bad-source"]);
    assert_eq!(targets(&graph, "a"), ["b"]);
    assert_eq!(graph.index_of("ghost"), None);
}

#[test]
fn test_empty_graph() {
    let graph = PipelineGraph::build(&[], &[]);

    assert!(graph.roots().is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.valid_edge_count(), 0);
    assert!(graph.dangling_edges().is_empty());
}

#[test]
fn test_duplicate_node_ids_share_a_vertex() {
    let nodes = nodes(&["a", "b", "a"]);
    let graph = PipelineGraph::build(&nodes, &[]);

    assert_eq!(root_ids(&graph), ["a", "b", "a"]);
    assert_eq!(graph.roots()[0], graph.roots()[2]);
    assert_eq!(graph.vertex_count(), 2);
}
