use super::*;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id, "text")).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
}

fn indexed_nodes(count: usize) -> Vec<Node> {
    (0..count).map(|i| Node::new(format!("n{}", i), "text")).collect()
}

fn indexed_edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|(s, t)| Edge::new(format!("n{}", s), format!("n{}", t)))
        .collect()
}

/// Cycle verdict from petgraph, used as an independent oracle
fn oracle_is_cyclic(count: usize, pairs: &[(usize, usize)]) -> bool {
    let mut graph = DiGraph::<(), ()>::new();
    let indices: Vec<_> = (0..count).map(|_| graph.add_node(())).collect();
    for &(s, t) in pairs {
        graph.add_edge(indices[s], indices[t], ());
    }
    is_cyclic_directed(&graph)
}

/// Check that consecutive witness ids (wrapping around) are joined by edges
fn assert_witness_is_cycle(cycle: &[String], edges: &[Edge]) {
    assert!(!cycle.is_empty(), "Cycle witness should not be empty");
    for i in 0..cycle.len() {
        let from = &cycle[i];
        let to = &cycle[(i + 1) % cycle.len()];
        assert!(
            edges.iter().any(|e| &e.source == from && &e.target == to),
            "Witness step {} -> {} is not an edge",
            from,
            to
        );
    }
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn test_empty_graph() {
    let result = analyze(&[], &[]);
    assert_eq!(
        result,
        AnalysisResult {
            num_nodes: 0,
            num_edges: 0,
            is_dag: true
        }
    );
}

#[test]
fn test_counts_match_input_lengths() {
    let nodes = nodes(&["a", "b", "c", "d"]);
    let edges = edges(&[("a", "b"), ("b", "c"), ("c", "d")]);

    let result = analyze(&nodes, &edges);
    assert_eq!(result.num_nodes, 4);
    assert_eq!(result.num_edges, 3);
    assert!(result.is_dag);
}

#[test]
fn test_dangling_edge_counted_but_not_analyzed() {
    let nodes = nodes(&["a", "b"]);
    // b -> ghost -> a would close a cycle if the ghost node existed
    let edges = edges(&[("a", "b"), ("b", "ghost"), ("ghost", "a")]);

    let result = analyze(&nodes, &edges);
    assert_eq!(result.num_edges, 3);
    assert!(result.is_dag);
}

#[test]
fn test_edges_without_nodes() {
    let edges = edges(&[("a", "b"), ("b", "a")]);

    let result = analyze(&[], &edges);
    assert_eq!(result.num_nodes, 0);
    assert_eq!(result.num_edges, 2);
    assert!(result.is_dag);
}

// ============================================================================
// Cycle Detection
// ============================================================================

#[test]
fn test_single_node_is_dag() {
    assert!(analyze(&nodes(&["a"]), &[]).is_dag);
}

#[test]
fn test_single_edge_is_dag() {
    assert!(analyze(&nodes(&["a", "b"]), &edges(&[("a", "b")])).is_dag);
}

#[test]
fn test_two_node_cycle() {
    let result = analyze(&nodes(&["a", "b"]), &edges(&[("a", "b"), ("b", "a")]));
    assert!(!result.is_dag);
}

#[test]
fn test_three_node_cycle_and_chain() {
    let ids = nodes(&["a", "b", "c"]);

    assert!(!analyze(&ids, &edges(&[("a", "b"), ("b", "c"), ("c", "a")])).is_dag);
    assert!(analyze(&ids, &edges(&[("a", "b"), ("b", "c")])).is_dag);
}

#[test]
fn test_self_loop() {
    let result = analyze(&nodes(&["a"]), &edges(&[("a", "a")]));
    assert!(!result.is_dag);
}

#[test]
fn test_diamond_is_dag() {
    // Reaching d twice through finished branches is not a cycle
    let ids = nodes(&["a", "b", "c", "d"]);
    let links = edges(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);

    assert!(analyze(&ids, &links).is_dag);
}

#[test]
fn test_cross_edge_into_finished_tree_is_dag() {
    // c is visited as a later root and points into the finished a-tree
    let ids = nodes(&["a", "b", "c"]);
    let links = edges(&[("a", "b"), ("c", "b"), ("c", "a")]);

    assert!(analyze(&ids, &links).is_dag);
}

#[test]
fn test_cycle_reached_from_later_root() {
    let ids = nodes(&["x", "a", "b", "c"]);
    let links = edges(&[("a", "b"), ("b", "c"), ("c", "b")]);

    assert!(!analyze(&ids, &links).is_dag);
}

#[test]
fn test_parallel_edges_are_not_a_cycle() {
    let ids = nodes(&["a", "b"]);
    let links = vec![
        Edge::new("a", "b").with_id("e1"),
        Edge::new("a", "b").with_id("e2"),
    ];

    assert!(analyze(&ids, &links).is_dag);
}

#[test]
fn test_duplicate_node_ids_share_state() {
    // Both "a" entries count, but they share one colour
    let ids = nodes(&["a", "b", "a"]);

    let result = analyze(&ids, &edges(&[("a", "b")]));
    assert_eq!(result.num_nodes, 3);
    assert!(result.is_dag);

    let result = analyze(&ids, &edges(&[("a", "b"), ("b", "a")]));
    assert!(!result.is_dag);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let count = 200_000;
    let ids = indexed_nodes(count);
    let mut pairs: Vec<(usize, usize)> = (0..count - 1).map(|i| (i, i + 1)).collect();

    assert!(analyze(&ids, &indexed_edges(&pairs)).is_dag);

    pairs.push((count - 1, 0));
    assert!(!analyze(&ids, &indexed_edges(&pairs)).is_dag);
}

#[test]
fn test_analyze_is_idempotent() {
    let ids = nodes(&["a", "b", "c"]);
    let links = edges(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "ghost")]);

    let first = analyze(&ids, &links);
    let second = analyze(&ids, &links);
    assert_eq!(first, second);
}

// ============================================================================
// Cycle Witness
// ============================================================================

#[test]
fn test_find_cycle_none_for_dag() {
    let ids = nodes(&["a", "b", "c"]);
    assert_eq!(find_cycle(&ids, &edges(&[("a", "b"), ("b", "c")])), None);
}

#[test]
fn test_find_cycle_path_order() {
    let ids = nodes(&["a", "b", "c"]);
    let links = edges(&[("a", "b"), ("b", "c"), ("c", "a")]);

    assert_eq!(
        find_cycle(&ids, &links),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_find_cycle_excludes_path_prefix() {
    // The tail entry -> a is on the stack but not part of the cycle
    let ids = nodes(&["entry", "a", "b"]);
    let links = edges(&[("entry", "a"), ("a", "b"), ("b", "a")]);

    assert_eq!(
        find_cycle(&ids, &links),
        Some(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn test_find_cycle_self_loop() {
    let ids = nodes(&["a", "b"]);
    let links = edges(&[("a", "b"), ("b", "b")]);

    assert_eq!(find_cycle(&ids, &links), Some(vec!["b".to_string()]));
}

#[test]
fn test_find_cycle_follows_edge_order() {
    // Both branches of a close a loop; the earlier edge is explored first
    let ids = nodes(&["a", "b", "c"]);
    let links = edges(&[("a", "b"), ("a", "c"), ("b", "a"), ("c", "a")]);

    assert_eq!(
        find_cycle(&ids, &links),
        Some(vec!["a".to_string(), "b".to_string()])
    );

    let swapped = edges(&[("a", "c"), ("a", "b"), ("b", "a"), ("c", "a")]);
    assert_eq!(
        find_cycle(&ids, &swapped),
        Some(vec!["a".to_string(), "c".to_string()])
    );
}

// ============================================================================
// Properties
// ============================================================================

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..10).prop_flat_map(|count| {
        (
            Just(count),
            prop::collection::vec((0..count, 0..count), 0..24),
        )
    })
}

proptest! {
    #[test]
    fn prop_verdict_matches_oracle((count, pairs) in graph_strategy()) {
        let result = analyze(&indexed_nodes(count), &indexed_edges(&pairs));
        prop_assert_eq!(result.is_dag, !oracle_is_cyclic(count, &pairs));
    }

    #[test]
    fn prop_edge_order_does_not_change_verdict(
        (count, pairs) in graph_strategy(),
        rotation in 0usize..24,
    ) {
        let ids = indexed_nodes(count);
        let baseline = analyze(&ids, &indexed_edges(&pairs));

        let mut reversed = pairs.clone();
        reversed.reverse();
        prop_assert_eq!(analyze(&ids, &indexed_edges(&reversed)), baseline);

        let mut rotated = pairs.clone();
        if !rotated.is_empty() {
            let by = rotation % rotated.len();
            rotated.rotate_left(by);
        }
        prop_assert_eq!(analyze(&ids, &indexed_edges(&rotated)), baseline);
    }

    #[test]
    fn prop_witness_agrees_with_verdict((count, pairs) in graph_strategy()) {
        let ids = indexed_nodes(count);
        let links = indexed_edges(&pairs);

        match find_cycle(&ids, &links) {
            Some(cycle) => {
                prop_assert!(!analyze(&ids, &links).is_dag);
                assert_witness_is_cycle(&cycle, &links);
            }
            None => prop_assert!(analyze(&ids, &links).is_dag),
        }
    }
}
