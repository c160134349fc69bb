//! Tests for recursive depth-first search.

use super::{depth_first_search, DisconnectedMode, Hooks, TraversalConditions};
use crate::network::{Directed, DynamicNetwork, EdgeRef, StaticNetwork, Undirected};

fn finish_order<G: crate::network::Network>(g: &G, conditions: TraversalConditions) -> Vec<usize> {
    let mut finished = Vec::new();
    let mut hooks = Hooks::new().node_after_edges(|n| finished.push(n));
    depth_first_search(g, conditions, &mut hooks).unwrap();
    finished
}

#[test]
fn test_finish_order_is_postorder() {
    // 0 -> 1 -> 2, 0 -> 3
    let g = DynamicNetwork::<Directed>::from_pairs(4, &[(0, 1), (1, 2), (0, 3)]).unwrap();
    assert_eq!(finish_order(&g, TraversalConditions::new(0)), vec![2, 1, 3, 0]);
}

#[test]
fn test_reverse_topological_order_on_dag() {
    let g = DynamicNetwork::<Directed>::from_pairs(
        5,
        &[(0, 2), (1, 2), (2, 3), (3, 4), (1, 4)],
    )
    .unwrap();
    let finished = finish_order(&g, TraversalConditions::new(0));
    assert_eq!(finished.len(), 5);

    let position = |n: usize| finished.iter().position(|&x| x == n).unwrap();
    for (s, t) in [(0, 2), (1, 2), (2, 3), (3, 4), (1, 4)] {
        assert!(position(t) < position(s), "edge {s}->{t} finished out of order");
    }
}

#[test]
fn test_edge_to_undiscovered_node() {
    let g = StaticNetwork::<Undirected, (), (), 3, 6>::from_pairs(&[(0, 1), (1, 2), (2, 0)], [(); 3])
        .unwrap();
    let mut tree_edges = Vec::new();
    let mut discovered = Vec::new();
    let mut hooks = Hooks::new()
        .node_before_edges(|n| discovered.push(n))
        .edge_to_undiscovered_node(|e| tree_edges.push(e));
    depth_first_search(&g, TraversalConditions::new(0), &mut hooks).unwrap();

    assert_eq!(discovered, vec![0, 1, 2]);
    assert_eq!(tree_edges, vec![EdgeRef::new(0, 0), EdgeRef::new(1, 1)]);
}

#[test]
fn test_disconnected_modes() {
    let g = DynamicNetwork::<Directed>::from_pairs(4, &[(2, 3)]).unwrap();
    assert_eq!(finish_order(&g, TraversalConditions::new(2)), vec![3, 2, 0, 1]);
    assert_eq!(
        finish_order(
            &g,
            TraversalConditions::new(2).with_disconnected(DisconnectedMode::Ignore)
        ),
        vec![3, 2]
    );
}

#[test]
fn test_out_of_range_start() {
    let g = DynamicNetwork::<Directed>::from_pairs(2, &[(0, 1)]).unwrap();
    assert!(finish_order(&g, TraversalConditions::new(2)).is_empty());
}

#[test]
fn test_deep_chain() {
    let pairs: Vec<(usize, usize)> = (0..1_000).map(|n| (n, n + 1)).collect();
    let g = DynamicNetwork::<Directed>::from_pairs(1_001, &pairs).unwrap();
    let finished = finish_order(&g, TraversalConditions::new(0));
    assert_eq!(finished.first(), Some(&1_000));
    assert_eq!(finished.last(), Some(&0));
}
