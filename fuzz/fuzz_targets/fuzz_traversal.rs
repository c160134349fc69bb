//! Fuzz target for the traversal engine.
//!
//! Builds an arbitrary undirected network and runs every search over it.
//! With `DisconnectedMode::Find` each search must visit every node exactly
//! once and classify every edge exactly once in each direction.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_traversal
//! ```

#![no_main]

use arbitrary::Arbitrary;
use graphwalk_core::traversal::ByNodeWeight;
use graphwalk_core::{
    breadth_first_search, priority_first_search, pseudo_depth_first_search, DynamicNetwork,
    EdgeRef, Hooks, TraversalConditions, Undirected,
};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for a small undirected network.
#[derive(Arbitrary, Debug)]
struct NetworkInput {
    weights: Vec<u8>,
    pairs: Vec<(u8, u8)>,
    start: u8,
}

fuzz_target!(|input: NetworkInput| {
    // Limit order to keep runs fast
    let order = input.weights.len().min(64);
    if order == 0 {
        return;
    }

    let mut g = DynamicNetwork::<Undirected, u8>::new();
    for &w in &input.weights[..order] {
        g.add_node(w);
    }
    let mut edges = 0;
    for &(s, t) in input.pairs.iter().take(256) {
        if g.connect(usize::from(s) % order, usize::from(t) % order).is_ok() {
            edges += 1;
        }
    }
    let conditions = TraversalConditions::new(usize::from(input.start) % order);

    for search in 0..3 {
        let mut visited = vec![0u8; order];
        let (mut first, mut second) = (0, 0);
        let mut hooks = Hooks::new()
            .node_before_edges(|n| visited[n] += 1)
            .edge_first_traversal(|_: EdgeRef| first += 1)
            .edge_second_traversal(|_: EdgeRef| second += 1);
        match search {
            0 => breadth_first_search(&g, conditions, &mut hooks),
            1 => pseudo_depth_first_search(&g, conditions, &mut hooks),
            _ => priority_first_search(&g, conditions, ByNodeWeight::new(), &mut hooks),
        }
        .unwrap();
        drop(hooks);

        assert!(visited.iter().all(|&v| v == 1));
        assert_eq!(first, edges);
        assert_eq!(second, edges);
    }
});
