//! Tests for task processing models.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    breadth_first_search, depth_first_search, HookKind, Scheduled, Serial, TaskHooks,
    TaskProcessingModel, TraversalConditions, TraversalVisitor,
};
use crate::network::{DynamicNetwork, EdgeRef, Undirected};

fn build_grid() -> DynamicNetwork<Undirected, u64> {
    let mut g = DynamicNetwork::new();
    for w in 0..9 {
        g.add_node(w * 10);
    }
    let edges = [
        (0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8),
        (0, 3), (3, 6), (1, 4), (4, 7), (2, 5), (5, 8),
    ];
    for (s, t) in edges {
        g.connect(s, t).unwrap();
    }
    g
}

#[test]
fn test_serial_runs_tasks_in_push_order() {
    let mut model = Serial::new();
    for n in 0..4 {
        TaskProcessingModel::push(&mut model, HookKind::NodeBeforeEdges, move || n * 2);
    }
    assert_eq!(model.results(), &[0, 2, 4, 6]);
    assert_eq!(model.into_results(), vec![0, 2, 4, 6]);
}

#[test]
fn test_scheduled_collects_hook_results() {
    let g = build_grid();
    let hooks = TaskHooks::new()
        .node_before_edges(|n: usize| format!("before {n}"))
        .node_after_edges(|n: usize| format!("after {n}"));

    let mut model = Serial::new();
    breadth_first_search(
        &g,
        TraversalConditions::new(0),
        &mut Scheduled::new(&hooks, &mut model),
    )
    .unwrap();

    let results = model.into_results();
    assert_eq!(results.len(), 18);
    assert_eq!(results[0], "before 0");
    assert_eq!(results[1], "after 0");
}

#[test]
fn test_empty_slots_schedule_nothing() {
    let g = build_grid();
    let calls = AtomicUsize::new(0);
    let hooks = TaskHooks::new().edge_first_traversal(|_: EdgeRef| {
        calls.fetch_add(1, Ordering::Relaxed);
    });

    let mut model = Serial::new();
    breadth_first_search(
        &g,
        TraversalConditions::new(0),
        &mut Scheduled::new(&hooks, &mut model),
    )
    .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 12);
    assert_eq!(model.into_results().len(), 12);
}

#[test]
fn test_scheduled_recursive_dfs() {
    let g = build_grid();
    let hooks = TaskHooks::new().edge_to_undiscovered_node(|e: EdgeRef| e.node);

    let mut model = Serial::new();
    depth_first_search(
        &g,
        TraversalConditions::new(0),
        &mut Scheduled::new(&hooks, &mut model),
    )
    .unwrap();

    // A spanning tree of 9 nodes has 8 edges.
    assert_eq!(model.into_results().len(), 8);
}

#[test]
fn test_scheduled_reports_second_traversal_slot() {
    fn observes<V: TraversalVisitor>(_: &V) -> bool {
        V::OBSERVES_SECOND_TRAVERSAL
    }

    let without = TaskHooks::new().node_before_edges(|n: usize| n);
    let with = TaskHooks::new().edge_second_traversal(|e: EdgeRef| e.node);
    let mut model = Serial::<usize>::new();
    assert!(!observes(&Scheduled::new(&without, &mut model)));
    assert!(observes(&Scheduled::new(&with, &mut model)));
}

#[cfg(feature = "parallel")]
mod pool {
    use super::*;
    use crate::network::Network;
    use crate::traversal::{TaskPool, ThreadConfig};

    #[test]
    fn test_pool_matches_serial() {
        let g = build_grid();
        let hooks = TaskHooks::new()
            .node_before_edges(|n: usize| g.node_weights()[n] + 1)
            .edge_first_traversal(|e: EdgeRef| (e.node * 100 + e.position) as u64)
            .edge_second_traversal(|e: EdgeRef| (e.node * 1_000 + e.position) as u64);

        let mut serial = Serial::new();
        breadth_first_search(
            &g,
            TraversalConditions::new(4),
            &mut Scheduled::new(&hooks, &mut serial),
        )
        .unwrap();

        let pool = TaskPool::new(ThreadConfig::Fixed(4)).unwrap();
        let (outcome, parallel) = pool.scope(|model| {
            breadth_first_search(
                &g,
                TraversalConditions::new(4),
                &mut Scheduled::new(&hooks, model),
            )
        });

        outcome.unwrap();
        assert_eq!(parallel, serial.into_results());
    }

    #[test]
    fn test_pool_thread_count() {
        let pool = TaskPool::new(ThreadConfig::Fixed(2)).unwrap();
        assert_eq!(pool.threads(), 2);

        let fallback = TaskPool::new(ThreadConfig::Fixed(0)).unwrap();
        assert_eq!(fallback.threads(), 1);
    }

    #[test]
    fn test_pool_counts_scheduled_tasks() {
        let pool = TaskPool::new(ThreadConfig::Auto).unwrap();
        let (scheduled, results) = pool.scope(|model| {
            for n in 0..50_u64 {
                model.push(HookKind::NodeAfterEdges, move || n);
            }
            model.scheduled()
        });
        assert_eq!(scheduled, 50);
        assert_eq!(results, (0..50).collect::<Vec<u64>>());
    }

    #[test]
    #[should_panic(expected = "task failed")]
    fn test_pool_propagates_panics() {
        let pool = TaskPool::new(ThreadConfig::Fixed(2)).unwrap();
        let _ = pool.scope(|model| {
            model.push(HookKind::NodeBeforeEdges, || -> u8 { panic!("task failed") });
        });
    }
}
