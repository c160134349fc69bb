//! Tests for frontier dispatch.

use std::collections::VecDeque;

use super::{
    BreadthFirst, ByNodeWeight, DiscoverySet, Dynamic, EdgeOrder, Frontier, PriorityFirst,
    PseudoDepthFirst, SearchFlavour, Sizing, Static,
};
use crate::containers::{StaticQueue, StaticStack};
use crate::network::{Directed, DynamicNetwork, StaticNetwork};

fn drain<F: Frontier>(frontier: &mut F) -> Vec<usize> {
    let mut out = Vec::new();
    while let Some(node) = frontier.pop() {
        out.push(node);
    }
    out
}

#[test]
fn test_edge_orders() {
    assert_eq!(<StaticQueue<usize, 4> as Frontier>::EDGE_ORDER, EdgeOrder::Forward);
    assert_eq!(<StaticStack<usize, 4> as Frontier>::EDGE_ORDER, EdgeOrder::Reverse);
    assert_eq!(<VecDeque<usize> as Frontier>::EDGE_ORDER, EdgeOrder::Forward);
    assert_eq!(<Vec<usize> as Frontier>::EDGE_ORDER, EdgeOrder::Reverse);
}

#[test]
fn test_static_sizing_selects_bounded_containers() {
    let g = StaticNetwork::<Directed, (), (), 3, 0>::from_pairs(&[], [(); 3]).unwrap();

    let mut queue = BreadthFirst.make_frontier(&g);
    for n in [2, 0, 1] {
        queue.push(n).unwrap();
    }
    assert_eq!(queue.peek(), Some(2));
    assert!(queue.push(9).is_err());
    assert_eq!(drain(&mut queue), vec![2, 0, 1]);

    let mut stack = PseudoDepthFirst.make_frontier(&g);
    for n in [2, 0, 1] {
        stack.push(n).unwrap();
    }
    assert_eq!(stack.peek(), Some(1));
    assert_eq!(drain(&mut stack), vec![1, 0, 2]);
}

#[test]
fn test_dynamic_sizing_grows() {
    let g = DynamicNetwork::<Directed>::from_pairs(2, &[]).unwrap();
    let mut queue = BreadthFirst.make_frontier(&g);
    for n in 0..100 {
        queue.push(n).unwrap();
    }
    assert_eq!(queue.len(), 100);
    assert!(!queue.is_empty());
}

#[test]
fn test_priority_frontier_reads_graph_weights() {
    let g = StaticNetwork::<Directed, u8, (), 3, 0>::from_pairs(&[], [4, 7, 1]).unwrap();
    let mut heap = PriorityFirst(ByNodeWeight::new()).make_frontier(&g);
    for n in 0..3 {
        heap.push(n).unwrap();
    }
    assert_eq!(heap.peek(), Some(1));
    assert_eq!(drain(&mut heap), vec![1, 0, 2]);

    let mut dynamic = DynamicNetwork::<Directed, u8>::new();
    for w in [4, 7, 1] {
        dynamic.add_node(w);
    }
    let mut heap = PriorityFirst(ByNodeWeight::new()).make_frontier(&dynamic);
    for n in 0..3 {
        Frontier::push(&mut heap, n).unwrap();
    }
    assert_eq!(drain(&mut heap), vec![1, 0, 2]);
}

#[test]
fn test_discovery_sets() {
    let mut fixed = <Static<4> as Sizing>::Discovered::for_order(4);
    let mut growable = <Dynamic as Sizing>::Discovered::for_order(4);

    for set in [&mut fixed[..], &mut growable[..]] {
        assert!(set.iter().all(|flag| !flag));
    }

    fixed.insert(0);
    fixed.insert(2);
    fixed.insert(10);
    assert!(fixed.contains(2));
    assert!(!fixed.contains(10));
    assert_eq!(fixed.first_unmarked(0, 4), Some(1));
    assert_eq!(fixed.first_unmarked(2, 4), Some(3));

    // `Vec::insert` shadows the trait method.
    for n in 0..4 {
        DiscoverySet::insert(&mut growable, n);
    }
    assert_eq!(growable.first_unmarked(0, 4), None);
}
