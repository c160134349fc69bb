//! Node priorities for priority-first search.

use std::cmp::Ordering;

use crate::containers::{Compare, NaturalOrder};
use crate::network::Network;

/// Ranks two nodes of a graph; the greater node is expanded first.
pub trait NodePriority<G: ?Sized> {
    /// Compares nodes `a` and `b` of `graph`.
    fn compare(&self, graph: &G, a: usize, b: usize) -> Ordering;
}

impl<G: ?Sized, F> NodePriority<G> for F
where
    F: Fn(&G, usize, usize) -> Ordering,
{
    fn compare(&self, graph: &G, a: usize, b: usize) -> Ordering {
        self(graph, a, b)
    }
}

/// Orders nodes by their weight under `O`.
///
/// The default, `ByNodeWeight<NaturalOrder>`, expands the heaviest node
/// first. Use [`Reversed`](crate::containers::Reversed) for lightest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByNodeWeight<O = NaturalOrder>(pub O);

impl ByNodeWeight {
    /// Heaviest node first.
    #[must_use]
    pub const fn new() -> Self {
        Self(NaturalOrder)
    }
}

impl<G, O> NodePriority<G> for ByNodeWeight<O>
where
    G: Network,
    O: Compare<G::NodeWeight>,
{
    fn compare(&self, graph: &G, a: usize, b: usize) -> Ordering {
        match (graph.node_weight(a), graph.node_weight(b)) {
            (Some(x), Some(y)) => self.0.compare(x, y),
            (lhs, rhs) => lhs.is_some().cmp(&rhs.is_some()),
        }
    }
}

/// A [`NodePriority`] bound to one graph, usable as a container comparator.
#[derive(Debug, Clone, Copy)]
pub struct NodeComparer<'g, G, P> {
    graph: &'g G,
    priority: P,
}

impl<'g, G, P> NodeComparer<'g, G, P> {
    /// Binds `priority` to `graph`.
    #[must_use]
    pub fn new(graph: &'g G, priority: P) -> Self {
        Self { graph, priority }
    }
}

impl<G, P: NodePriority<G>> Compare<usize> for NodeComparer<'_, G, P> {
    fn compare(&self, a: &usize, b: &usize) -> Ordering {
        self.priority.compare(self.graph, *a, *b)
    }
}
