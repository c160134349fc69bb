//! Compile-time selection of frontier containers.
//!
//! [`Sizing`] maps a network's size class to concrete containers, and
//! [`SearchFlavour`] picks one of them and binds it to a graph instance:
//!
//! |                      | `Static<N>`                 | `Dynamic`          |
//! |----------------------|-----------------------------|--------------------|
//! | [`BreadthFirst`]     | `StaticQueue<usize, N>`     | `VecDeque<usize>`  |
//! | [`PseudoDepthFirst`] | `StaticStack<usize, N>`     | `Vec<usize>`       |
//! | [`PriorityFirst`]    | `StaticPriorityQueue<usize, N, _>` | `PriorityQueue<usize, _>` |

use std::collections::VecDeque;

use tracing::warn;

use super::frontier::{DiscoverySet, Frontier};
use super::priority::{ByNodeWeight, NodeComparer, NodePriority};
use crate::containers::{Compare, PriorityQueue, StaticPriorityQueue, StaticQueue, StaticStack};
use crate::error::{CapacityError, Error};
use crate::network::Network;

/// Size class of a network.
pub trait Sizing {
    /// FIFO frontier.
    type Queue: Frontier + Default;
    /// LIFO frontier.
    type Stack: Frontier + Default;
    /// Heap frontier ordered by `C`.
    type PriorityQueue<C: Compare<usize>>: Frontier;
    /// Per-node flag set.
    type Discovered: DiscoverySet;

    /// Largest order the containers above can hold, `None` if unbounded.
    const CAPACITY: Option<usize>;

    /// Creates an empty heap frontier using `compare`.
    fn priority_queue<C: Compare<usize>>(compare: C) -> Self::PriorityQueue<C>;
}

/// Networks with exactly `N` nodes known at compile time; never allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Static<const N: usize>;

/// Heap-backed networks whose order is only known at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dynamic;

impl<const N: usize> Sizing for Static<N> {
    type Queue = StaticQueue<usize, N>;
    type Stack = StaticStack<usize, N>;
    type PriorityQueue<C: Compare<usize>> = StaticPriorityQueue<usize, N, C>;
    type Discovered = [bool; N];

    const CAPACITY: Option<usize> = Some(N);

    fn priority_queue<C: Compare<usize>>(compare: C) -> Self::PriorityQueue<C> {
        StaticPriorityQueue::with_comparator(compare)
    }
}

impl Sizing for Dynamic {
    type Queue = VecDeque<usize>;
    type Stack = Vec<usize>;
    type PriorityQueue<C: Compare<usize>> = PriorityQueue<usize, C>;
    type Discovered = Vec<bool>;

    const CAPACITY: Option<usize> = None;

    fn priority_queue<C: Compare<usize>>(compare: C) -> Self::PriorityQueue<C> {
        PriorityQueue::with_comparator(compare)
    }
}

/// Fails if `graph` has more nodes than its sizing can hold.
///
/// Flag sets of a static sizing cannot mark nodes past `N`, so such a
/// traversal would never terminate on a cycle through them.
pub(crate) fn ensure_fits<G: Network>(graph: &G) -> Result<(), Error> {
    match <G::Sizing as Sizing>::CAPACITY {
        Some(capacity) if graph.order() > capacity => {
            warn!(order = graph.order(), capacity, "network larger than its static sizing");
            Err(CapacityError { capacity }.into())
        }
        _ => Ok(()),
    }
}

/// A search strategy: decides which frontier drives the traversal of `G`.
pub trait SearchFlavour<G: Network> {
    /// Frontier type, possibly borrowing the graph.
    type Frontier<'g>: Frontier
    where
        G: 'g;

    /// Creates an empty frontier bound to `graph`.
    fn make_frontier<'g>(self, graph: &'g G) -> Self::Frontier<'g>;
}

/// Breadth-first search: FIFO frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

/// Stack-driven depth-first-like search; no true postorder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PseudoDepthFirst;

/// Priority-first search: the frontier pops the node `P` ranks highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityFirst<P = ByNodeWeight>(pub P);

impl<G: Network> SearchFlavour<G> for BreadthFirst {
    type Frontier<'g>
        = <G::Sizing as Sizing>::Queue
    where
        G: 'g;

    fn make_frontier<'g>(self, _graph: &'g G) -> Self::Frontier<'g> {
        Default::default()
    }
}

impl<G: Network> SearchFlavour<G> for PseudoDepthFirst {
    type Frontier<'g>
        = <G::Sizing as Sizing>::Stack
    where
        G: 'g;

    fn make_frontier<'g>(self, _graph: &'g G) -> Self::Frontier<'g> {
        Default::default()
    }
}

impl<G: Network, P: NodePriority<G>> SearchFlavour<G> for PriorityFirst<P> {
    type Frontier<'g>
        = <G::Sizing as Sizing>::PriorityQueue<NodeComparer<'g, G, P>>
    where
        G: 'g;

    fn make_frontier<'g>(self, graph: &'g G) -> Self::Frontier<'g> {
        <G::Sizing as Sizing>::priority_queue(NodeComparer::new(graph, self.0))
    }
}
