//! Frontier and discovery-set abstractions over the containers.

use std::collections::VecDeque;

use crate::containers::{Compare, PriorityQueue, StaticPriorityQueue, StaticQueue, StaticStack};
use crate::error::CapacityError;

/// Order in which a node's adjacency list is walked during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrder {
    /// First edge first.
    Forward,
    /// Last edge first, so the first edge's target ends up on top of a stack.
    Reverse,
}

/// Pending node indices of a traversal.
pub trait Frontier {
    /// How the engine walks adjacency lists when feeding this frontier.
    const EDGE_ORDER: EdgeOrder;

    /// Adds a node.
    ///
    /// # Errors
    ///
    /// Bounded frontiers fail when full.
    fn push(&mut self, node: usize) -> Result<(), CapacityError>;

    /// The node the next `pop` returns.
    fn peek(&self) -> Option<usize>;

    /// Removes and returns the next node.
    fn pop(&mut self) -> Option<usize>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    /// Returns true if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> Frontier for StaticQueue<usize, N> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Forward;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        StaticQueue::push(self, node)
    }

    fn peek(&self) -> Option<usize> {
        self.front().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        StaticQueue::pop(self)
    }

    fn len(&self) -> usize {
        StaticQueue::len(self)
    }
}

impl<const N: usize> Frontier for StaticStack<usize, N> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Reverse;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        StaticStack::push(self, node)
    }

    fn peek(&self) -> Option<usize> {
        self.top().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        StaticStack::pop(self)
    }

    fn len(&self) -> usize {
        StaticStack::len(self)
    }
}

impl<const N: usize, C: Compare<usize>> Frontier for StaticPriorityQueue<usize, N, C> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Forward;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        StaticPriorityQueue::push(self, node)
    }

    fn peek(&self) -> Option<usize> {
        self.top().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        StaticPriorityQueue::pop(self)
    }

    fn len(&self) -> usize {
        StaticPriorityQueue::len(self)
    }
}

impl Frontier for VecDeque<usize> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Forward;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        self.push_back(node);
        Ok(())
    }

    fn peek(&self) -> Option<usize> {
        self.front().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl Frontier for Vec<usize> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Reverse;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        Vec::push(self, node);
        Ok(())
    }

    fn peek(&self) -> Option<usize> {
        self.last().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<C: Compare<usize>> Frontier for PriorityQueue<usize, C> {
    const EDGE_ORDER: EdgeOrder = EdgeOrder::Forward;

    fn push(&mut self, node: usize) -> Result<(), CapacityError> {
        PriorityQueue::push(self, node);
        Ok(())
    }

    fn peek(&self) -> Option<usize> {
        self.top().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        PriorityQueue::pop(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

/// Per-node flags, one per node of the traversed network.
///
/// Used for both the discovered and the processed sets. Flags only ever go
/// from `false` to `true` within a traversal.
pub trait DiscoverySet {
    /// A set with every flag cleared, sized for `order` nodes.
    fn for_order(order: usize) -> Self;

    /// Returns true if `node` has been marked.
    fn contains(&self, node: usize) -> bool;

    /// Marks `node`. Out-of-range indices are ignored.
    fn insert(&mut self, node: usize);

    /// Lowest unmarked index in `from..order`.
    fn first_unmarked(&self, from: usize, order: usize) -> Option<usize> {
        (from..order).find(|&node| !self.contains(node))
    }
}

impl<const N: usize> DiscoverySet for [bool; N] {
    fn for_order(_order: usize) -> Self {
        [false; N]
    }

    fn contains(&self, node: usize) -> bool {
        self.get(node).copied().unwrap_or(false)
    }

    fn insert(&mut self, node: usize) {
        if let Some(flag) = self.get_mut(node) {
            *flag = true;
        }
    }
}

impl DiscoverySet for Vec<bool> {
    fn for_order(order: usize) -> Self {
        vec![false; order]
    }

    fn contains(&self, node: usize) -> bool {
        self.get(node).copied().unwrap_or(false)
    }

    fn insert(&mut self, node: usize) {
        if let Some(flag) = self.get_mut(node) {
            *flag = true;
        }
    }
}
