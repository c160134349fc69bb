//! Client callbacks invoked during a traversal.
//!
//! There are two ways to observe a traversal:
//!
//! - [`Hooks`]: a builder of up to five `FnMut` closures. Unset slots are
//!   [`NoOp`] and compile away. Closures cannot fail.
//! - [`TraversalVisitor`]: a trait with a default no-op method per event and an
//!   associated error type. Any hook returning `Err` aborts the traversal and
//!   the error reaches the caller unchanged.

use crate::error::Error;
use crate::network::EdgeRef;

/// Receives traversal events. Every method defaults to doing nothing.
pub trait TraversalVisitor {
    /// Error returned by hooks. Must absorb engine errors.
    type Error: From<Error>;

    /// Whether [`edge_second_traversal`](Self::edge_second_traversal) does
    /// anything. Directed traversals never call it, and warn when this is set.
    const OBSERVES_SECOND_TRAVERSAL: bool = false;

    /// Called after `node` is taken off the frontier, before its edges.
    fn node_before_edges(&mut self, _node: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once all edges of `node` have been examined.
    fn node_after_edges(&mut self, _node: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called the first time a logical edge is examined.
    fn edge_first_traversal(&mut self, _edge: EdgeRef) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Undirected networks only: called when the other half of an edge is
    /// examined from its second endpoint.
    fn edge_second_traversal(&mut self, _edge: EdgeRef) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Recursive depth-first search only: called before descending along an
    /// edge into an undiscovered node.
    fn edge_to_undiscovered_node(&mut self, _edge: EdgeRef) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<V: TraversalVisitor + ?Sized> TraversalVisitor for &mut V {
    type Error = V::Error;

    const OBSERVES_SECOND_TRAVERSAL: bool = V::OBSERVES_SECOND_TRAVERSAL;

    fn node_before_edges(&mut self, node: usize) -> Result<(), Self::Error> {
        (**self).node_before_edges(node)
    }

    fn node_after_edges(&mut self, node: usize) -> Result<(), Self::Error> {
        (**self).node_after_edges(node)
    }

    fn edge_first_traversal(&mut self, edge: EdgeRef) -> Result<(), Self::Error> {
        (**self).edge_first_traversal(edge)
    }

    fn edge_second_traversal(&mut self, edge: EdgeRef) -> Result<(), Self::Error> {
        (**self).edge_second_traversal(edge)
    }

    fn edge_to_undiscovered_node(&mut self, edge: EdgeRef) -> Result<(), Self::Error> {
        (**self).edge_to_undiscovered_node(edge)
    }
}

/// An empty hook slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

/// Signature check for node hooks.
pub trait NodeFn {
    /// Invokes the hook.
    fn call(&mut self, node: usize);
}

impl NodeFn for NoOp {
    #[inline]
    fn call(&mut self, _node: usize) {}
}

impl<F: FnMut(usize)> NodeFn for F {
    #[inline]
    fn call(&mut self, node: usize) {
        self(node);
    }
}

/// Signature check for edge hooks.
pub trait EdgeFn {
    /// True only for an empty slot.
    const IS_NOOP: bool = false;

    /// Invokes the hook.
    fn call(&mut self, edge: EdgeRef);
}

impl EdgeFn for NoOp {
    const IS_NOOP: bool = true;

    #[inline]
    fn call(&mut self, _edge: EdgeRef) {}
}

impl<F: FnMut(EdgeRef)> EdgeFn for F {
    #[inline]
    fn call(&mut self, edge: EdgeRef) {
        self(edge);
    }
}

/// Closure-based hooks.
///
/// # Examples
///
/// ```
/// use graphwalk_core::network::{Directed, DynamicNetwork};
/// use graphwalk_core::traversal::{breadth_first_search, Hooks, TraversalConditions};
///
/// let g = DynamicNetwork::<Directed>::from_pairs(3, &[(0, 1), (1, 2)])?;
/// let mut order = Vec::new();
/// let mut hooks = Hooks::new().node_before_edges(|node| order.push(node));
/// breadth_first_search(&g, TraversalConditions::default(), &mut hooks)?;
/// drop(hooks);
/// assert_eq!(order, vec![0, 1, 2]);
/// # Ok::<(), graphwalk_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hooks<NB = NoOp, NA = NoOp, EF = NoOp, ES = NoOp, EU = NoOp> {
    node_before_edges: NB,
    node_after_edges: NA,
    edge_first_traversal: EF,
    edge_second_traversal: ES,
    edge_to_undiscovered_node: EU,
}

impl Hooks {
    /// All slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<NB, NA, EF, ES, EU> Hooks<NB, NA, EF, ES, EU> {
    /// Sets the hook run before a node's edges.
    #[must_use]
    pub fn node_before_edges<F: FnMut(usize)>(self, hook: F) -> Hooks<F, NA, EF, ES, EU> {
        Hooks {
            node_before_edges: hook,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the hook run after a node's edges.
    #[must_use]
    pub fn node_after_edges<F: FnMut(usize)>(self, hook: F) -> Hooks<NB, F, EF, ES, EU> {
        Hooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: hook,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the hook run on an edge's first traversal.
    #[must_use]
    pub fn edge_first_traversal<F: FnMut(EdgeRef)>(self, hook: F) -> Hooks<NB, NA, F, ES, EU> {
        Hooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: hook,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the hook run on an undirected edge's second traversal.
    ///
    /// Directed and directed-embedded networks never report second
    /// traversals, so there the hook never runs and the engine logs a
    /// warning.
    #[must_use]
    pub fn edge_second_traversal<F: FnMut(EdgeRef)>(self, hook: F) -> Hooks<NB, NA, EF, F, EU> {
        Hooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: hook,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the hook run when recursive DFS descends along an edge.
    #[must_use]
    pub fn edge_to_undiscovered_node<F: FnMut(EdgeRef)>(
        self,
        hook: F,
    ) -> Hooks<NB, NA, EF, ES, F> {
        Hooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: hook,
        }
    }
}

impl<NB, NA, EF, ES, EU> TraversalVisitor for Hooks<NB, NA, EF, ES, EU>
where
    NB: NodeFn,
    NA: NodeFn,
    EF: EdgeFn,
    ES: EdgeFn,
    EU: EdgeFn,
{
    type Error = Error;

    const OBSERVES_SECOND_TRAVERSAL: bool = !ES::IS_NOOP;

    fn node_before_edges(&mut self, node: usize) -> Result<(), Error> {
        self.node_before_edges.call(node);
        Ok(())
    }

    fn node_after_edges(&mut self, node: usize) -> Result<(), Error> {
        self.node_after_edges.call(node);
        Ok(())
    }

    fn edge_first_traversal(&mut self, edge: EdgeRef) -> Result<(), Error> {
        self.edge_first_traversal.call(edge);
        Ok(())
    }

    fn edge_second_traversal(&mut self, edge: EdgeRef) -> Result<(), Error> {
        self.edge_second_traversal.call(edge);
        Ok(())
    }

    fn edge_to_undiscovered_node(&mut self, edge: EdgeRef) -> Result<(), Error> {
        self.edge_to_undiscovered_node.call(edge);
        Ok(())
    }
}
