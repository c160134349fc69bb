//! Heap-backed network with node and edge insertion.

use std::marker::PhantomData;

use super::{split_edge, Edge, Flavour, GraphFlavour, Network};
use crate::error::{Error, Result};
use crate::traversal::Dynamic;

/// Growable network storing one adjacency list per node.
///
/// Nodes are identified by insertion index. Edges are appended to the end of
/// each endpoint's list; for undirected self-loops both halves land next to
/// each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicNetwork<F, NW = (), EW = ()> {
    /// Adjacency lists: node -> half-edges leaving it.
    adjacency: Vec<Vec<Edge<EW>>>,
    /// Node weights, parallel to `adjacency`.
    node_weights: Vec<NW>,
    /// Number of logical edges.
    edge_count: usize,
    flavour: PhantomData<F>,
}

impl<F, NW, EW> Default for DynamicNetwork<F, NW, EW> {
    fn default() -> Self {
        Self {
            adjacency: Vec::new(),
            node_weights: Vec::new(),
            edge_count: 0,
            flavour: PhantomData,
        }
    }
}

impl<F: Flavour, NW, EW> DynamicNetwork<F, NW, EW> {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a network with room for `expected_nodes` nodes.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(expected_nodes),
            node_weights: Vec::with_capacity(expected_nodes),
            edge_count: 0,
            flavour: PhantomData,
        }
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, weight: NW) -> usize {
        self.adjacency.push(Vec::new());
        self.node_weights.push(weight);
        self.node_weights.len() - 1
    }

    /// Mutable access to a node weight.
    #[must_use]
    pub fn node_weight_mut(&mut self, node: usize) -> Option<&mut NW> {
        self.node_weights.get_mut(node)
    }

    /// Number of half-edges stored at `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if a half-edge `source → target` is stored at `source`.
    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.edges(source).iter().any(|e| e.target() == target)
    }

    /// Removes every edge, keeping the nodes.
    pub fn clear_edges(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        self.edge_count = 0;
    }
}

impl<F: Flavour, NW, EW: Clone> DynamicNetwork<F, NW, EW> {
    /// Joins `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeOutOfRange` if either endpoint does not exist.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: EW) -> Result<()> {
        let order = self.order();
        for node in [source, target] {
            if node >= order {
                return Err(Error::NodeOutOfRange { node, order });
            }
        }

        let at_source = self.adjacency[source].len();
        let at_target = if source == target {
            at_source + 1
        } else {
            self.adjacency[target].len()
        };

        let (forward, backward) =
            split_edge(F::FLAVOUR, source, target, weight, at_source, at_target);
        self.adjacency[source].push(forward);
        if let Some(backward) = backward {
            self.adjacency[target].push(backward);
        }
        self.edge_count += 1;
        Ok(())
    }
}

impl<F: Flavour, NW> DynamicNetwork<F, NW, ()> {
    /// Joins `source` to `target` with an unweighted edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeOutOfRange` if either endpoint does not exist.
    pub fn connect(&mut self, source: usize, target: usize) -> Result<()> {
        self.add_edge(source, target, ())
    }
}

impl<F: Flavour> DynamicNetwork<F> {
    /// Builds an unweighted network with `order` nodes from `(source, target)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeOutOfRange` if an endpoint is `>= order`.
    pub fn from_pairs(order: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        let mut network = Self::with_capacity(order);
        for _ in 0..order {
            network.add_node(());
        }
        for &(source, target) in pairs {
            network.connect(source, target)?;
        }
        Ok(network)
    }
}

impl<F: Flavour, NW, EW> Network for DynamicNetwork<F, NW, EW> {
    type Sizing = Dynamic;
    type NodeWeight = NW;
    type EdgeWeight = EW;

    const FLAVOUR: GraphFlavour = F::FLAVOUR;

    fn order(&self) -> usize {
        self.node_weights.len()
    }

    fn edges(&self, node: usize) -> &[Edge<EW>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    fn node_weights(&self) -> &[NW] {
        &self.node_weights
    }
}
