//! Half-edges and edge references.

use serde::{Deserialize, Serialize};

use super::{GraphFlavour, Network};

/// One half of an edge, stored in the adjacency list of the node it leaves.
///
/// Undirected networks store every logical edge twice, once at each end.
/// Embedded flavours additionally record where the other half lives
/// (`complementary_index`), and directed-embedded networks mark the copy kept
/// at the target node as `inverted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W = ()> {
    source: usize,
    target: usize,
    complementary_index: Option<usize>,
    inverted: bool,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates a plain half-edge from `source` to `target`.
    #[must_use]
    pub fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            complementary_index: None,
            inverted: false,
            weight,
        }
    }

    /// Records the position of the complementary half (builder pattern).
    #[must_use]
    pub fn with_complementary_index(mut self, index: usize) -> Self {
        self.complementary_index = Some(index);
        self
    }

    /// Marks this half as the copy stored at the target (builder pattern).
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Node this edge leaves.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Node this edge enters.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Position of the complementary half in the other end's adjacency list.
    #[must_use]
    pub fn complementary_index(&self) -> Option<usize> {
        self.complementary_index
    }

    /// True for the copy of a directed-embedded edge kept at its target.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Returns true if the edge starts and ends at the same node.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Edge weight.
    #[must_use]
    pub fn weight(&self) -> &W {
        &self.weight
    }
}

/// Lays out the halves of the logical edge `source → target`.
///
/// `at_source` and `at_target` are the positions the halves will occupy in
/// the respective adjacency lists. Returns the half stored at the source and,
/// for every flavour but plain directed, the half stored at the target.
pub(crate) fn split_edge<W: Clone>(
    flavour: GraphFlavour,
    source: usize,
    target: usize,
    weight: W,
    at_source: usize,
    at_target: usize,
) -> (Edge<W>, Option<Edge<W>>) {
    match flavour {
        GraphFlavour::Directed => (Edge::new(source, target, weight), None),
        GraphFlavour::Undirected => (
            Edge::new(source, target, weight.clone()),
            Some(Edge::new(target, source, weight)),
        ),
        GraphFlavour::UndirectedEmbedded => (
            Edge::new(source, target, weight.clone()).with_complementary_index(at_target),
            Some(Edge::new(target, source, weight).with_complementary_index(at_source)),
        ),
        GraphFlavour::DirectedEmbedded => (
            Edge::new(source, target, weight.clone()).with_complementary_index(at_target),
            Some(
                Edge::new(source, target, weight)
                    .with_complementary_index(at_source)
                    .inverted(),
            ),
        ),
    }
}

/// Identifies an edge by the node holding it and its adjacency-list position.
///
/// This is what edge hooks receive; use [`EdgeRef::resolve`] to read the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRef {
    /// Node whose adjacency list holds the edge.
    pub node: usize,
    /// Position within that adjacency list.
    pub position: usize,
}

impl EdgeRef {
    /// Creates a reference to the `position`-th edge of `node`.
    #[must_use]
    pub fn new(node: usize, position: usize) -> Self {
        Self { node, position }
    }

    /// Looks the edge up in `graph`.
    #[must_use]
    pub fn resolve<'g, G: Network>(&self, graph: &'g G) -> Option<&'g Edge<G::EdgeWeight>> {
        graph.edges(self.node).get(self.position)
    }
}
