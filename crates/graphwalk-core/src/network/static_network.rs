//! Fixed-size network backed entirely by arrays.

use std::marker::PhantomData;

use super::{split_edge, Edge, Flavour, Network};
use crate::error::{Error, Result};
use crate::traversal::Static;

/// A network with exactly `N` nodes and `E` stored half-edges.
///
/// Adjacency lists are laid out contiguously in one `[Edge; E]` array with a
/// per-node offset table, so a static network never allocates and traverses
/// with the bounded frontiers. `E` counts halves: an undirected network with
/// `k` edges has `E = 2k`.
///
/// # Examples
///
/// ```
/// use graphwalk_core::network::{Network, StaticNetwork, Undirected};
///
/// let star = StaticNetwork::<Undirected, i32, (), 4, 6>::from_pairs(
///     &[(0, 1), (0, 2), (0, 3)],
///     [0, 6, 2, 8],
/// )?;
/// assert_eq!(star.order(), 4);
/// assert_eq!(star.edges(0).len(), 3);
/// # Ok::<(), graphwalk_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticNetwork<F, NW, EW, const N: usize, const E: usize> {
    edges: [Edge<EW>; E],
    offsets: [usize; N],
    node_weights: [NW; N],
    flavour: PhantomData<F>,
}

impl<F, NW, EW, const N: usize, const E: usize> StaticNetwork<F, NW, EW, N, E>
where
    F: Flavour,
    EW: Copy + Default,
{
    /// Builds the network from `(source, target, weight)` triples.
    ///
    /// Halves are stored in insertion order within each adjacency list.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeOutOfRange` if an endpoint is `>= N`, and
    /// `Error::EdgeCountMismatch` if the edges do not produce exactly `E`
    /// halves.
    pub fn new(edges: &[(usize, usize, EW)], node_weights: [NW; N]) -> Result<Self> {
        Self::build(edges.iter().copied(), node_weights)
    }

    fn build<I>(edges: I, node_weights: [NW; N]) -> Result<Self>
    where
        I: Iterator<Item = (usize, usize, EW)> + Clone,
    {
        let halves = F::FLAVOUR.halves_per_edge();

        let mut counts = [0usize; N];
        for (source, target, _) in edges.clone() {
            for node in [source, target] {
                if node >= N {
                    return Err(Error::NodeOutOfRange { node, order: N });
                }
            }
            counts[source] += 1;
            if halves == 2 {
                counts[target] += 1;
            }
        }

        let actual: usize = counts.iter().sum();
        if actual != E {
            return Err(Error::EdgeCountMismatch {
                expected: E,
                actual,
            });
        }

        let mut offsets = [0usize; N];
        let mut running = 0;
        for (offset, count) in offsets.iter_mut().zip(counts) {
            *offset = running;
            running += count;
        }

        let mut storage = [Edge::new(0, 0, EW::default()); E];
        let mut filled = [0usize; N];
        for (source, target, weight) in edges {
            let at_source = filled[source];
            filled[source] += 1;
            let at_target = if halves == 2 {
                filled[target] += 1;
                filled[target] - 1
            } else {
                0
            };

            let (forward, backward) =
                split_edge(F::FLAVOUR, source, target, weight, at_source, at_target);
            storage[offsets[source] + at_source] = forward;
            if let Some(backward) = backward {
                storage[offsets[target] + at_target] = backward;
            }
        }

        Ok(Self {
            edges: storage,
            offsets,
            node_weights,
            flavour: PhantomData,
        })
    }
}

impl<F, NW, const N: usize, const E: usize> StaticNetwork<F, NW, (), N, E>
where
    F: Flavour,
{
    /// Builds an unweighted-edge network from `(source, target)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`StaticNetwork::new`].
    pub fn from_pairs(pairs: &[(usize, usize)], node_weights: [NW; N]) -> Result<Self> {
        Self::build(
            pairs.iter().map(|&(source, target)| (source, target, ())),
            node_weights,
        )
    }
}

impl<F, NW, EW, const N: usize, const E: usize> StaticNetwork<F, NW, EW, N, E> {
    /// Mutable access to the node weights.
    pub fn node_weights_mut(&mut self) -> &mut [NW; N] {
        &mut self.node_weights
    }

    /// All stored half-edges, grouped by node.
    #[must_use]
    pub fn half_edges(&self) -> &[Edge<EW>; E] {
        &self.edges
    }
}

impl<F, NW, EW, const N: usize, const E: usize> Network for StaticNetwork<F, NW, EW, N, E>
where
    F: Flavour,
{
    type Sizing = Static<N>;
    type NodeWeight = NW;
    type EdgeWeight = EW;

    const FLAVOUR: super::GraphFlavour = F::FLAVOUR;

    fn order(&self) -> usize {
        N
    }

    fn edges(&self, node: usize) -> &[Edge<EW>] {
        let Some(&start) = self.offsets.get(node) else {
            return &[];
        };
        let end = self.offsets.get(node + 1).copied().unwrap_or(E);
        &self.edges[start..end]
    }

    fn node_weights(&self) -> &[NW] {
        &self.node_weights
    }

    fn size(&self) -> usize {
        E
    }
}
