//! Graph networks the traversal engine walks.
//!
//! A network is `order()` nodes, each with an adjacency list of half-edges.
//! Four flavours decide how a logical edge is stored:
//!
//! | Flavour                | Halves per edge | Extra data                      |
//! |------------------------|-----------------|---------------------------------|
//! | [`Directed`]           | 1               | none                            |
//! | [`Undirected`]         | 2               | none                            |
//! | [`UndirectedEmbedded`] | 2               | complementary index             |
//! | [`DirectedEmbedded`]   | 2               | complementary index, `inverted` |
//!
//! [`StaticNetwork`] keeps everything in fixed arrays and pairs with the
//! bounded frontiers; [`DynamicNetwork`] grows on the heap.

mod dynamic_network;
mod edge;
mod static_network;


use serde::{Deserialize, Serialize};

use crate::traversal::Sizing;

pub use dynamic_network::DynamicNetwork;
pub use edge::{Edge, EdgeRef};
pub use static_network::StaticNetwork;

pub(crate) use edge::split_edge;

/// How a network stores its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphFlavour {
    /// One half per edge, held by the source.
    Directed,
    /// Two halves per edge, one at each end.
    Undirected,
    /// Two halves per edge, each knowing where the other lives.
    UndirectedEmbedded,
    /// Two halves per edge; the copy at the target is marked inverted.
    DirectedEmbedded,
}

impl GraphFlavour {
    /// Returns true for both directed flavours.
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed | Self::DirectedEmbedded)
    }

    /// Returns true for flavours that record complementary indices.
    #[must_use]
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::UndirectedEmbedded | Self::DirectedEmbedded)
    }

    /// Number of half-edges stored for one logical edge.
    #[must_use]
    pub const fn halves_per_edge(self) -> usize {
        match self {
            Self::Directed => 1,
            _ => 2,
        }
    }
}

/// Type-level marker for a [`GraphFlavour`].
pub trait Flavour {
    /// The runtime flavour this marker stands for.
    const FLAVOUR: GraphFlavour;
}

macro_rules! flavour_marker {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Flavour for $name {
            const FLAVOUR: GraphFlavour = GraphFlavour::$name;
        }
    };
}

flavour_marker!(
    /// Marker for [`GraphFlavour::Directed`].
    Directed
);
flavour_marker!(
    /// Marker for [`GraphFlavour::Undirected`].
    Undirected
);
flavour_marker!(
    /// Marker for [`GraphFlavour::UndirectedEmbedded`].
    UndirectedEmbedded
);
flavour_marker!(
    /// Marker for [`GraphFlavour::DirectedEmbedded`].
    DirectedEmbedded
);

/// Read access to a graph, as needed by the traversal engine.
///
/// Implementors expose node indices `0..order()`; `edges` must return an
/// empty slice for indices outside that range.
pub trait Network {
    /// Static or dynamic; selects the frontier containers.
    type Sizing: Sizing;
    /// Per-node payload.
    type NodeWeight;
    /// Per-edge payload.
    type EdgeWeight;

    /// Edge storage flavour.
    const FLAVOUR: GraphFlavour;

    /// Number of nodes.
    fn order(&self) -> usize;

    /// Adjacency list of `node`.
    fn edges(&self, node: usize) -> &[Edge<Self::EdgeWeight>];

    /// Node weights, indexed by node.
    fn node_weights(&self) -> &[Self::NodeWeight];

    /// Returns true if the network has no nodes.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Total number of stored half-edges.
    fn size(&self) -> usize {
        (0..self.order()).map(|node| self.edges(node).len()).sum()
    }

    /// Weight of `node`, if it exists.
    fn node_weight(&self, node: usize) -> Option<&Self::NodeWeight> {
        self.node_weights().get(node)
    }
}
