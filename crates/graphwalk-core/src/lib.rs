//! # graphwalk
//!
//! Graph traversal over statically and dynamically sized networks, with
//! bounded containers that double as allocation-free frontiers.
//!
//! ## Features
//!
//! - **Bounded containers**: `StaticQueue`, `StaticStack` and
//!   `StaticPriorityQueue` never allocate and report overflow instead of
//!   growing. Queue and stack are usable in `const` contexts.
//! - **One engine, three searches**: breadth-first, stack-driven depth-first
//!   and priority-first search share a single driver; the frontier is picked
//!   at compile time.
//! - **Recursive DFS** with a true finish order.
//! - **Four edge flavours**: directed, undirected and their embedded variants.
//! - **Task processing**: hook bodies can run inline or on a rayon pool.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::network::{StaticNetwork, Undirected};
//! use graphwalk_core::traversal::{priority_first_search, ByNodeWeight, Hooks, TraversalConditions};
//!
//! fn main() -> Result<(), graphwalk_core::Error> {
//!     // A star: centre 0, leaves weighted 6, 2 and 8.
//!     let star = StaticNetwork::<Undirected, i32, (), 4, 6>::from_pairs(
//!         &[(0, 1), (0, 2), (0, 3)],
//!         [0, 6, 2, 8],
//!     )?;
//!
//!     let mut visited = Vec::new();
//!     let mut hooks = Hooks::new().node_before_edges(|node| visited.push(node));
//!     priority_first_search(&star, TraversalConditions::new(0), ByNodeWeight::new(), &mut hooks)?;
//!
//!     // Heaviest leaf first.
//!     assert_eq!(visited, vec![0, 3, 1, 2]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::float_cmp,
        clippy::manual_assert
    )
)]

pub mod containers;
pub mod error;
pub mod network;
pub mod traversal;

pub use containers::{
    Compare, NaturalOrder, PriorityQueue, Reversed, StaticPriorityQueue, StaticQueue, StaticStack,
};
pub use error::{CapacityError, Error, Result};
pub use network::{
    Directed, DirectedEmbedded, DynamicNetwork, Edge, EdgeRef, GraphFlavour, Network,
    StaticNetwork, Undirected, UndirectedEmbedded,
};
pub use traversal::{
    breadth_first_search, depth_first_search, priority_first_search, pseudo_depth_first_search,
    traverse, DisconnectedMode, Hooks, TraversalConditions, TraversalVisitor,
};
