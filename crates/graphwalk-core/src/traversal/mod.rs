//! Graph traversal: breadth-first, depth-first and priority-first search.
//!
//! All frontier-based searches share one driver, [`traverse`]. The frontier
//! container and the order in which adjacency lists are walked are resolved
//! at compile time from the network's [`Sizing`] and the [`SearchFlavour`]:
//!
//! - [`BreadthFirst`]: FIFO, edges forwards.
//! - [`PseudoDepthFirst`]: LIFO, edges in reverse.
//! - [`PriorityFirst`]: binary heap ordered by a [`NodePriority`], edges forwards.
//!
//! Static networks get the bounded `Static*` containers and traverse without
//! allocating beyond the per-call flag arrays on the stack. [`depth_first_search`]
//! is the recursive variant with a true finish order.
//!
//! Events reach the caller through [`Hooks`] or any [`TraversalVisitor`].
//! Hook work can be moved onto a thread pool with [`TaskHooks`] and
//! [`Scheduled`].

mod conditions;
mod engine;
mod flavour;
mod frontier;
mod hooks;
mod priority;
mod recursive;
mod tasks;

#[cfg(test)]
mod frontier_tests;
#[cfg(test)]
mod recursive_tests;
#[cfg(test)]
mod tasks_tests;

pub use conditions::{DisconnectedMode, TraversalConditions};
pub use engine::{breadth_first_search, priority_first_search, pseudo_depth_first_search, traverse};
pub use flavour::{BreadthFirst, Dynamic, PriorityFirst, PseudoDepthFirst, SearchFlavour, Sizing, Static};
pub use frontier::{DiscoverySet, EdgeOrder, Frontier};
pub use hooks::{EdgeFn, Hooks, NoOp, NodeFn, TraversalVisitor};
pub use priority::{ByNodeWeight, NodeComparer, NodePriority};
pub use recursive::depth_first_search;
pub use tasks::{EdgeTask, HookKind, NodeTask, Scheduled, Serial, TaskHooks, TaskProcessingModel, ThreadConfig};

#[cfg(feature = "parallel")]
pub use tasks::{PoolModel, TaskPool};
