//! Error types for graphwalk-core.

use thiserror::Error;

/// Errors raised by bounded containers, reference networks and task pools.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounded container was asked to grow beyond its fixed capacity.
    ///
    /// Inside a traversal this means the declared size of a static network
    /// does not match what the traversal actually needed.
    #[error(transparent)]
    CapacityExceeded(#[from] CapacityError),

    /// A node index does not exist in the network.
    #[error("node {node} out of range for network of order {order}")]
    NodeOutOfRange {
        /// Offending node index.
        node: usize,
        /// Number of nodes in the network.
        order: usize,
    },

    /// The half-edge count of a static network does not match its declaration.
    #[error("edge count mismatch: declared {expected} half-edges, got {actual}")]
    EdgeCountMismatch {
        /// Declared number of half-edges.
        expected: usize,
        /// Number of half-edges the edge list produces.
        actual: usize,
    },

    /// The thread pool backing a task-processing model could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Push onto a full (or zero-capacity) bounded container.
///
/// Kept separate from [`Error`] and `Copy` so that the bounded containers can
/// report overflow from `const fn` code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("capacity exceeded: container holds at most {capacity} elements")]
pub struct CapacityError {
    /// Fixed capacity of the container.
    pub capacity: usize,
}

/// Result type alias for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
