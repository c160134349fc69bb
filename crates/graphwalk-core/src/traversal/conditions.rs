//! Where a traversal starts and whether it leaves the start's component.

use serde::{Deserialize, Serialize};

/// What to do once every node reachable from the start has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisconnectedMode {
    /// Keep going from the lowest-index undiscovered node until every node
    /// has been visited.
    #[default]
    Find,
    /// Stop; only the start node's component is visited.
    Ignore,
}

/// Start node and disconnected-component handling for a traversal.
///
/// # Examples
///
/// ```
/// use graphwalk_core::traversal::{DisconnectedMode, TraversalConditions};
///
/// let conditions = TraversalConditions::new(3).with_disconnected(DisconnectedMode::Ignore);
/// assert_eq!(conditions.start(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConditions {
    start: usize,
    disconnected: DisconnectedMode,
}

impl TraversalConditions {
    /// Starts at `start`, finding disconnected components.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self {
            start,
            disconnected: DisconnectedMode::Find,
        }
    }

    /// Sets the disconnected mode (builder pattern).
    #[must_use]
    pub const fn with_disconnected(mut self, mode: DisconnectedMode) -> Self {
        self.disconnected = mode;
        self
    }

    /// Sets the start node (builder pattern).
    #[must_use]
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Start node index.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Disconnected-component handling.
    #[must_use]
    pub const fn disconnected(&self) -> DisconnectedMode {
        self.disconnected
    }
}
