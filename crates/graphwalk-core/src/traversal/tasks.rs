//! Task processing for hook work.
//!
//! The engine itself is single-threaded: discovery marking and frontier
//! updates always happen in the calling thread. What can be offloaded is the
//! work hooks do. [`TaskHooks`] holds `Fn` hooks that *return* a value instead
//! of mutating captured state; [`Scheduled`] turns each hook invocation into
//! a task and hands it to a [`TaskProcessingModel`]:
//!
//! - [`Serial`] runs tasks inline.
//! - `TaskPool` (feature `parallel`) runs them on a rayon thread pool and
//!   returns the results in the order the tasks were scheduled.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use super::hooks::{NoOp, TraversalVisitor};
use crate::error::Error;
use crate::network::EdgeRef;

/// Which hook a task implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// [`TraversalVisitor::node_before_edges`].
    NodeBeforeEdges,
    /// [`TraversalVisitor::node_after_edges`].
    NodeAfterEdges,
    /// [`TraversalVisitor::edge_first_traversal`].
    EdgeFirstTraversal,
    /// [`TraversalVisitor::edge_second_traversal`].
    EdgeSecondTraversal,
    /// [`TraversalVisitor::edge_to_undiscovered_node`].
    EdgeToUndiscoveredNode,
}

/// Something that accepts nullary tasks producing `Self::Output`.
///
/// `'scope` bounds what tasks may borrow.
pub trait TaskProcessingModel<'scope> {
    /// Value every task produces.
    type Output: Send + 'scope;

    /// Schedules `task`, tagged with the hook it implements.
    fn push<T>(&mut self, kind: HookKind, task: T)
    where
        T: FnOnce() -> Self::Output + Send + 'scope;
}

/// Runs every task immediately in the calling thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serial<R> {
    results: Vec<R>,
}

impl<R> Default for Serial<R> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

impl<R> Serial<R> {
    /// Creates a model with no results yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Results so far, in push order.
    #[must_use]
    pub fn results(&self) -> &[R] {
        &self.results
    }

    /// Consumes the model, returning results in push order.
    #[must_use]
    pub fn into_results(self) -> Vec<R> {
        self.results
    }
}

impl<'scope, R: Send + 'scope> TaskProcessingModel<'scope> for Serial<R> {
    type Output = R;

    fn push<T>(&mut self, kind: HookKind, task: T)
    where
        T: FnOnce() -> R + Send + 'scope,
    {
        tracing::trace!(?kind, "running task inline");
        self.results.push(task());
    }
}

/// Thread count for a [`TaskPool`](crate::traversal::TaskPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadConfig {
    /// Automatically detect thread count based on CPU.
    #[default]
    Auto,
    /// Use a fixed number of threads.
    Fixed(usize),
}

impl ThreadConfig {
    /// Returns the effective number of threads to use.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        match self {
            ThreadConfig::Auto => {
                let cpus = std::thread::available_parallelism()
                    .map(std::num::NonZeroUsize::get)
                    .unwrap_or(1);
                // Leave one core to the thread driving the traversal.
                cpus.saturating_sub(1).max(1)
            }
            ThreadConfig::Fixed(n) => *n,
        }
    }
}

#[cfg(feature = "parallel")]
pub use pool::{PoolModel, TaskPool};

#[cfg(feature = "parallel")]
mod pool {
    use crossbeam_channel::Sender;

    use super::{HookKind, TaskProcessingModel, ThreadConfig};
    use crate::error::{Error, Result};

    /// A rayon thread pool executing hook tasks.
    #[derive(Debug)]
    pub struct TaskPool {
        pool: rayon::ThreadPool,
    }

    impl TaskPool {
        /// Builds a pool with `config.effective_threads()` workers.
        ///
        /// `ThreadConfig::Fixed(0)` falls back to a single worker.
        ///
        /// # Errors
        ///
        /// Returns `Error::ThreadPool` if rayon cannot spawn the workers.
        pub fn new(config: ThreadConfig) -> Result<Self> {
            let mut threads = config.effective_threads();
            if threads == 0 {
                tracing::warn!("task pool configured with zero threads, using one");
                threads = 1;
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("graphwalk-task-{i}"))
                .build()
                .map_err(|e| Error::ThreadPool(e.to_string()))?;
            tracing::debug!(threads, "task pool ready");
            Ok(Self { pool })
        }

        /// Number of worker threads.
        #[must_use]
        pub fn threads(&self) -> usize {
            self.pool.current_num_threads()
        }

        /// Runs `op` with a model whose tasks execute on this pool.
        ///
        /// Returns once every scheduled task has finished, yielding `op`'s
        /// value and the task results ordered by scheduling sequence. A panic
        /// in any task is resumed here.
        pub fn scope<'scope, R, T, F>(&self, op: F) -> (T, Vec<R>)
        where
            R: Send + 'scope,
            F: FnOnce(&mut PoolModel<'_, 'scope, R>) -> T,
        {
            let (sender, receiver) = crossbeam_channel::unbounded();
            let value = self.pool.in_place_scope(|scope| {
                let mut model = PoolModel {
                    scope,
                    sender,
                    next: 0,
                };
                op(&mut model)
            });

            let mut results: Vec<(u64, R)> = receiver.try_iter().collect();
            results.sort_unstable_by_key(|(seq, _)| *seq);
            (value, results.into_iter().map(|(_, r)| r).collect())
        }
    }

    /// Model handed out by [`TaskPool::scope`].
    pub struct PoolModel<'a, 'scope, R> {
        scope: &'a rayon::Scope<'scope>,
        sender: Sender<(u64, R)>,
        next: u64,
    }

    impl<R> PoolModel<'_, '_, R> {
        /// Number of tasks scheduled so far.
        #[must_use]
        pub fn scheduled(&self) -> u64 {
            self.next
        }
    }

    impl<'scope, R: Send + 'scope> TaskProcessingModel<'scope> for PoolModel<'_, 'scope, R> {
        type Output = R;

        fn push<T>(&mut self, kind: HookKind, task: T)
        where
            T: FnOnce() -> R + Send + 'scope,
        {
            let seq = self.next;
            self.next += 1;
            tracing::trace!(?kind, seq, "spawning task");

            let sender = self.sender.clone();
            self.scope.spawn(move |_| {
                // The receiver outlives the scope; a send cannot fail here.
                let _ = sender.send((seq, task()));
            });
        }
    }
}

/// A node hook that can be turned into a task.
pub trait NodeTask<R>: Sync {
    /// Binds the hook to `node`; `None` for an empty slot.
    fn bind(&self, node: usize) -> Option<impl FnOnce() -> R + Send + '_>;
}

/// An edge hook that can be turned into a task.
pub trait EdgeTask<R>: Sync {
    /// True only for an empty slot.
    const IS_NOOP: bool = false;

    /// Binds the hook to `edge`; `None` for an empty slot.
    fn bind(&self, edge: EdgeRef) -> Option<impl FnOnce() -> R + Send + '_>;
}

impl<R> NodeTask<R> for NoOp {
    fn bind(&self, _node: usize) -> Option<impl FnOnce() -> R + Send + '_> {
        never_task()
    }
}

impl<R, F: Fn(usize) -> R + Sync> NodeTask<R> for F {
    fn bind(&self, node: usize) -> Option<impl FnOnce() -> R + Send + '_> {
        Some(move || self(node))
    }
}

impl<R> EdgeTask<R> for NoOp {
    const IS_NOOP: bool = true;

    fn bind(&self, _edge: EdgeRef) -> Option<impl FnOnce() -> R + Send + '_> {
        never_task()
    }
}

/// Always `None`. The closure captures an uninhabited value, so its type
/// outlives every lifetime without constraining `R`.
fn never_task<R>() -> Option<impl FnOnce() -> R + Send + 'static> {
    None::<Infallible>.map(|never| move || -> R { match never {} })
}

impl<R, F: Fn(EdgeRef) -> R + Sync> EdgeTask<R> for F {
    fn bind(&self, edge: EdgeRef) -> Option<impl FnOnce() -> R + Send + '_> {
        Some(move || self(edge))
    }
}

/// Hooks whose bodies may run on another thread.
///
/// Each slot is `Fn(..) -> R + Sync` or [`NoOp`]. Wrap in
/// [`Scheduled`] to traverse with them.
#[derive(Debug, Clone, Default)]
pub struct TaskHooks<
    NB = NoOp,
    NA = NoOp,
    EF = NoOp,
    ES = NoOp,
    EU = NoOp,
> {
    node_before_edges: NB,
    node_after_edges: NA,
    edge_first_traversal: EF,
    edge_second_traversal: ES,
    edge_to_undiscovered_node: EU,
}

impl TaskHooks {
    /// All slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<NB, NA, EF, ES, EU> TaskHooks<NB, NA, EF, ES, EU> {
    /// Sets the task run before a node's edges.
    #[must_use]
    pub fn node_before_edges<R, F>(self, hook: F) -> TaskHooks<F, NA, EF, ES, EU>
    where
        F: Fn(usize) -> R + Sync,
    {
        TaskHooks {
            node_before_edges: hook,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the task run after a node's edges.
    #[must_use]
    pub fn node_after_edges<R, F>(self, hook: F) -> TaskHooks<NB, F, EF, ES, EU>
    where
        F: Fn(usize) -> R + Sync,
    {
        TaskHooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: hook,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the task run on an edge's first traversal.
    #[must_use]
    pub fn edge_first_traversal<R, F>(self, hook: F) -> TaskHooks<NB, NA, F, ES, EU>
    where
        F: Fn(EdgeRef) -> R + Sync,
    {
        TaskHooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: hook,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the task run on an undirected edge's second traversal.
    ///
    /// Never scheduled on directed networks.
    #[must_use]
    pub fn edge_second_traversal<R, F>(self, hook: F) -> TaskHooks<NB, NA, EF, F, EU>
    where
        F: Fn(EdgeRef) -> R + Sync,
    {
        TaskHooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: hook,
            edge_to_undiscovered_node: self.edge_to_undiscovered_node,
        }
    }

    /// Sets the task run when recursive DFS descends along an edge.
    #[must_use]
    pub fn edge_to_undiscovered_node<R, F>(self, hook: F) -> TaskHooks<NB, NA, EF, ES, F>
    where
        F: Fn(EdgeRef) -> R + Sync,
    {
        TaskHooks {
            node_before_edges: self.node_before_edges,
            node_after_edges: self.node_after_edges,
            edge_first_traversal: self.edge_first_traversal,
            edge_second_traversal: self.edge_second_traversal,
            edge_to_undiscovered_node: hook,
        }
    }
}

/// Adapts [`TaskHooks`] into a [`TraversalVisitor`] that schedules each hook
/// invocation on a [`TaskProcessingModel`].
pub struct Scheduled<'h, 'm, H, M> {
    hooks: &'h H,
    model: &'m mut M,
}

impl<'h, 'm, H, M> Scheduled<'h, 'm, H, M> {
    /// Routes `hooks` through `model`.
    #[must_use]
    pub fn new(hooks: &'h H, model: &'m mut M) -> Self {
        Self { hooks, model }
    }
}

impl<'h, M, NB, NA, EF, ES, EU> TraversalVisitor for Scheduled<'h, '_, TaskHooks<NB, NA, EF, ES, EU>, M>
where
    M: TaskProcessingModel<'h>,
    NB: NodeTask<M::Output>,
    NA: NodeTask<M::Output>,
    EF: EdgeTask<M::Output>,
    ES: EdgeTask<M::Output>,
    EU: EdgeTask<M::Output>,
{
    type Error = Error;

    const OBSERVES_SECOND_TRAVERSAL: bool = !ES::IS_NOOP;

    fn node_before_edges(&mut self, node: usize) -> Result<(), Error> {
        let hooks: &'h TaskHooks<NB, NA, EF, ES, EU> = self.hooks;
        if let Some(task) = hooks.node_before_edges.bind(node) {
            self.model.push(HookKind::NodeBeforeEdges, task);
        }
        Ok(())
    }

    fn node_after_edges(&mut self, node: usize) -> Result<(), Error> {
        let hooks: &'h TaskHooks<NB, NA, EF, ES, EU> = self.hooks;
        if let Some(task) = hooks.node_after_edges.bind(node) {
            self.model.push(HookKind::NodeAfterEdges, task);
        }
        Ok(())
    }

    fn edge_first_traversal(&mut self, edge: EdgeRef) -> Result<(), Error> {
        let hooks: &'h TaskHooks<NB, NA, EF, ES, EU> = self.hooks;
        if let Some(task) = hooks.edge_first_traversal.bind(edge) {
            self.model.push(HookKind::EdgeFirstTraversal, task);
        }
        Ok(())
    }

    fn edge_second_traversal(&mut self, edge: EdgeRef) -> Result<(), Error> {
        let hooks: &'h TaskHooks<NB, NA, EF, ES, EU> = self.hooks;
        if let Some(task) = hooks.edge_second_traversal.bind(edge) {
            self.model.push(HookKind::EdgeSecondTraversal, task);
        }
        Ok(())
    }

    fn edge_to_undiscovered_node(&mut self, edge: EdgeRef) -> Result<(), Error> {
        let hooks: &'h TaskHooks<NB, NA, EF, ES, EU> = self.hooks;
        if let Some(task) = hooks.edge_to_undiscovered_node.bind(edge) {
            self.model.push(HookKind::EdgeToUndiscoveredNode, task);
        }
        Ok(())
    }
}
