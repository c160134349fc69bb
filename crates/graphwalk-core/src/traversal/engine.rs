//! Iterative traversal driver shared by every frontier-based search.

use tracing::{debug, trace, warn};

use super::flavour::{
    ensure_fits, BreadthFirst, PriorityFirst, PseudoDepthFirst, SearchFlavour, Sizing,
};
use super::frontier::{DiscoverySet, EdgeOrder, Frontier};
use super::hooks::TraversalVisitor;
use super::priority::NodePriority;
use super::{DisconnectedMode, TraversalConditions};
use crate::error::Error;
use crate::network::{Edge, EdgeRef, GraphFlavour, Network};

type Flags<G> = <<G as Network>::Sizing as Sizing>::Discovered;

/// Traverses `graph` with the frontier selected by `flavour`.
///
/// Nodes are popped before their edges are expanded. Every undiscovered
/// target is marked discovered and pushed as soon as its edge is examined, so
/// each node enters the frontier at most once. With
/// [`DisconnectedMode::Find`], the traversal restarts from the lowest-index
/// undiscovered node whenever the frontier runs dry.
///
/// A start index outside the graph (including any start on an empty graph)
/// is not an error: nothing is visited.
///
/// # Errors
///
/// Returns the first error raised by a hook, or `Error::CapacityExceeded`
/// if the graph has more nodes than its static sizing, checked before
/// anything is visited.
pub fn traverse<G, S, V>(
    flavour: S,
    graph: &G,
    conditions: TraversalConditions,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    G: Network,
    S: SearchFlavour<G>,
    V: TraversalVisitor + ?Sized,
{
    ensure_fits(graph)?;

    let order = graph.order();
    let start = conditions.start();
    if start >= order {
        debug!(start, order, "start node outside the graph, nothing to traverse");
        return Ok(());
    }

    debug!(
        start,
        order,
        flavour = ?G::FLAVOUR,
        disconnected = ?conditions.disconnected(),
        "starting traversal"
    );
    if G::FLAVOUR.is_directed() && V::OBSERVES_SECOND_TRAVERSAL {
        warn!(
            flavour = ?G::FLAVOUR,
            "edge_second_traversal hook set on a directed network, it will never run"
        );
    }

    let mut walk = Walk {
        graph,
        frontier: flavour.make_frontier(graph),
        discovered: <Flags<G> as DiscoverySet>::for_order(order),
        processed: <Flags<G> as DiscoverySet>::for_order(order),
    };

    walk.seed(start)?;
    walk.drain(visitor)?;

    if conditions.disconnected() == DisconnectedMode::Find {
        let mut cursor = 0;
        while let Some(root) = walk.discovered.first_unmarked(cursor, order) {
            debug!(root, "restarting traversal in a new component");
            walk.seed(root)?;
            walk.drain(visitor)?;
            cursor = root + 1;
        }
    }

    Ok(())
}

/// Breadth-first search; see [`traverse`].
///
/// # Errors
///
/// As [`traverse`].
pub fn breadth_first_search<G, V>(
    graph: &G,
    conditions: TraversalConditions,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    G: Network,
    V: TraversalVisitor + ?Sized,
{
    traverse(BreadthFirst, graph, conditions, visitor)
}

/// Stack-driven depth-first-like search; see [`traverse`].
///
/// Edges are pushed in reverse so the first edge's target is expanded first.
///
/// # Errors
///
/// As [`traverse`].
pub fn pseudo_depth_first_search<G, V>(
    graph: &G,
    conditions: TraversalConditions,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    G: Network,
    V: TraversalVisitor + ?Sized,
{
    traverse(PseudoDepthFirst, graph, conditions, visitor)
}

/// Priority-first search ordered by `priority`; see [`traverse`].
///
/// # Errors
///
/// As [`traverse`].
pub fn priority_first_search<G, P, V>(
    graph: &G,
    conditions: TraversalConditions,
    priority: P,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    G: Network,
    P: NodePriority<G>,
    V: TraversalVisitor + ?Sized,
{
    traverse(PriorityFirst(priority), graph, conditions, visitor)
}

/// State of one traversal call.
struct Walk<'g, G: Network, F> {
    graph: &'g G,
    frontier: F,
    discovered: Flags<G>,
    processed: Flags<G>,
}

impl<G: Network, F: Frontier> Walk<'_, G, F> {
    fn seed(&mut self, root: usize) -> Result<(), Error> {
        self.discovered.insert(root);
        self.frontier.push(root)?;
        Ok(())
    }

    fn drain<V>(&mut self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: TraversalVisitor + ?Sized,
    {
        let graph = self.graph;
        while let Some(node) = self.frontier.pop() {
            trace!(node, pending = self.frontier.len(), "expanding node");
            visitor.node_before_edges(node)?;

            let edges = graph.edges(node);
            let mut loop_pending = false;
            match F::EDGE_ORDER {
                EdgeOrder::Forward => {
                    for (position, edge) in edges.iter().enumerate() {
                        self.visit_edge(node, position, edge, &mut loop_pending, visitor)?;
                    }
                }
                EdgeOrder::Reverse => {
                    for (position, edge) in edges.iter().enumerate().rev() {
                        self.visit_edge(node, position, edge, &mut loop_pending, visitor)?;
                    }
                }
            }

            visitor.node_after_edges(node)?;
            self.processed.insert(node);
        }
        Ok(())
    }

    fn visit_edge<V>(
        &mut self,
        node: usize,
        position: usize,
        edge: &Edge<G::EdgeWeight>,
        loop_pending: &mut bool,
        visitor: &mut V,
    ) -> Result<(), V::Error>
    where
        V: TraversalVisitor + ?Sized,
    {
        let edge_ref = EdgeRef::new(node, position);
        let target = edge.target();

        match G::FLAVOUR {
            GraphFlavour::Directed => visitor.edge_first_traversal(edge_ref)?,
            GraphFlavour::Undirected => {
                // Both halves of a self-loop sit next to each other.
                let second = if edge.is_loop() {
                    let second = *loop_pending;
                    *loop_pending = !second;
                    second
                } else {
                    self.processed.contains(target)
                };
                report(visitor, edge_ref, second)?;
            }
            GraphFlavour::UndirectedEmbedded => {
                let second = if edge.is_loop() {
                    edge.complementary_index().is_some_and(|other| other < position)
                } else {
                    self.processed.contains(target)
                };
                report(visitor, edge_ref, second)?;
            }
            GraphFlavour::DirectedEmbedded => {
                if edge.source() != node || (edge.is_loop() && edge.is_inverted()) {
                    return Ok(());
                }
                visitor.edge_first_traversal(edge_ref)?;
            }
        }

        if !self.discovered.contains(target) {
            self.discovered.insert(target);
            self.frontier.push(target).map_err(Error::from)?;
        }
        Ok(())
    }
}

fn report<V>(visitor: &mut V, edge: EdgeRef, second: bool) -> Result<(), V::Error>
where
    V: TraversalVisitor + ?Sized,
{
    if second {
        visitor.edge_second_traversal(edge)
    } else {
        visitor.edge_first_traversal(edge)
    }
}
