//! Recursive depth-first search with true finish order.

use tracing::debug;

use super::flavour::{ensure_fits, Sizing};
use super::frontier::DiscoverySet;
use super::hooks::TraversalVisitor;
use super::{DisconnectedMode, TraversalConditions};
use crate::network::{EdgeRef, Network};

/// Depth-first search using the call stack.
///
/// Unlike [`pseudo_depth_first_search`](super::pseudo_depth_first_search),
/// a node is only finished (`node_after_edges`) once every node reachable
/// through it has been finished, so the finish order is a reverse
/// topological order on acyclic directed graphs. Descending along an edge
/// fires `edge_to_undiscovered_node`.
///
/// Recursion depth equals the length of the longest discovery path.
///
/// # Errors
///
/// Returns the first error raised by a hook, or `Error::CapacityExceeded`
/// if the graph has more nodes than its static sizing.
pub fn depth_first_search<G, V>(
    graph: &G,
    conditions: TraversalConditions,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    G: Network,
    V: TraversalVisitor + ?Sized,
{
    ensure_fits(graph)?;

    let order = graph.order();
    let start = conditions.start();
    if start >= order {
        debug!(start, order, "start node outside the graph, nothing to traverse");
        return Ok(());
    }

    debug!(start, order, flavour = ?G::FLAVOUR, "starting recursive depth-first search");
    let mut discovered = <<G::Sizing as Sizing>::Discovered as DiscoverySet>::for_order(order);
    visit(graph, start, &mut discovered, visitor)?;

    if conditions.disconnected() == DisconnectedMode::Find {
        let mut cursor = 0;
        while let Some(root) = discovered.first_unmarked(cursor, order) {
            debug!(root, "restarting depth-first search in a new component");
            visit(graph, root, &mut discovered, visitor)?;
            cursor = root + 1;
        }
    }

    Ok(())
}

fn visit<G, D, V>(graph: &G, node: usize, discovered: &mut D, visitor: &mut V) -> Result<(), V::Error>
where
    G: Network,
    D: DiscoverySet,
    V: TraversalVisitor + ?Sized,
{
    discovered.insert(node);
    visitor.node_before_edges(node)?;

    for (position, edge) in graph.edges(node).iter().enumerate() {
        let target = edge.target();
        if !discovered.contains(target) {
            visitor.edge_to_undiscovered_node(EdgeRef::new(node, position))?;
            visit(graph, target, discovered, visitor)?;
        }
    }

    visitor.node_after_edges(node)
}
