//! Runs hook bodies on a task pool during a breadth-first search.
//!
//! Each discovered node schedules a task that sums the weights of its
//! neighbours. Results come back in discovery order and are checked against
//! the inline model.
//!
//! ```bash
//! RUST_LOG=graphwalk_core=debug cargo run --example pool_traversal
//! ```

use graphwalk_core::network::{DynamicNetwork, Network, Undirected};
use graphwalk_core::traversal::{
    breadth_first_search, Scheduled, Serial, TaskHooks, TaskPool, ThreadConfig,
    TraversalConditions,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ORDER: usize = 20_000;

fn main() -> Result<(), graphwalk_core::Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut g = DynamicNetwork::<Undirected, u64>::with_capacity(ORDER);
    for _ in 0..ORDER {
        g.add_node(rng.gen_range(1..100));
    }
    for _ in 0..ORDER * 3 {
        g.connect(rng.gen_range(0..ORDER), rng.gen_range(0..ORDER))?;
    }
    tracing::info!(order = g.order(), size = g.size(), "network built");

    let hooks = TaskHooks::new().node_before_edges(|node: usize| {
        g.edges(node)
            .iter()
            .filter_map(|edge| g.node_weight(edge.target()))
            .sum::<u64>()
    });
    let conditions = TraversalConditions::new(0);

    let pool = TaskPool::new(ThreadConfig::Auto)?;
    let (outcome, parallel) =
        pool.scope(|model| breadth_first_search(&g, conditions, &mut Scheduled::new(&hooks, model)));
    outcome?;
    tracing::info!(threads = pool.threads(), tasks = parallel.len(), "pool run finished");

    let mut serial = Serial::new();
    breadth_first_search(&g, conditions, &mut Scheduled::new(&hooks, &mut serial))?;
    assert_eq!(parallel, serial.into_results());

    let heaviest = parallel.iter().max().copied().unwrap_or_default();
    tracing::info!(heaviest, "largest neighbourhood weight");
    Ok(())
}
