//! Random graph generation, used by randomized property tests that need a
//! source of varied graphs (for example "for all random inputs with `|V| <=
//! 15`, the exact matchers agree").
//!
//! Grounded on `petgraph`'s own `generate`/`generators` modules: random and
//! deterministic graph construction shipped as part of the core crate
//! rather than as a separate tool. The benchmark harness and the UI that
//! would pick which mission to generate stay out of this crate's scope;
//! this is just the pure, side-effect-free graph constructor underneath
//! them.

use rand::Rng;

use crate::graph::{Graph, GraphBuilder};

/// Generates a graph of `node_count` vertices by iterating every unordered
/// pair and including an edge with probability `edge_rate_percent / 100`,
/// weighted uniformly in `[0, 1000)`. Reflexive edges are never considered,
/// since `(i, i)` is not an unordered pair of distinct vertices.
pub fn random_mission<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    edge_rate_percent: u32,
) -> Graph {
    let mut builder = GraphBuilder::new(node_count);

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_range(0..100) < edge_rate_percent {
                let weight = rng.gen_range(0..1000);
                builder
                    .add_edge((i as u32).into(), (j as u32).into(), weight)
                    .expect("random_mission: generated edge is always well-formed");
            }
        }
    }

    builder.build()
}
