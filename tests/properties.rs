//! Universal properties, optimality checks, and approximation bounds that
//! should hold for every matcher, driven by the seeded `rand_chacha` RNG the
//! way `petgraph`'s own randomized algorithm tests are.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use matchgraph::generators::random_mission;
use matchgraph::graph::{verify, Graph};
use matchgraph::matchers::blossom::blossom_matching;
use matchgraph::matchers::greedy::greedy_matching;
use matchgraph::matchers::naive::{naive_matching, DEFAULT_VERTEX_CAP};
use matchgraph::matchers::path_growing::{path_growing_matching, Variant};
use matchgraph::matchers::tree_growing::tree_growing_matching;

fn all_matchers(g: &Graph) -> Vec<(&'static str, matchgraph::graph::Matching)> {
    vec![
        ("greedy", greedy_matching(g, None)),
        ("path_growing_standard", path_growing_matching(g, Variant::Standard, None)),
        ("path_growing_patched", path_growing_matching(g, Variant::Patched, None)),
        ("tree_growing", tree_growing_matching(g, None)),
        ("naive", naive_matching(g, DEFAULT_VERTEX_CAP, None)),
        ("blossom", blossom_matching(g, None)),
    ]
}

#[test]
fn every_matcher_produces_a_valid_matching_on_empty_input() {
    let g = Graph::empty();
    for (name, m) in all_matchers(&g) {
        assert!(verify(&g, &m), "{name} failed verification on an empty graph");
        assert!(m.is_empty(), "{name} returned a non-empty matching for an empty graph");
    }
}

#[test]
fn every_matcher_produces_a_valid_matching_on_a_single_edge() {
    let g = Graph::from_edges(2, [(0, 1, 42)]);
    for (name, m) in all_matchers(&g) {
        assert!(verify(&g, &m), "{name} failed verification on a single edge");
        assert_eq!(m.score(), 42, "{name} did not take the only edge available");
    }
}

#[test]
fn vertices_with_no_edges_yield_empty_matchings_regardless_of_count() {
    let g = Graph::from_edges(10, Vec::<(u32, u32, u32)>::new());
    for (name, m) in all_matchers(&g) {
        assert!(m.is_empty(), "{name} found edges in an edgeless graph");
    }
}

#[test]
fn every_matcher_produces_a_valid_matching_on_random_graphs() {
    for seed in 0..30u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = random_mission(&mut rng, 12, 45);
        for (name, m) in all_matchers(&g) {
            assert!(verify(&g, &m), "{name} failed verification on seed {seed}");
        }
    }
}

#[test]
fn permuting_edge_order_does_not_change_score_for_the_exact_matchers() {
    // Naive and blossom both compute the graph's true optimum, which is a
    // property of the graph, not of edge input order, so equality is exact
    // regardless of ties. Greedy is intentionally excluded: its tie-break
    // rule (stable sort on weight) can and does change which edges it
    // takes when several are tied, and that can change the total score;
    // see the star-graph counterexample in `DESIGN.md`.
    for seed in 0..15u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = random_mission(&mut rng, 10, 50);

        let reversed_edges: Vec<(u32, u32, u32)> = g
            .edges()
            .iter()
            .rev()
            .map(|e| (e.from.0, e.to.0, e.weight))
            .collect();
        let reversed = Graph::from_edges(g.vertex_count(), reversed_edges);

        let naive_a = naive_matching(&g, DEFAULT_VERTEX_CAP, None);
        let naive_b = naive_matching(&reversed, DEFAULT_VERTEX_CAP, None);
        assert_eq!(naive_a.score(), naive_b.score(), "naive score depended on edge order (seed {seed})");

        let blossom_a = blossom_matching(&g, None);
        let blossom_b = blossom_matching(&reversed, None);
        assert_eq!(blossom_a.score(), blossom_b.score(), "blossom score depended on edge order (seed {seed})");
    }
}

#[test]
fn blossom_matches_naive_optimum_on_small_random_graphs() {
    for seed in 0..40u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = 3 + (seed as usize % 13); // covers |V| in [3, 15]
        let g = random_mission(&mut rng, size, 60);

        let exact = blossom_matching(&g, None);
        let naive = naive_matching(&g, DEFAULT_VERTEX_CAP, None);
        assert!(verify(&g, &exact));
        assert_eq!(exact.score(), naive.score(), "blossom/naive disagreed on seed {seed}, |V|={size}");
    }
}

#[test]
fn greedy_is_at_least_half_of_the_optimum() {
    for seed in 0..40u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = random_mission(&mut rng, 11, 40);
        let optimum = blossom_matching(&g, None).score();
        let greedy = greedy_matching(&g, None).score();
        assert!(
            2 * greedy >= optimum,
            "greedy ({greedy}) fell below half the optimum ({optimum}) on seed {seed}"
        );
    }
}

#[test]
fn path_growing_is_at_least_half_of_the_optimum() {
    for seed in 0..40u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = random_mission(&mut rng, 11, 40);
        let optimum = blossom_matching(&g, None).score();

        let standard = path_growing_matching(&g, Variant::Standard, None).score();
        assert!(
            2 * standard >= optimum,
            "path_growing (standard, {standard}) fell below half the optimum ({optimum}) on seed {seed}"
        );

        let patched = path_growing_matching(&g, Variant::Patched, None).score();
        assert!(
            2 * patched >= optimum,
            "path_growing (patched, {patched}) fell below half the optimum ({optimum}) on seed {seed}"
        );
    }
}

#[test]
fn classic_greedy_counterexample() {
    // A-B 2, B-C 3, C-D 2: optimum pairs the two outer edges for 4; greedy
    // takes the heavier middle edge first and is left with 3.
    let g = Graph::from_edges(4, [(0, 1, 2), (1, 2, 3), (2, 3, 2)]);
    assert_eq!(blossom_matching(&g, None).score(), 4);
    assert_eq!(greedy_matching(&g, None).score(), 3);
}
