//! Runner properties: step count is positive for any non-trivial input,
//! and the synchronous and cooperative runners agree.

use matchgraph::matchers::blossom::BlossomMatcher;
use matchgraph::matchers::greedy::GreedyMatcher;
use matchgraph::matchers::naive::NaiveMatcher;
use matchgraph::matchers::path_growing::{PathGrowingMatcher, Variant};
use matchgraph::matchers::tree_growing::TreeGrowingMatcher;
use matchgraph::{Graph, Runner, RunnerConfig};

fn sample_graph() -> Graph {
    Graph::from_edges(
        7,
        [
            (0, 1, 10),
            (1, 2, 1),
            (2, 3, 2),
            (3, 4, 9),
            (4, 5, 9),
            (5, 6, 2),
        ],
    )
}

#[test]
fn step_count_is_positive_for_every_matcher_on_nontrivial_input() {
    let g = sample_graph();
    let runner = Runner::new(RunnerConfig::default());

    let mut greedy = GreedyMatcher::new(&g, None);
    assert!(runner.run(&g, &mut greedy).unwrap().steps > 0);

    let mut path_growing = PathGrowingMatcher::new(&g, Variant::Standard, None);
    assert!(runner.run(&g, &mut path_growing).unwrap().steps > 0);

    let mut tree_growing = TreeGrowingMatcher::new(&g, None);
    assert!(runner.run(&g, &mut tree_growing).unwrap().steps > 0);

    let mut naive = NaiveMatcher::new(&g, 50, None);
    assert!(runner.run(&g, &mut naive).unwrap().steps > 0);

    let mut blossom = BlossomMatcher::new(&g, None);
    assert!(runner.run(&g, &mut blossom).unwrap().steps > 0);
}

#[test]
fn synchronous_and_cooperative_runners_agree_on_the_blossom_matcher() {
    let g = sample_graph();

    let mut sync_matcher = BlossomMatcher::new(&g, None);
    let sync_runner = Runner::new(RunnerConfig::default());
    let sync_out = sync_runner.run(&g, &mut sync_matcher).unwrap();

    let mut coop_matcher = BlossomMatcher::new(&g, None);
    let coop_runner = Runner::new(RunnerConfig { max_steps: 100_000_000, burst_size: 1 });
    let coop_out = coop_runner.run_cooperative(&g, &mut coop_matcher, || false).unwrap();

    assert_eq!(sync_out.steps, coop_out.steps);
    assert_eq!(sync_out.matching.score(), coop_out.matching.score());
}
