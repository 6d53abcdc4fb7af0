//! The greedy (edge-weight descending) heuristic.
//!
//! Sort edges by weight descending, stable with respect to input order on
//! ties; scan in that order and take an edge iff neither endpoint is used
//! yet. `O(|E| log |E|)`. Known non-optimal case: a 3-edge path whose middle
//! edge is heaviest but the sum of the two outer edges is greater.

use crate::graph::{EdgeId, Graph, Matching};
use crate::step::{Matcher, StepOutcome};
use crate::trace::{TraceHandle, TraceSink, TraceValue};

pub struct GreedyMatcher<'g, 't> {
    graph: &'g Graph,
    order: Vec<EdgeId>,
    cursor: usize,
    used: Vec<bool>,
    selected: Vec<EdgeId>,
    trace: TraceHandle<'t>,
    done: bool,
}

impl<'g, 't> GreedyMatcher<'g, 't> {
    pub fn new(graph: &'g Graph, trace: Option<&'t mut dyn TraceSink>) -> Self {
        let mut order: Vec<EdgeId> = graph.edge_ids().collect();
        // `sort_by` is a stable sort, so edges that tie on weight keep their
        // original relative (input) order without any extra tie-break key.
        order.sort_by(|&a, &b| graph.edge(b).weight.cmp(&graph.edge(a).weight));

        GreedyMatcher {
            graph,
            order,
            cursor: 0,
            used: vec![false; graph.vertex_count()],
            selected: Vec::new(),
            trace: TraceHandle::new(trace),
            done: false,
        }
    }
}

impl Matcher for GreedyMatcher<'_, '_> {
    fn step(&mut self) -> StepOutcome {
        assert!(!self.done, "GreedyMatcher::step called after completion");

        if self.cursor == self.order.len() {
            self.done = true;
            let sink = self.trace.sink();
            sink.message("greedy matcher: scan complete");
            sink.commit();
            let selected = std::mem::take(&mut self.selected);
            return StepOutcome::Done(Matching::from_edge_ids(self.graph, selected));
        }

        let edge_id = self.order[self.cursor];
        self.cursor += 1;
        let edge = self.graph.edge(edge_id);

        let sink = self.trace.sink();
        sink.current_edge(edge_id);

        if !self.used[edge.from.index()] && !self.used[edge.to.index()] {
            self.used[edge.from.index()] = true;
            self.used[edge.to.index()] = true;
            self.selected.push(edge_id);
            log::trace!("greedy: took edge {edge_id} (weight {})", edge.weight);

            let sink = self.trace.sink();
            sink.pick_edge(edge_id, "matched");
            sink.data("selected_count", TraceValue::UInt(self.selected.len() as u64));
        }

        self.trace.sink().step("greedy_scan");
        StepOutcome::Step
    }
}

/// Runs the greedy matcher to completion. Convenience wrapper used by
/// other matchers (path-growing uses greedy-like per-vertex picks but not
/// this function) and by tests/benchmarks that don't need single-stepping.
pub fn greedy_matching(graph: &Graph, trace: Option<&mut dyn TraceSink>) -> Matching {
    let mut matcher = GreedyMatcher::new(graph, trace);
    let (matching, _steps) = crate::step::run_to_completion(&mut matcher);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_yields_empty_matching() {
        let g = Graph::empty();
        let m = greedy_matching(&g, None);
        assert!(m.is_empty());
        assert_eq!(m.score(), 0);
    }

    #[test]
    fn single_edge_is_taken() {
        let g = Graph::from_edges(2, [(0, 1, 7)]);
        let m = greedy_matching(&g, None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.score(), 7);
    }

    #[test]
    fn classic_counterexample_is_suboptimal() {
        // A-B 2, B-C 3, C-D 2: optimum is 4 (outer edges), greedy picks the
        // heavier middle edge first and is left with score 3.
        let g = Graph::from_edges(4, [(0, 1, 2), (1, 2, 3), (2, 3, 2)]);
        let m = greedy_matching(&g, None);
        assert_eq!(m.score(), 3);
    }

    #[test]
    fn disjoint_edges_are_all_taken() {
        let g = Graph::from_edges(4, [(0, 1, 10), (2, 3, 10)]);
        let m = greedy_matching(&g, None);
        assert_eq!(m.score(), 20);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn ties_break_toward_input_order() {
        // Two disjoint edges of equal weight and one edge competing with the
        // second for a shared vertex: the first-seen equal-weight edge
        // should win since sort_by is stable.
        let g = Graph::from_edges(3, [(0, 1, 5), (1, 2, 5)]);
        let m = greedy_matching(&g, None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.score(), 5);
        assert_eq!(g.edge(m.edges()[0]).from.index(), 0);
    }
}
