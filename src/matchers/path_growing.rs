//! The path-growing 1/2-approximation and its per-path ("patched") variant.
//!
//! Builds an undirected [`AdjacencyIndex`], then repeatedly starts a walk
//! from each input vertex that still has incident edges: at each step pick
//! the heaviest incident edge (ties broken by insertion order), assign it to
//! whichever of two running matchings `M1`/`M2` is currently smaller, remove
//! the vertex from the index, and continue from the edge's other endpoint
//! until the walk runs out of road. The **standard** variant compares `M1`
//! and `M2` once, globally, at the very end; the **patched** variant
//! compares at the end of every walk and commits the winner immediately,
//! resetting `M1`/`M2` for the next walk. Both guarantee at least half of
//! the optimum.
//!
//! The inner walk is not itself step-granular here: one outer-loop vertex
//! is one `step()`, and the walk it may trigger runs to its natural end
//! within that single step, since step markers carry no semantics.

use crate::adjacency::{AdjacencyIndex, FillMode};
use crate::graph::{EdgeId, Graph, Matching, VertexId};
use crate::step::{Matcher, StepOutcome};
use crate::trace::{TraceHandle, TraceSink, TraceValue};

/// Selects between the standard (single global comparison) and patched
/// (per-walk comparison) path-growing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Standard,
    Patched,
}

struct RunningMatching {
    edges: Vec<EdgeId>,
    score: u64,
}

impl RunningMatching {
    fn new() -> Self {
        RunningMatching {
            edges: Vec::new(),
            score: 0,
        }
    }

    fn push(&mut self, graph: &Graph, edge_id: EdgeId) {
        self.score += u64::from(graph.edge(edge_id).weight);
        self.edges.push(edge_id);
    }

    fn take(&mut self) -> (Vec<EdgeId>, u64) {
        let edges = std::mem::take(&mut self.edges);
        let score = std::mem::take(&mut self.score);
        (edges, score)
    }
}

pub struct PathGrowingMatcher<'g, 't> {
    graph: &'g Graph,
    index: AdjacencyIndex,
    variant: Variant,
    vertices: Vec<VertexId>,
    cursor: usize,
    m1: RunningMatching,
    m2: RunningMatching,
    result: Vec<EdgeId>,
    trace: TraceHandle<'t>,
    done: bool,
}

impl<'g, 't> PathGrowingMatcher<'g, 't> {
    pub fn new(graph: &'g Graph, variant: Variant, trace: Option<&'t mut dyn TraceSink>) -> Self {
        let mut trace = TraceHandle::new(trace);
        let index = AdjacencyIndex::build(graph, FillMode::Undirected, trace.sink());

        PathGrowingMatcher {
            graph,
            index,
            variant,
            vertices: graph.vertex_ids().collect(),
            cursor: 0,
            m1: RunningMatching::new(),
            m2: RunningMatching::new(),
            result: Vec::new(),
            trace,
            done: false,
        }
    }

    /// Picks the heaviest edge incident to `v`, breaking ties by insertion
    /// (i.e. adjacency-list) order.
    fn heaviest_incident(&self, v: VertexId) -> Option<EdgeId> {
        self.index
            .incident_edges(v)
            .iter()
            .copied()
            .max_by_key(|&e| {
                // Negate the index so the *first* max-weight edge wins ties,
                // matching `max_by_key`'s "last maximum wins" default.
                let weight = self.graph.edge(e).weight;
                (weight, std::cmp::Reverse(e.index()))
            })
    }

    fn run_one_walk(&mut self, mut v: VertexId) {
        loop {
            let Some(edge_id) = self.heaviest_incident(v) else {
                break;
            };

            let target = if self.m1.score <= self.m2.score {
                &mut self.m1
            } else {
                &mut self.m2
            };
            target.push(self.graph, edge_id);
            log::trace!("path-growing: walk assigned edge {edge_id}");

            let sink = self.trace.sink();
            sink.current_edge(edge_id);
            sink.pick_edge(edge_id, "walk");

            let edge = self.graph.edge(edge_id);
            let next = edge.other(v);
            self.index.remove(v, self.graph, self.trace.sink());

            if !self.index.contains(next) {
                break;
            }
            v = next;
        }
    }

    fn finish(&mut self) -> Matching {
        let sink = self.trace.sink();
        sink.message("path-growing matcher: finalizing");
        sink.commit();

        if self.variant == Variant::Standard {
            let (m1_edges, m1_score) = self.m1.take();
            let (m2_edges, m2_score) = self.m2.take();
            log::debug!("path-growing (standard): m1={m1_score} m2={m2_score}");
            let winner = if m1_score >= m2_score { m1_edges } else { m2_edges };
            Matching::from_edge_ids(self.graph, winner)
        } else {
            let edges = std::mem::take(&mut self.result);
            Matching::from_edge_ids(self.graph, edges)
        }
    }
}

impl Matcher for PathGrowingMatcher<'_, '_> {
    fn step(&mut self) -> StepOutcome {
        assert!(!self.done, "PathGrowingMatcher::step called after completion");

        if self.cursor == self.vertices.len() {
            self.done = true;
            return StepOutcome::Done(self.finish());
        }

        let v = self.vertices[self.cursor];
        self.cursor += 1;

        if self.index.contains(v) {
            self.run_one_walk(v);

            if self.variant == Variant::Patched {
                let (m1_edges, m1_score) = self.m1.take();
                let (m2_edges, m2_score) = self.m2.take();
                let winner = if m1_score >= m2_score { m1_edges } else { m2_edges };
                self.trace
                    .sink()
                    .data("walk_winner_score", TraceValue::UInt(m1_score.max(m2_score)));
                self.result.extend(winner);
            }
        }

        self.trace.sink().step("path_growing_vertex");
        StepOutcome::Step
    }
}

pub fn path_growing_matching(graph: &Graph, variant: Variant, trace: Option<&mut dyn TraceSink>) -> Matching {
    let mut matcher = PathGrowingMatcher::new(graph, variant, trace);
    let (matching, _steps) = crate::step::run_to_completion(&mut matcher);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_yields_empty_matching() {
        let g = Graph::empty();
        for variant in [Variant::Standard, Variant::Patched] {
            let m = path_growing_matching(&g, variant, None);
            assert!(m.is_empty());
        }
    }

    #[test]
    fn single_edge_is_taken() {
        let g = Graph::from_edges(2, [(0, 1, 4)]);
        for variant in [Variant::Standard, Variant::Patched] {
            let m = path_growing_matching(&g, variant, None);
            assert_eq!(m.score(), 4);
        }
    }

    #[test]
    fn achieves_half_of_optimum_on_three_edge_path() {
        // 0-1 10, 1-2 1, 2-3 9; optimum is 19 (edges 0 and 2).
        let g = Graph::from_edges(4, [(0, 1, 10), (1, 2, 1), (2, 3, 9)]);
        for variant in [Variant::Standard, Variant::Patched] {
            let m = path_growing_matching(&g, variant, None);
            assert!(m.score() * 2 >= 19, "variant {variant:?} got {}", m.score());
        }
    }

    #[test]
    fn disjoint_edges_all_selected() {
        let g = Graph::from_edges(4, [(0, 1, 10), (2, 3, 10)]);
        for variant in [Variant::Standard, Variant::Patched] {
            let m = path_growing_matching(&g, variant, None);
            assert_eq!(m.score(), 20);
        }
    }
}
