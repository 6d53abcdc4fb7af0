//! The naive exact matcher: exhaustive search guarded by a vertex cap,
//! used as an oracle on small graphs.
//!
//! For each vertex in input order, either skip it or pair it with one of
//! its unused neighbors; keep the best-scoring complete assignment. Exact
//! but exponential; above the configured cap (reference: 50) it returns an
//! empty matching and emits a trace note rather than attempting the
//! search.
//!
//! The search itself is not meaningfully step-granular (it is one recursive
//! call tree, not an outer loop over a flat sequence), so the whole search
//! runs inside a single `step()` call that immediately yields
//! `StepOutcome::Done`.

use crate::adjacency::{AdjacencyIndex, FillMode};
use crate::graph::{EdgeId, Graph, Matching, VertexId};
use crate::step::{Matcher, StepOutcome};
use crate::trace::{TraceHandle, TraceSink};

/// The reference vertex cap above which the naive matcher refuses to run.
pub const DEFAULT_VERTEX_CAP: usize = 50;

pub struct NaiveMatcher<'g, 't> {
    graph: &'g Graph,
    cap: usize,
    trace: TraceHandle<'t>,
    done: bool,
}

impl<'g, 't> NaiveMatcher<'g, 't> {
    pub fn new(graph: &'g Graph, cap: usize, trace: Option<&'t mut dyn TraceSink>) -> Self {
        NaiveMatcher {
            graph,
            cap,
            trace: TraceHandle::new(trace),
            done: false,
        }
    }

    pub fn with_default_cap(graph: &'g Graph, trace: Option<&'t mut dyn TraceSink>) -> Self {
        Self::new(graph, DEFAULT_VERTEX_CAP, trace)
    }

    fn search(&mut self) -> Matching {
        if self.graph.vertex_count() > self.cap {
            log::warn!(
                "naive matcher: {} vertices exceeds cap {}, skipping the search",
                self.graph.vertex_count(),
                self.cap
            );
            let sink = self.trace.sink();
            sink.message(&format!(
                "naive matcher: {} vertices exceeds cap {}, skipping",
                self.graph.vertex_count(),
                self.cap
            ));
            sink.commit();
            return Matching::empty();
        }

        log::debug!(
            "naive matcher: searching {} vertices (cap {})",
            self.graph.vertex_count(),
            self.cap
        );

        let index = AdjacencyIndex::build(self.graph, FillMode::Undirected, self.trace.sink());
        let n = self.graph.vertex_count();
        let mut used = vec![false; n];
        let mut current: Vec<EdgeId> = Vec::new();
        let mut best_score = 0u64;
        let mut best_edges: Vec<EdgeId> = Vec::new();

        search_from(
            self.graph,
            &index,
            0,
            &mut used,
            &mut current,
            0,
            &mut best_score,
            &mut best_edges,
        );

        self.trace.sink().message("naive matcher: search complete");
        self.trace.sink().commit();

        Matching::from_edge_ids(self.graph, best_edges)
    }
}

#[allow(clippy::too_many_arguments)]
fn search_from(
    graph: &Graph,
    index: &AdjacencyIndex,
    vertex: usize,
    used: &mut [bool],
    current: &mut Vec<EdgeId>,
    current_score: u64,
    best_score: &mut u64,
    best_edges: &mut Vec<EdgeId>,
) {
    if vertex == graph.vertex_count() {
        if current_score > *best_score {
            *best_score = current_score;
            *best_edges = current.clone();
        }
        return;
    }

    if used[vertex] {
        search_from(graph, index, vertex + 1, used, current, current_score, best_score, best_edges);
        return;
    }

    // Option 1: leave this vertex unmatched.
    search_from(graph, index, vertex + 1, used, current, current_score, best_score, best_edges);

    // Option 2: pair it with each currently-unused neighbor.
    let v = VertexId(vertex as u32);
    for &edge_id in index.incident_edges(v) {
        let edge = graph.edge(edge_id);
        let other = edge.other(v);
        if used[other.index()] {
            continue;
        }

        used[vertex] = true;
        used[other.index()] = true;
        current.push(edge_id);

        search_from(
            graph,
            index,
            vertex + 1,
            used,
            current,
            current_score + u64::from(edge.weight),
            best_score,
            best_edges,
        );

        current.pop();
        used[vertex] = false;
        used[other.index()] = false;
    }
}

impl Matcher for NaiveMatcher<'_, '_> {
    fn step(&mut self) -> StepOutcome {
        assert!(!self.done, "NaiveMatcher::step called after completion");
        self.done = true;
        StepOutcome::Done(self.search())
    }
}

pub fn naive_matching(graph: &Graph, cap: usize, trace: Option<&mut dyn TraceSink>) -> Matching {
    let mut matcher = NaiveMatcher::new(graph, cap, trace);
    let (matching, _steps) = crate::step::run_to_completion(&mut matcher);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_yields_empty_matching() {
        let g = Graph::empty();
        let m = naive_matching(&g, DEFAULT_VERTEX_CAP, None);
        assert!(m.is_empty());
    }

    #[test]
    fn above_cap_yields_empty_matching() {
        let g = Graph::from_edges(4, [(0, 1, 100), (2, 3, 100)]);
        let m = naive_matching(&g, 2, None);
        assert!(m.is_empty());
    }

    #[test]
    fn triangle_optimum_is_heaviest_single_edge() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 10)]);
        let m = naive_matching(&g, DEFAULT_VERTEX_CAP, None);
        assert_eq!(m.score(), 10);
    }

    #[test]
    fn six_edge_path_optimum_is_21() {
        let g = Graph::from_edges(
            7,
            [
                (0, 1, 10),
                (1, 2, 1),
                (2, 3, 2),
                (3, 4, 9),
                (4, 5, 9),
                (5, 6, 2),
            ],
        );
        let m = naive_matching(&g, DEFAULT_VERTEX_CAP, None);
        assert_eq!(m.score(), 21);
    }
}
