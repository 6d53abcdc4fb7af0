//! The tree-growing heuristic: DFS that grows an alternating tree with
//! local augmentation.
//!
//! For each unvisited input vertex, `grow_tree` marks it visited, walks its
//! incident edges in weight-descending order, and recurses on the first
//! unlabeled endpoint of each. If taking that edge (its weight minus the
//! recursive subtree's own best improvement) beats the best improvement
//! found so far at this node, the subtree is re-augmented so the edge can
//! be added, and the node becomes the new `chosen` parent of that edge.
//! Faster than the blossom solver; approximate, not optimal.
//!
//! As with path-growing, the DFS recursion itself is not step-granular:
//! one top-level unvisited vertex is one `step()`, and the `grow_tree`
//! recursion it triggers runs to completion within that single step.

use crate::adjacency::{AdjacencyIndex, FillMode};
use crate::graph::{EdgeId, Graph, Matching, VertexId};
use crate::step::{Matcher, StepOutcome};
use crate::trace::{TraceHandle, TraceSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreeLabel {
    Unvisited,
    Visited,
    Chosen,
}

pub struct TreeGrowingMatcher<'g, 't> {
    graph: &'g Graph,
    index: AdjacencyIndex,
    vertices: Vec<VertexId>,
    cursor: usize,
    label: Vec<TreeLabel>,
    picked: Vec<Option<EdgeId>>,
    trace: TraceHandle<'t>,
    done: bool,
}

impl<'g, 't> TreeGrowingMatcher<'g, 't> {
    pub fn new(graph: &'g Graph, trace: Option<&'t mut dyn TraceSink>) -> Self {
        let mut trace = TraceHandle::new(trace);
        let index = AdjacencyIndex::build(graph, FillMode::Undirected, trace.sink());
        let n = graph.vertex_count();

        TreeGrowingMatcher {
            graph,
            index,
            vertices: graph.vertex_ids().collect(),
            cursor: 0,
            label: vec![TreeLabel::Unvisited; n],
            picked: vec![None; n],
            trace,
            done: false,
        }
    }

    fn finish(&mut self) -> Matching {
        let edges: Vec<EdgeId> = self
            .label
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == TreeLabel::Chosen)
            .filter_map(|(idx, _)| self.picked[idx])
            .collect();

        self.trace.sink().message("tree-growing matcher: walk complete");
        self.trace.sink().commit();

        Matching::from_edge_ids(self.graph, edges)
    }
}

/// Flips matched/unmatched labels along the alternating subpath from `node`
/// so that `node`'s caller can freely claim it for a new edge. Walks one
/// hop at a time for as long as `picked[v]` is set, so taking a vertex for
/// a new parent discards whatever remainder of its previous tentative
/// chain it had; consistent with this matcher being a fast, approximate
/// heuristic rather than an exact re-matcher.
fn augment(mut v: VertexId, graph: &Graph, label: &mut [TreeLabel], picked: &[Option<EdgeId>]) {
    while let Some(edge_id) = picked[v.index()] {
        label[v.index()] = TreeLabel::Visited;
        let next = graph.edge(edge_id).other(v);
        label[next.index()] = TreeLabel::Chosen;
        v = next;
    }
}

#[allow(clippy::too_many_arguments)]
fn grow_tree(
    node: VertexId,
    parent_edge: Option<EdgeId>,
    graph: &Graph,
    index: &AdjacencyIndex,
    label: &mut [TreeLabel],
    picked: &mut [Option<EdgeId>],
    trace: &mut dyn TraceSink,
) -> i64 {
    label[node.index()] = TreeLabel::Visited;
    trace.current_node(node);

    let mut candidates: Vec<EdgeId> = index.incident_edges(node).to_vec();
    candidates.sort_by(|&a, &b| graph.edge(b).weight.cmp(&graph.edge(a).weight));

    let mut best_so_far: i64 = 0;

    for edge_id in candidates {
        if Some(edge_id) == parent_edge {
            continue;
        }

        let next = graph.edge(edge_id).other(node);
        if label[next.index()] != TreeLabel::Unvisited {
            trace.message("tree-growing matcher: cycle detected");
            continue;
        }

        let sub = grow_tree(next, Some(edge_id), graph, index, label, picked, trace);
        let gain = i64::from(graph.edge(edge_id).weight) - sub;

        if gain > best_so_far {
            augment(next, graph, label, picked);
            picked[node.index()] = Some(edge_id);
            label[node.index()] = TreeLabel::Chosen;
            best_so_far = gain;
            trace.pick_edge(edge_id, "tentative");
        }
    }

    best_so_far
}

impl Matcher for TreeGrowingMatcher<'_, '_> {
    fn step(&mut self) -> StepOutcome {
        assert!(!self.done, "TreeGrowingMatcher::step called after completion");

        if self.cursor == self.vertices.len() {
            self.done = true;
            return StepOutcome::Done(self.finish());
        }

        let v = self.vertices[self.cursor];
        self.cursor += 1;

        if self.label[v.index()] == TreeLabel::Unvisited {
            grow_tree(
                v,
                None,
                self.graph,
                &self.index,
                &mut self.label,
                &mut self.picked,
                self.trace.sink(),
            );
        }

        self.trace.sink().step("tree_growing_vertex");
        StepOutcome::Step
    }
}

pub fn tree_growing_matching(graph: &Graph, trace: Option<&mut dyn TraceSink>) -> Matching {
    let mut matcher = TreeGrowingMatcher::new(graph, trace);
    let (matching, _steps) = crate::step::run_to_completion(&mut matcher);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::verify;

    #[test]
    fn empty_graph_yields_empty_matching() {
        let g = Graph::empty();
        let m = tree_growing_matching(&g, None);
        assert!(m.is_empty());
    }

    #[test]
    fn single_edge_is_taken() {
        let g = Graph::from_edges(2, [(0, 1, 4)]);
        let m = tree_growing_matching(&g, None);
        assert_eq!(m.score(), 4);
    }

    #[test]
    fn disjoint_edges_all_selected() {
        let g = Graph::from_edges(4, [(0, 1, 10), (2, 3, 10)]);
        let m = tree_growing_matching(&g, None);
        assert_eq!(m.score(), 20);
    }

    #[test]
    fn triangle_produces_a_valid_matching() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 10)]);
        let m = tree_growing_matching(&g, None);
        assert!(verify(&g, &m));
        assert!(!m.is_empty());
    }

    #[test]
    fn six_edge_path_produces_a_valid_matching() {
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
        let m = tree_growing_matching(&g, None);
        assert!(verify(&g, &m));
    }
}
