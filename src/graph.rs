//! Immutable input types: vertices, edges, graphs, and the `Matching` result.
//!
//! Mirrors the shape of `petgraph::graph::Graph` (dense index newtypes,
//! builder-style construction) but is deliberately narrower: a `Graph` here
//! is always undirected, vertex ids are dense in `[0, vertex_count)`, edge
//! weights are non-negative integers, and there is at most one edge between
//! any pair of vertices.

use std::collections::HashSet;
use std::fmt;

use crate::error::{GraphError, GraphResult};

/// A dense, zero-based vertex identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(value: u32) -> Self {
        VertexId(value)
    }
}

/// A dense, zero-based edge identifier, an index into `Graph::edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An undirected, weighted edge. `(from, to, weight)` and `(to, from,
/// weight)` denote the same edge; the order recorded here is simply the
/// order the caller supplied, preserved for deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
}

impl Edge {
    /// Returns the endpoint that is not `v`.
    ///
    /// **Panics** if `v` is not an endpoint of this edge.
    pub fn other(&self, v: VertexId) -> VertexId {
        if v == self.from {
            self.to
        } else if v == self.to {
            self.from
        } else {
            panic!("vertex {v:?} is not an endpoint of edge {self:?}");
        }
    }

    fn normalized_pair(&self) -> (VertexId, VertexId) {
        if self.from.0 <= self.to.0 {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// An immutable, undirected, weighted graph with dense vertex ids.
///
/// Built once via [`GraphBuilder`] (or [`Graph::from_edges`] for tests and
/// examples) and never mutated afterwards; matchers treat it as read-only
/// and share it by reference rather than taking ownership.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// An empty graph with no vertices and no edges.
    pub fn empty() -> Self {
        Graph {
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count as u32).map(VertexId)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len() as u32).map(EdgeId)
    }

    /// Convenience constructor for tests and doctests: builds a graph with
    /// `vertex_count` vertices from `(from, to, weight)` triples, in order.
    ///
    /// **Panics** if the edges are invalid; see [`GraphBuilder`] for a
    /// fallible equivalent.
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (u32, u32, u32)>) -> Self {
        let mut builder = GraphBuilder::new(vertex_count);
        for (from, to, weight) in edges {
            builder
                .add_edge(VertexId(from), VertexId(to), weight)
                .expect("from_edges: invalid edge");
        }
        builder.build()
    }
}

/// Validating constructor for [`Graph`].
///
/// Rejects self-loops, duplicate unordered pairs, and out-of-range vertex
/// ids at the point of insertion, rather than letting a malformed graph
/// reach a matcher.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<Edge>,
    seen_pairs: HashSet<(VertexId, VertexId)>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        GraphBuilder {
            vertex_count,
            edges: Vec::new(),
            seen_pairs: HashSet::new(),
        }
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: u32) -> GraphResult<EdgeId> {
        if from.index() >= self.vertex_count {
            return Err(GraphError::VertexOutOfBounds(from, self.vertex_count));
        }
        if to.index() >= self.vertex_count {
            return Err(GraphError::VertexOutOfBounds(to, self.vertex_count));
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }

        let edge = Edge { from, to, weight };
        let pair = edge.normalized_pair();
        if !self.seen_pairs.insert(pair) {
            return Err(GraphError::DuplicateEdge(pair.0, pair.1));
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(edge);
        Ok(id)
    }

    pub fn build(self) -> Graph {
        Graph {
            vertex_count: self.vertex_count,
            edges: self.edges,
        }
    }
}

/// A valid matching: a subset (by identity) of an input graph's edges such
/// that no vertex is incident to more than one selected edge.
#[derive(Debug, Clone, Default)]
pub struct Matching {
    edges: Vec<EdgeId>,
    score: u64,
}

impl Matching {
    pub fn empty() -> Self {
        Matching {
            edges: Vec::new(),
            score: 0,
        }
    }

    /// Builds a matching from the graph it was computed over and the set of
    /// selected edge ids, computing and caching its score.
    pub fn from_edge_ids(graph: &Graph, edges: Vec<EdgeId>) -> Self {
        let score = edges.iter().map(|&id| u64::from(graph.edge(id).weight)).sum();
        Matching { edges, score }
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}

/// Verifies that `matching` is a valid matching of `graph`: every edge id is
/// in range, every vertex appears at most once across the matching's
/// endpoints. This is the post-hoc validity check every matcher's output is
/// run through by the runner before it is trusted.
pub fn verify(graph: &Graph, matching: &Matching) -> bool {
    let mut used = vec![false; graph.vertex_count()];
    for &edge_id in matching.edges() {
        if edge_id.index() >= graph.edge_count() {
            return false;
        }
        let edge = graph.edge(edge_id);
        if used[edge.from.index()] || used[edge.to.index()] {
            return false;
        }
        used[edge.from.index()] = true;
        used[edge.to.index()] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_loop() {
        let mut builder = GraphBuilder::new(2);
        let err = builder.add_edge(VertexId(0), VertexId(0), 1).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop(VertexId(0)));
    }

    #[test]
    fn rejects_duplicate_edge_either_order() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(VertexId(0), VertexId(1), 5).unwrap();
        let err = builder.add_edge(VertexId(1), VertexId(0), 9).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge(VertexId(0), VertexId(1)));
    }

    #[test]
    fn empty_graph_has_no_edges_or_vertices() {
        let g = Graph::empty();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn verify_rejects_shared_vertex() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1)]);
        let bad = Matching::from_edge_ids(&g, vec![EdgeId(0), EdgeId(1)]);
        assert!(!verify(&g, &bad));
    }

    #[test]
    fn verify_accepts_disjoint_matching() {
        let g = Graph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
        let m = Matching::from_edge_ids(&g, vec![EdgeId(0), EdgeId(1)]);
        assert!(verify(&g, &m));
        assert_eq!(m.score(), 2);
    }
}
