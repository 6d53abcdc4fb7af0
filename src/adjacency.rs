//! Dense per-vertex adjacency index built from a [`Graph`](crate::graph::Graph).
//!
//! Several matchers repeatedly need "what edges still touch vertex v" while
//! vertices are removed one at a time as the algorithm consumes them
//! (path-growing, naive's recursive skip/pair search conceptually, greedy's
//! `used` bookkeeping). Rather than re-deriving that per matcher we build it
//! once, the way `petgraph`'s `visit` module builds a `FixedBitSet` visited
//! map once per traversal and hands it to every walker.

use fixedbitset::FixedBitSet;

use crate::graph::{EdgeId, Graph, VertexId};
use crate::trace::TraceSink;

/// How [`AdjacencyIndex::build`] populates each vertex's incident-edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Each edge is appended to both endpoints' lists (the graph is
    /// genuinely undirected from the index's point of view).
    Undirected,
    /// Each edge is appended only to its `from` endpoint's list.
    ForwardOnly,
}

/// A dense, mutable adjacency index over a fixed vertex set.
///
/// `remove(v)` deletes `v` and purges every edge incident to `v` from each
/// other endpoint's list; an endpoint whose list becomes empty is
/// considered *absent*.
pub struct AdjacencyIndex {
    entries: Vec<Vec<EdgeId>>,
    alive: FixedBitSet,
    alive_count: usize,
    mode: FillMode,
}

impl AdjacencyIndex {
    /// Builds the index from every edge of `graph`, according to `mode`.
    pub fn build(graph: &Graph, mode: FillMode, trace: &mut dyn TraceSink) -> Self {
        let mut entries = vec![Vec::new(); graph.vertex_count()];

        for edge_id in graph.edge_ids() {
            let edge = graph.edge(edge_id);
            trace.current_edge(edge_id);

            entries[edge.from.index()].push(edge_id);
            if mode == FillMode::Undirected {
                entries[edge.to.index()].push(edge_id);
            }
        }

        let mut alive = FixedBitSet::with_capacity(entries.len());
        let mut alive_count = 0;
        for (idx, edges) in entries.iter().enumerate() {
            if !edges.is_empty() {
                alive.insert(idx);
                alive_count += 1;
            }
        }

        AdjacencyIndex {
            entries,
            alive,
            alive_count,
            mode,
        }
    }

    /// The edges currently recorded as incident to `v`.
    ///
    /// **Panics** if `v` is out of range for the graph the index was built
    /// from (as opposed to merely absent, which returns an empty slice).
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.entries[v.index()]
    }

    /// `true` if `v` still has at least one incident edge recorded.
    pub fn contains(&self, v: VertexId) -> bool {
        v.index() < self.alive.len() && self.alive[v.index()]
    }

    /// `true` iff no vertex has any incident edge left.
    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    /// Iterates over every vertex (by dense index) that currently has at
    /// least one incident edge, together with its edge list.
    pub fn iter_entries(&self) -> impl Iterator<Item = (VertexId, &[EdgeId])> {
        self.alive
            .ones()
            .map(|idx| (VertexId(idx as u32), self.entries[idx].as_slice()))
    }

    /// Removes `v` from the index, purging every edge incident to it from
    /// the other endpoint's list. A no-op if `v` is already absent.
    pub fn remove(&mut self, v: VertexId, graph: &Graph, trace: &mut dyn TraceSink) {
        if !self.contains(v) {
            return;
        }

        let incident: Vec<EdgeId> = std::mem::take(&mut self.entries[v.index()]);
        self.alive.set(v.index(), false);
        self.alive_count -= 1;

        for edge_id in incident {
            trace.current_edge(edge_id);
            let edge = graph.edge(edge_id);
            let other = edge.other(v);

            if other.index() >= self.entries.len() {
                continue;
            }

            // A forward-only fill never recorded this edge on `other`'s list
            // in the first place, so an absent entry here is expected, not a
            // bug; only undirected fills make the symmetric removal do
            // anything, and for those the entry must be there.
            let other_list = &mut self.entries[other.index()];
            let had_entry = other_list.contains(&edge_id);
            other_list.retain(|&e| e != edge_id);

            debug_assert!(
                self.mode != FillMode::Undirected || had_entry,
                "adjacency index inconsistent: edge {edge_id} missing from vertex {other}'s list under an undirected fill"
            );

            if had_entry && other_list.is_empty() && self.alive[other.index()] {
                self.alive.set(other.index(), false);
                self.alive_count -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::NullTrace;

    #[test]
    fn undirected_fill_is_symmetric() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);
        let idx = AdjacencyIndex::build(&g, FillMode::Undirected, &mut NullTrace);
        assert_eq!(idx.incident_edges(VertexId(0)), &[EdgeId(0)]);
        assert_eq!(idx.incident_edges(VertexId(1)), &[EdgeId(0), EdgeId(1)]);
        assert_eq!(idx.incident_edges(VertexId(2)), &[EdgeId(1)]);
    }

    #[test]
    fn forward_only_fill_is_one_sided() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);
        let idx = AdjacencyIndex::build(&g, FillMode::ForwardOnly, &mut NullTrace);
        assert_eq!(idx.incident_edges(VertexId(0)), &[EdgeId(0)]);
        assert_eq!(idx.incident_edges(VertexId(1)), &[EdgeId(1)]);
        assert!(idx.incident_edges(VertexId(2)).is_empty());
    }

    #[test]
    fn remove_purges_neighbor_lists() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);
        let mut idx = AdjacencyIndex::build(&g, FillMode::Undirected, &mut NullTrace);
        idx.remove(VertexId(1), &g, &mut NullTrace);
        assert!(!idx.contains(VertexId(1)));
        assert!(idx.incident_edges(VertexId(0)).is_empty());
        assert!(idx.incident_edges(VertexId(2)).is_empty());
        assert!(idx.is_empty());
    }

    #[test]
    fn remove_absent_vertex_is_a_no_op() {
        let g = Graph::from_edges(2, [(0, 1, 1)]);
        let mut idx = AdjacencyIndex::build(&g, FillMode::Undirected, &mut NullTrace);
        idx.remove(VertexId(0), &g, &mut NullTrace);
        idx.remove(VertexId(0), &g, &mut NullTrace);
        assert!(!idx.contains(VertexId(0)));
    }
}
