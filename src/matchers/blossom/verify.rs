//! A debug-only dual-feasibility and complementary-slackness check. Never
//! runs in a release build; it exists to catch a transcription error in
//! the primal-dual bookkeeping, not to gate production behavior.

use super::state::BlossomState;

/// Checks the solver's final state against the LP duality conditions the
/// algorithm is supposed to maintain as an invariant:
///
/// - every vertex dual is non-negative
/// - every live blossom's dual is non-negative
/// - every edge has non-negative slack, except where both endpoints share a
///   top-level blossom (slack is meaningless inside a blossom)
/// - every matched edge has exactly zero slack
/// - every blossom with a positive dual is full: exactly one of its leaves
///   is matched outside the blossom, the rest are matched to each other
///   within it
pub(super) fn check(state: &BlossomState<'_>) -> bool {
    for v in 0..state.n {
        if state.dualvar[v] < 0 {
            return false;
        }
    }

    for b in state.n..2 * state.n {
        if !state.blossombase[b].is_none() && state.dualvar[b] < 0 {
            return false;
        }
    }

    for (k, edge) in state.graph.edges().iter().enumerate() {
        let k = crate::graph::EdgeId(k as u32);
        let (u, v) = (edge.from.index(), edge.to.index());
        if state.inblossom[u] == state.inblossom[v] {
            continue;
        }
        if state.slack(k) < 0 {
            return false;
        }
    }

    for v in 0..state.n {
        let m = state.mate[v];
        if !m.is_none() && state.slack(m.edge()) != 0 {
            return false;
        }
    }

    for b in state.n..2 * state.n {
        if state.blossombase[b].is_none() || state.dualvar[b] <= 0 {
            continue;
        }

        let leaves = state.blossom_leaves(super::state::Node::from(b));
        if leaves.len() % 2 != 1 {
            return false;
        }

        let mut outside = 0usize;
        for &leaf in &leaves {
            let m = state.mate[leaf];
            if m.is_none() {
                return false;
            }
            let partner = state.endpoint_vertex(m);
            if !leaves.contains(&partner) {
                outside += 1;
            }
        }
        if outside != 1 {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn solved(graph: &Graph) -> BlossomState<'_> {
        let mut state = BlossomState::new(graph);
        for _ in 0..state.n.max(1) {
            if !state.run_stage() {
                break;
            }
        }
        state
    }

    #[test]
    fn triangle_is_dual_feasible() {
        let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 10)]);
        assert!(check(&solved(&g)));
    }

    #[test]
    fn odd_cycle_requiring_a_blossom_contraction_is_dual_feasible() {
        let g = Graph::from_edges(
            5,
            [(0, 1, 3), (1, 2, 3), (2, 3, 3), (3, 4, 3), (4, 0, 3)],
        );
        assert!(check(&solved(&g)));
    }

    #[test]
    fn six_edge_path_is_dual_feasible() {
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
        assert!(check(&solved(&g)));
    }

    #[test]
    fn empty_graph_is_trivially_dual_feasible() {
        let g = Graph::empty();
        assert!(check(&solved(&g)));
    }
}
