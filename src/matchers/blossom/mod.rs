//! Edmonds' blossom algorithm: an exact maximum-weight matching solver for
//! general graphs via primal-dual LP duality.
//!
//! Split across submodules the way the algorithm itself separates
//! concerns: [`state`] owns the shared tables and the smallest per-vertex
//! helpers, [`scan`] finds augmenting paths versus new blossoms,
//! [`blossom_ops`] contracts/expands/augments blossoms, and [`stage`] drives
//! the outer stage loop. [`verify`] is a debug-only sanity check run once
//! at the end.

mod blossom_ops;
mod scan;
mod stage;
mod state;
mod verify;

use crate::graph::{Graph, Matching};
use crate::step::{Matcher, StepOutcome};
use crate::trace::{TraceHandle, TraceSink};

use state::BlossomState;

/// Drives [`BlossomState`] one stage at a time, per the crate-wide
/// convention that a matcher's `step()` is one outer-loop iteration: here,
/// one full stage of the primal-dual algorithm.
pub struct BlossomMatcher<'g, 't> {
    graph: &'g Graph,
    state: BlossomState<'g>,
    trace: TraceHandle<'t>,
    stage: usize,
    max_stages: usize,
    done: bool,
}

impl<'g, 't> BlossomMatcher<'g, 't> {
    pub fn new(graph: &'g Graph, trace: Option<&'t mut dyn TraceSink>) -> Self {
        BlossomMatcher {
            graph,
            state: BlossomState::new(graph),
            trace: TraceHandle::new(trace),
            stage: 0,
            max_stages: graph.vertex_count(),
            done: false,
        }
    }

    fn finish(&mut self) -> Matching {
        debug_assert!(
            verify::check(&self.state),
            "blossom solver produced a dual-infeasible result"
        );

        let edges = self.state.extract_matching();
        self.trace.sink().message("blossom matcher: all stages complete");
        self.trace.sink().commit();

        Matching::from_edge_ids(self.graph, edges)
    }
}

impl Matcher for BlossomMatcher<'_, '_> {
    fn step(&mut self) -> StepOutcome {
        assert!(!self.done, "BlossomMatcher::step called after completion");

        if self.stage >= self.max_stages {
            log::debug!("blossom: reached stage cap {}", self.max_stages);
            self.done = true;
            return StepOutcome::Done(self.finish());
        }

        let augmented = self.state.run_stage();
        log::trace!("blossom: stage {} complete, augmented={augmented}", self.stage);
        self.stage += 1;
        self.trace.sink().step("blossom_stage");

        if !augmented {
            log::debug!("blossom: no augmenting path found, stopping after {} stages", self.stage);
            self.done = true;
            return StepOutcome::Done(self.finish());
        }

        StepOutcome::Step
    }
}

/// Computes an exact maximum-weight matching via Edmonds' blossom
/// algorithm.
pub fn blossom_matching(graph: &Graph, trace: Option<&mut dyn TraceSink>) -> Matching {
    let mut matcher = BlossomMatcher::new(graph, trace);
    let (matching, _steps) = crate::step::run_to_completion(&mut matcher);
    matching
}
