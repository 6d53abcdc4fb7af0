//! The matcher contract: a uniform `(graph, trace) -> matching` shape
//! produced as a lazy, pull-based step sequence.
//!
//! A matcher never runs to completion on construction. It exposes `step()`,
//! which performs one unit of visible progress and returns either
//! [`StepOutcome::Step`] (more work remains) or [`StepOutcome::Done`] (the
//! final matching). This lets [`crate::runner::Runner`] single-step, pace in
//! bursts, or run to completion, and keeps every suspension point explicit.
//!
//! The natural Rust analogue of a generator or coroutine per matcher is
//! this small pull-based state machine. Matchers whose natural recursion
//! would otherwise need a stack-transform into a trampoline (tree-growing,
//! blossom) instead take a shortcut: one outer-loop iteration is one step,
//! since step events carry no semantics and the granularity is free to
//! choose.

use crate::graph::Matching;

/// The result of pulling one step from a [`Matcher`].
pub enum StepOutcome {
    /// One unit of visible progress was made; more steps may follow.
    Step,
    /// The matcher has finished; this is its final result.
    Done(Matching),
}

/// A matcher driven one step at a time.
///
/// Implementations must be deterministic given identical constructor
/// arguments and must not let the presence or absence of a trace sink
/// change anything about the returned matching.
pub trait Matcher {
    /// Advances the matcher by one step.
    ///
    /// **Panics** if called again after returning `StepOutcome::Done`.
    fn step(&mut self) -> StepOutcome;
}

/// Drives `matcher` to completion in-process, ignoring step granularity.
///
/// This is the primitive the synchronous runner mode is built from; kept
/// separate so matcher unit tests can get a result without going through
/// `Runner` and its step-budget bookkeeping.
pub fn run_to_completion(matcher: &mut dyn Matcher) -> (Matching, u64) {
    let mut steps = 0u64;
    loop {
        match matcher.step() {
            StepOutcome::Step => steps += 1,
            StepOutcome::Done(matching) => return (matching, steps + 1),
        }
    }
}
