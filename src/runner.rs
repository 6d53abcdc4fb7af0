//! Drives a [`Matcher`] to completion, counting steps and enforcing a
//! budget. Two modes: a synchronous full run for benchmarking and tests,
//! and a cooperative run that consumes steps in bursts and yields to the
//! host scheduler between them, for a UI that must stay responsive and may
//! need to cancel mid-run.

use crate::error::{RunnerError, RunnerResult};
use crate::graph::{self, Graph, Matching};
use crate::step::{Matcher, StepOutcome};

/// Tuning knobs for a [`Runner`]. The defaults below are a step budget of
/// 10^8 and a cooperative burst size of 10^5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub max_steps: u64,
    pub burst_size: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            max_steps: 100_000_000,
            burst_size: 100_000,
        }
    }
}

/// The result of a completed run: the matching plus the number of steps it
/// took to produce it.
#[derive(Debug, Clone)]
pub struct RunnerOutput {
    pub matching: Matching,
    pub steps: u64,
}

/// Drives a matcher's step sequence under a configured budget.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Runner { config }
    }

    /// Pulls steps until the matcher is done, or the step budget is
    /// exceeded. Always runs the post-hoc validity check (§7) on the
    /// result; a failure there is a bug in the matcher, not an operational
    /// error, so it panics rather than returning `Err`.
    pub fn run(&self, graph: &Graph, matcher: &mut dyn Matcher) -> RunnerResult<RunnerOutput> {
        let mut steps = 0u64;
        loop {
            match matcher.step() {
                StepOutcome::Step => {
                    steps += 1;
                    self.check_budget(steps)?;
                }
                StepOutcome::Done(matching) => {
                    steps += 1;
                    self.check_budget(steps)?;
                    return Ok(self.finish(graph, matching, steps));
                }
            }
        }
    }

    /// Consumes steps in bursts of `burst_size`, checking `cancelled` once
    /// per burst boundary and yielding to the host scheduler in between.
    /// On cancellation, returns [`RunnerError::Cancelled`] with no partial
    /// matching. Individual steps are not interruptible, so worst-case
    /// cancellation latency is bounded by one burst.
    pub fn run_cooperative(
        &self,
        graph: &Graph,
        matcher: &mut dyn Matcher,
        mut cancelled: impl FnMut() -> bool,
    ) -> RunnerResult<RunnerOutput> {
        let mut steps = 0u64;
        loop {
            for _ in 0..self.config.burst_size {
                match matcher.step() {
                    StepOutcome::Step => {
                        steps += 1;
                        self.check_budget(steps)?;
                    }
                    StepOutcome::Done(matching) => {
                        steps += 1;
                        self.check_budget(steps)?;
                        return Ok(self.finish(graph, matching, steps));
                    }
                }
            }

            if cancelled() {
                log::debug!("runner: cancelled after {steps} steps");
                return Err(RunnerError::Cancelled);
            }
            log::trace!("runner: burst boundary at {steps} steps");
            std::thread::yield_now();
        }
    }

    fn check_budget(&self, steps: u64) -> RunnerResult<()> {
        if steps > self.config.max_steps {
            log::error!("runner: step budget of {} exceeded", self.config.max_steps);
            return Err(RunnerError::StepBudgetExceeded(self.config.max_steps));
        }
        Ok(())
    }

    fn finish(&self, graph: &Graph, matching: Matching, steps: u64) -> RunnerOutput {
        if !graph::verify(graph, &matching) {
            log::error!("runner: matcher produced a matching that fails verification");
            panic!("runner: matcher produced an invalid matching");
        }
        RunnerOutput { matching, steps }
    }
}
