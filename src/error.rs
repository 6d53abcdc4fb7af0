//! Error types for graph construction and for driving a matcher to completion.
//!
//! Internal inconsistencies (a broken adjacency index, a blossom accounting
//! mismatch, a failed post-run validation) are bugs, not operational errors,
//! and are reported via `panic!`/`unreachable!` rather than through these
//! types.

use crate::graph::VertexId;

/// Errors rejected at graph construction time.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `from == to` for some edge; self-loops are not part of the data model.
    #[error("self-loop on vertex {0:?} is not allowed")]
    SelfLoop(VertexId),
    /// More than one edge was given between the same unordered pair of vertices.
    #[error("duplicate edge between {0:?} and {1:?}")]
    DuplicateEdge(VertexId, VertexId),
    /// An edge referenced a vertex id outside `[0, vertex_count)`.
    #[error("edge endpoint {0:?} is out of bounds for a graph of {1} vertices")]
    VertexOutOfBounds(VertexId, usize),
}

/// Errors produced while a [`crate::runner::Runner`] drives a matcher.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum RunnerError {
    /// The matcher did not reach `StepOutcome::Done` within the configured budget.
    #[error("step budget of {0} exceeded")]
    StepBudgetExceeded(u64),
    /// The cooperative runner observed its cancellation token set.
    #[error("run was cancelled")]
    Cancelled,
}

pub type GraphResult<T> = Result<T, GraphError>;
pub type RunnerResult<T> = Result<T, RunnerError>;
