//! **matchgraph** is a library of maximum-weight matching algorithms for
//! general undirected graphs.
//!
//! The most prominent type is [`graph::Graph`], a read-only edge-weighted
//! graph over dense vertex ids `[0, |V|)`. Five matchers operate on it, from
//! fast heuristics to an exact solver:
//!
//! - [`matchers::greedy`]: sort edges by weight, take greedily.
//! - [`matchers::path_growing`]: a 1/2-approximation (standard and patched
//!   variants).
//! - [`matchers::tree_growing`]: a DFS alternating-tree heuristic.
//! - [`matchers::naive`]: exhaustive search, exact but exponential, capped.
//! - [`matchers::blossom`]: Edmonds' blossom algorithm, exact for any
//!   graph via primal-dual LP duality.
//!
//! Every matcher implements [`step::Matcher`], a pull-based state machine
//! that yields one visible unit of progress per call, suited to both
//! single-stepping a visualization and driving straight to completion via
//! [`runner::Runner`].

pub mod adjacency;
pub mod error;
pub mod generators;
pub mod graph;
pub mod heap;
pub mod matchers;
pub mod runner;
pub mod step;
pub mod trace;

pub use error::{GraphError, GraphResult, RunnerError, RunnerResult};
pub use graph::{Edge, EdgeId, Graph, GraphBuilder, Matching, VertexId};
pub use runner::{Runner, RunnerConfig, RunnerOutput};
pub use step::{Matcher, StepOutcome};
pub use trace::{TraceHandle, TraceSink, TraceValue};
