//! The five maximum-weight matching algorithms, each implementing
//! [`crate::step::Matcher`]: greedy, path-growing, naive, tree-growing, and
//! the exact blossom solver.
//!
//! Every matcher is constructed from a borrowed [`crate::graph::Graph`] and
//! an optional trace sink and is entirely self-contained: all auxiliary
//! structures are created at entry and dropped at return, and there is no
//! state shared across runs.

pub mod blossom;
pub mod greedy;
pub mod naive;
pub mod path_growing;
pub mod tree_growing;
