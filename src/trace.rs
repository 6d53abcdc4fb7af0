//! The trace sink collaborator.
//!
//! A matcher never *needs* a trace sink. Every event is optional from the
//! algorithm's perspective, and a no-op sink must never change behavior.
//! Matchers take `&mut dyn TraceSink` rather than a generic parameter so
//! the same compiled matcher code works whether or not a caller wired up a
//! real sink, mirroring how `petgraph`'s `visit` traversals take a
//! `VisitMap` by mutable reference rather than baking traversal state into
//! the algorithm.

use indexmap::IndexMap;

use crate::graph::{EdgeId, VertexId};

/// Observer for algorithm progress, intended for visualization or UI
/// collaborators that live outside this crate.
///
/// Every method has a no-op default so implementers only override the
/// events they actually render.
pub trait TraceSink {
    /// A named unit of visible progress (not necessarily one step-marker;
    /// see [`crate::step`]).
    fn step(&mut self, _name: &str) {}

    /// A free-form human-readable note, e.g. "naive matcher: graph exceeds
    /// cap, skipping".
    fn message(&mut self, _text: &str) {}

    /// A named, structured value an observer may want to chart or log.
    fn data(&mut self, _name: &str, _payload: TraceValue) {}

    /// The vertex the algorithm is currently examining.
    fn current_node(&mut self, _v: VertexId) {}

    /// The edge the algorithm is currently examining.
    fn current_edge(&mut self, _e: EdgeId) {}

    /// Highlight a vertex with a named color (e.g. to show it joining the
    /// matching).
    fn pick_node(&mut self, _v: VertexId, _color: &str) {}

    /// Highlight an edge with a named color.
    fn pick_edge(&mut self, _e: EdgeId, _color: &str) {}

    /// Clear any highlighting applied by `pick_node`/`pick_edge`.
    fn remove_highlighting(&mut self) {}

    /// Attach a color/name legend for the current highlighting scheme.
    fn add_legend(&mut self, _legend: &IndexMap<String, String>) {}

    /// Marks a displayable frame boundary. Must be idempotent: calling it
    /// twice in a row with no events in between is indistinguishable from
    /// calling it once.
    fn commit(&mut self) {}
}

/// A structured value passed to [`TraceSink::data`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceValue {
    Int(i64),
    UInt(u64),
    Text(String),
    Bool(bool),
}

/// The default no-op trace sink. Every matcher entry point accepts
/// `Option<&mut dyn TraceSink>`; when `None`, callers get `&mut NullTrace`
/// internally so the algorithm code never has to branch on presence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTrace;

impl TraceSink for NullTrace {}

/// Owns either a caller-supplied sink or the shared no-op one, so a matcher
/// that must hold its sink across several `step()` calls doesn't need a
/// lifetime tied to a temporary.
///
/// Every internal helper (the adjacency index, the blossom tables, ...)
/// still just takes a plain `&mut dyn TraceSink`; call [`TraceHandle::sink`]
/// to get one.
pub enum TraceHandle<'a> {
    External(&'a mut dyn TraceSink),
    Null(NullTrace),
}

impl<'a> TraceHandle<'a> {
    pub fn new(trace: Option<&'a mut dyn TraceSink>) -> Self {
        match trace {
            Some(sink) => TraceHandle::External(sink),
            None => TraceHandle::Null(NullTrace),
        }
    }

    pub fn sink(&mut self) -> &mut dyn TraceSink {
        match self {
            TraceHandle::External(sink) => *sink,
            TraceHandle::Null(null) => null,
        }
    }
}
