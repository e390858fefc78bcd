//! Input validation errors for the instrumented algorithms
//!
//! [`InvalidInputError`] is returned by [`build_history`] when a structural
//! precondition is violated. Every check runs before the first snapshot is
//! recorded, so a failed run never yields a partial history.
//!
//! [`build_history`]: crate::algorithms::build_history

use crate::input::{Family, InputKind, NodeId};
use crate::snapshot::Value;

/// Structural precondition violated by an algorithm input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// The input shape does not match the family
    #[error("{family} expects {expected}, got {got}")]
    FamilyMismatch {
        family: Family,
        expected: InputKind,
        got: InputKind,
    },

    /// Binary search was handed a sequence that is not ascending
    #[error("sequence is not sorted: index {index} ({value}) is smaller than its predecessor")]
    UnsortedSequence { index: usize, value: Value },

    /// Counting and radix sort only handle non-negative values
    #[error("{family} needs non-negative values: index {index} holds {value}")]
    NegativeValue {
        family: Family,
        index: usize,
        value: Value,
    },

    /// Counting sort count table would be too large
    #[error("value {value} at index {index} exceeds the counting sort limit of {limit}")]
    ValueTooLarge {
        index: usize,
        value: Value,
        limit: Value,
    },

    /// Traversal needs at least one node
    #[error("graph has no nodes")]
    EmptyGraph,

    /// Start node is not part of the graph
    #[error("start node {start} is not in a graph of {nodes} nodes")]
    StartOutOfRange { start: NodeId, nodes: usize },

    /// Adjacency list names a node that does not exist
    #[error("node {from} lists unknown neighbor {to}")]
    DanglingNeighbor { from: NodeId, to: NodeId },

    /// Edge present in one direction only
    #[error("edge {from} -> {to} has no reverse edge")]
    AsymmetricEdge { from: NodeId, to: NodeId },

    /// Some node cannot be reached from the start node
    #[error("node {node} is unreachable from start node {start}")]
    DisconnectedGraph { node: NodeId, start: NodeId },
}
