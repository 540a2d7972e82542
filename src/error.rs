//! Error types for graphwalk
//!
//! `GraphError` covers the graph *mutation boundary* only: callers
//! building or editing a graph get explicit errors for invariant
//! violations. Algorithm runs never fail with an `Err`: precondition
//! violations (directed graph into an MST algorithm, unknown start
//! node) are reported through the `error` field of the run result so
//! a UI can render the failure state directly.

use thiserror::Error;

/// Errors raised by graph construction and mutation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("self-loop edges are not allowed: {id}")]
    SelfLoop { id: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("edge weight must be finite: {from} -> {to} (weight {weight})")]
    NonFiniteWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

impl GraphError {
    /// Create an error for a node id that is not in the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        GraphError::NodeNotFound { id: id.into() }
    }

    /// Create an error for a node id that is already taken
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        GraphError::DuplicateNode { id: id.into() }
    }
}

/// Result type alias for graph mutation operations
pub type Result<T> = std::result::Result<T, GraphError>;
