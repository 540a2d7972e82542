//! Weighted graph model
//!
//! Provides the adjacency-list graph the algorithms run over:
//! - Directed or undirected, with mirroring enforced for undirected edges
//! - Mutation API that rejects invariant violations at the boundary
//! - Structural property checks used by callers to guard algorithm preconditions

pub mod properties;
pub mod types;

pub use properties::{
    has_cycle, has_negative_weights, is_bipartite, is_connected, metrics, GraphMetrics,
};
pub use types::{edge_key, Edge, Graph, Node, Position};
