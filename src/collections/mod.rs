//! Supporting data structures
//!
//! - `heap`: binary min-heap priority queue with lazy-deletion discipline
//! - `dsu`: union-find with path compression and union by rank

pub mod dsu;
pub mod heap;

pub use dsu::DisjointSet;
pub use heap::MinQueue;
