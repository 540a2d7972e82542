use crate::error::{GraphError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canvas coordinates for a node. Carried for the UI; every algorithm
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A weighted edge to a target node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub target: String,
    pub weight: f64,
}

/// A node record: optional canvas position plus outgoing adjacency
#[derive(Debug, Clone, Default, Serialize)]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub neighbors: Vec<Edge>,
}

/// Canonical display key for an edge.
///
/// Directed edges keep their orientation (`"u-v"`); undirected edges
/// sort their endpoints so both directions map to the same key.
pub fn edge_key(u: &str, v: &str, directed: bool) -> String {
    if directed || u < v {
        format!("{}-{}", u, v)
    } else {
        format!("{}-{}", v, u)
    }
}

/// Adjacency-list weighted graph, directed or undirected.
///
/// Nodes are keyed by an opaque, orderable id (typically a short
/// string such as `"A"`). Iteration order over nodes is ascending
/// lexical, which is the crate's deterministic ordering wherever the
/// visual step sequence depends on it.
///
/// Directedness is a graph-level flag. For undirected graphs every
/// edge insertion, re-weighting, and removal is mirrored on both
/// endpoints; the mutation API maintains that invariant so algorithms
/// can assume it holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    directed: bool,
    nodes: BTreeMap<String, Node>,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            nodes: BTreeMap::new(),
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Add a node with no position
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<()> {
        self.insert_node(id.into(), None)
    }

    /// Add a node at a canvas position
    pub fn add_node_at(&mut self, id: impl Into<String>, x: f64, y: f64) -> Result<()> {
        self.insert_node(id.into(), Some(Position { x, y }))
    }

    fn insert_node(&mut self, id: String, position: Option<Position>) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::duplicate_node(id));
        }
        self.nodes.insert(
            id,
            Node {
                position,
                neighbors: Vec::new(),
            },
        );
        Ok(())
    }

    /// Remove a node and every edge incident to it
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        if self.nodes.remove(id).is_none() {
            return Err(GraphError::node_not_found(id));
        }
        for node in self.nodes.values_mut() {
            node.neighbors.retain(|edge| edge.target != id);
        }
        Ok(())
    }

    /// Add an edge, or update its weight if it already exists.
    ///
    /// Self-loops and non-finite weights are rejected here, at the
    /// mutation boundary, so algorithms never have to re-check. For
    /// undirected graphs the mirror edge is inserted or re-weighted
    /// in the same call.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if from == to {
            return Err(GraphError::SelfLoop {
                id: from.to_string(),
            });
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        if !self.nodes.contains_key(from) {
            return Err(GraphError::node_not_found(from));
        }
        if !self.nodes.contains_key(to) {
            return Err(GraphError::node_not_found(to));
        }

        Self::upsert_edge(self.nodes.get_mut(from), to, weight);
        if !self.directed {
            Self::upsert_edge(self.nodes.get_mut(to), from, weight);
        }
        Ok(())
    }

    fn upsert_edge(node: Option<&mut Node>, target: &str, weight: f64) {
        // Node presence was checked before mutation started
        if let Some(node) = node {
            match node.neighbors.iter_mut().find(|e| e.target == target) {
                Some(edge) => edge.weight = weight,
                None => node.neighbors.push(Edge {
                    target: target.to_string(),
                    weight,
                }),
            }
        }
    }

    /// Remove an edge (and its mirror on an undirected graph)
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let removed = self
            .nodes
            .get_mut(from)
            .map(|node| {
                let before = node.neighbors.len();
                node.neighbors.retain(|e| e.target != to);
                node.neighbors.len() < before
            })
            .unwrap_or(false);

        if !removed {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if !self.directed {
            if let Some(node) = self.nodes.get_mut(to) {
                node.neighbors.retain(|e| e.target != from);
            }
        }
        Ok(())
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of a node, in insertion order. Unknown ids yield
    /// an empty slice.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.nodes.get(id).map(|n| n.neighbors.as_slice()).unwrap_or(&[])
    }

    /// Node ids in ascending lexical order
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges. Undirected mirrors count once.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.nodes.values().map(|n| n.neighbors.len()).sum();
        if self.directed {
            total
        } else {
            total / 2
        }
    }

    /// Edge density as a percentage of the maximum possible edge count
    pub fn density(&self) -> f64 {
        let v = self.nodes.len();
        if v < 2 {
            return 0.0;
        }
        let max_edges = if self.directed {
            (v * (v - 1)) as f64
        } else {
            (v * (v - 1)) as f64 / 2.0
        };
        self.edge_count() as f64 / max_edges * 100.0
    }

    /// Weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }
}
