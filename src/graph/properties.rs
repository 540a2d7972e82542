//! Structural graph properties
//!
//! Checks a UI surfaces while the user edits, and that callers use to
//! guard algorithm preconditions (negative weights before Dijkstra,
//! connectivity before expecting a complete MST).

use crate::graph::types::Graph;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// Summary counts for the metrics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub nodes: usize,
    pub edges: usize,
    /// Percentage of the maximum possible edge count
    pub density_pct: f64,
}

/// Node and edge counts plus density
pub fn metrics(graph: &Graph) -> GraphMetrics {
    GraphMetrics {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        density_pct: graph.density(),
    }
}

/// Whether every node is reachable from the first node, following
/// stored adjacency. The empty graph counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    let ids = graph.node_ids();
    let Some(first) = ids.first() else {
        return true;
    };

    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([first.clone()]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for edge in graph.neighbors(&current) {
            if !visited.contains(&edge.target) {
                queue.push_back(edge.target.clone());
            }
        }
    }

    visited.len() == ids.len()
}

/// Whether any edge carries a negative weight
pub fn has_negative_weights(graph: &Graph) -> bool {
    graph
        .node_ids()
        .iter()
        .any(|id| graph.neighbors(id).iter().any(|e| e.weight < 0.0))
}

/// Whether the graph contains a cycle.
///
/// DFS with a recursion stack, skipping the edge back to the
/// immediate parent. This is the undirected-editing check: a directed
/// two-cycle through the parent is not reported.
pub fn has_cycle(graph: &Graph) -> bool {
    let mut visited = HashSet::new();
    let mut stack = HashSet::new();

    for node in graph.node_ids() {
        if !visited.contains(&node) && cycle_from(graph, &node, None, &mut visited, &mut stack) {
            return true;
        }
    }
    false
}

fn cycle_from(
    graph: &Graph,
    node: &str,
    parent: Option<&str>,
    visited: &mut HashSet<String>,
    stack: &mut HashSet<String>,
) -> bool {
    visited.insert(node.to_string());
    stack.insert(node.to_string());

    for edge in graph.neighbors(node) {
        let target = edge.target.as_str();
        if !visited.contains(target) {
            if cycle_from(graph, target, Some(node), visited, stack) {
                return true;
            }
        } else if stack.contains(target) && parent != Some(target) {
            return true;
        }
    }

    stack.remove(node);
    false
}

/// Whether the nodes admit a 2-coloring (BFS over every component)
pub fn is_bipartite(graph: &Graph) -> bool {
    let mut color: HashMap<String, u8> = HashMap::new();

    for start in graph.node_ids() {
        if color.contains_key(&start) {
            continue;
        }
        color.insert(start.clone(), 0);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let current_color = color[&current];
            for edge in graph.neighbors(&current) {
                match color.get(&edge.target) {
                    None => {
                        color.insert(edge.target.clone(), 1 - current_color);
                        queue.push_back(edge.target.clone());
                    }
                    Some(&c) if c == current_color => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}
