//! Common utilities shared by the shortest-path runners

use crate::graph::Graph;
use std::collections::HashMap;

/// Distance and back-pointer maps for every node: distance `∞`,
/// predecessor `None`
pub(crate) fn init_distance_maps(
    graph: &Graph,
) -> (HashMap<String, f64>, HashMap<String, Option<String>>) {
    let mut distances = HashMap::new();
    let mut previous = HashMap::new();
    for id in graph.node_ids() {
        distances.insert(id.clone(), f64::INFINITY);
        previous.insert(id, None);
    }
    (distances, previous)
}

/// Walk the back-pointer map from `target` to the source, returning
/// the route in forward order
pub(crate) fn rebuild_path(
    previous: &HashMap<String, Option<String>>,
    target: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(target.to_string());
    while let Some(node) = current {
        path.push(node.clone());
        current = previous.get(&node).cloned().flatten();
    }
    path.reverse();
    path
}
