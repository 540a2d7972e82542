use crate::algos::{Algorithm, RunResult};
use crate::collections::MinQueue;
use crate::graph::{edge_key, Graph};
use crate::trace::{Step, StepKind};
use std::collections::{HashMap, HashSet};

/// Prim's minimum spanning tree.
///
/// Undirected graphs only: a directed graph is refused with an error
/// result before any work happens. `start` is optional and defaults
/// to the first node in order.
///
/// `min_weight` holds the best known connecting edge weight per node
/// and `previous` the node on the other end of it; a separate visited
/// set marks committed nodes. The heap is keyed by edge weight with
/// the same lazy-deletion discipline as Dijkstra: popping a visited
/// node covers both revisits and stale entries. The loop stops once
/// `|V| - 1` edges are committed or the heap runs dry; a disconnected
/// graph simply commits fewer edges, which callers read from
/// `mst_edges.len()`. `operations` counts dequeues.
#[tracing::instrument(skip(graph), fields(start = ?start))]
pub fn run_prim(graph: &Graph, start: Option<&str>) -> RunResult {
    let mut result = RunResult::new(Algorithm::Prim);
    if graph.directed() {
        return RunResult::failure(Algorithm::Prim, "MST requires Undirected");
    }

    let ids = graph.node_ids();
    let Some(first) = ids.first() else {
        return RunResult::failure(Algorithm::Prim, "graph has no nodes");
    };
    let start = match start {
        Some(id) if graph.contains_node(id) => id.to_string(),
        Some(id) => {
            return RunResult::failure(Algorithm::Prim, format!("node not found: {}", id))
        }
        None => first.clone(),
    };

    let mut min_weight: HashMap<String, f64> =
        ids.iter().map(|id| (id.clone(), f64::INFINITY)).collect();
    let mut previous: HashMap<String, Option<String>> =
        ids.iter().map(|id| (id.clone(), None)).collect();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = MinQueue::new();
    let mut mst: Vec<String> = Vec::new();
    let mut total_cost = 0.0;

    min_weight.insert(start.clone(), 0.0);
    queue.enqueue(0.0, start.clone());
    result.trace.record(Step::new(
        StepKind::Init,
        format!("Prim's: Start from {}", start),
    ));

    while mst.len() < ids.len().saturating_sub(1) {
        let Some((_, u)) = queue.dequeue() else { break };
        result.operations += 1;

        if visited.contains(&u) {
            continue; // already committed, entry is stale
        }

        if let Some(parent) = previous.get(&u).cloned().flatten() {
            let key = edge_key(&u, &parent, false);
            let weight = min_weight.get(&u).copied().unwrap_or(f64::INFINITY);
            mst.push(key.clone());
            total_cost += weight;
            result.trace.record(
                Step::new(
                    StepKind::AddMst,
                    format!(
                        "Add edge {}-{} (w={}) | Cost: {:.2}",
                        parent, u, weight, total_cost
                    ),
                )
                .with_edge(u.as_str(), parent.as_str())
                .with_edge_key(key)
                .with_value(weight)
                .with_frontier(format!("MST edges: {}", mst.len())),
            );
        }
        visited.insert(u.clone());
        result
            .trace
            .record(Step::new(StepKind::Current, format!("Process {}", u)).with_node(u.as_str()));

        for edge in graph.neighbors(&u) {
            let v = &edge.target;
            let known = min_weight.get(v).copied().unwrap_or(f64::INFINITY);
            if !visited.contains(v) && edge.weight < known {
                min_weight.insert(v.clone(), edge.weight);
                previous.insert(v.clone(), Some(u.clone()));
                result.trace.record(
                    Step::new(
                        StepKind::Update,
                        format!("Update: {}-{} (w={})", u, v, edge.weight),
                    )
                    .with_edge(u.as_str(), v.as_str())
                    .with_value(edge.weight),
                );
                queue.enqueue(edge.weight, v.clone());
            }
        }
    }

    result.mst_edges = Some(mst);
    result.cost = Some(total_cost);
    result
}
