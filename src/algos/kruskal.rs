use crate::algos::{Algorithm, RunResult};
use crate::collections::DisjointSet;
use crate::graph::Graph;
use crate::trace::{Step, StepKind};

struct FlatEdge {
    u: String,
    v: String,
    weight: f64,
}

/// Kruskal's minimum spanning tree.
///
/// Undirected graphs only, same error contract as Prim's. Each edge
/// is collected exactly once (requiring `u < v` while sweeping the
/// adjacency lists) and sorted ascending by weight. The sort is
/// stable, so equal weights keep their enumeration order, which is
/// lexical by endpoints; any spanning tree is equally minimal under
/// weight ties, this just pins the one tests see. A `union` that
/// returns `false` marks the edge as cycle-forming and skips it.
///
/// No early exit at `|V| - 1` edges: the remaining unions all fail
/// anyway, and the skip steps are part of the lesson. Callers detect
/// a disconnected graph from `mst_edges.len() < |V| - 1`.
/// `operations` counts sorted-edge examinations.
#[tracing::instrument(skip(graph))]
pub fn run_kruskal(graph: &Graph) -> RunResult {
    let mut result = RunResult::new(Algorithm::Kruskal);
    if graph.directed() {
        return RunResult::failure(Algorithm::Kruskal, "MST requires Undirected");
    }

    let mut edges = Vec::new();
    for u in graph.node_ids() {
        for edge in graph.neighbors(&u) {
            if u.as_str() < edge.target.as_str() {
                edges.push(FlatEdge {
                    u: u.clone(),
                    v: edge.target.clone(),
                    weight: edge.weight,
                });
            }
        }
    }
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    result.trace.record(Step::new(
        StepKind::Init,
        format!("Kruskal's: Sorted {} edges", edges.len()),
    ));

    let mut ds = DisjointSet::new(graph.node_ids());
    let mut mst: Vec<String> = Vec::new();
    let mut total_cost = 0.0;

    for edge in &edges {
        result.operations += 1;

        if ds.union(&edge.u, &edge.v) {
            let key = format!("{}-{}", edge.u, edge.v);
            mst.push(key.clone());
            total_cost += edge.weight;
            result.trace.record(
                Step::new(
                    StepKind::AddMst,
                    format!(
                        "Add {}-{} (w={}) | Cost: {:.2}",
                        edge.u, edge.v, edge.weight, total_cost
                    ),
                )
                .with_edge(edge.u.as_str(), edge.v.as_str())
                .with_edge_key(key)
                .with_value(edge.weight)
                .with_frontier(format!("MST edges: {}", mst.len())),
            );
        } else {
            result.trace.record(
                Step::new(
                    StepKind::Skip,
                    format!("Skip {}-{}: Forms cycle", edge.u, edge.v),
                )
                .with_edge(edge.u.as_str(), edge.v.as_str()),
            );
        }
    }

    result.mst_edges = Some(mst);
    result.cost = Some(total_cost);
    result
}
