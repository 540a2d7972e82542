use crate::algos::{Algorithm, RunResult};
use crate::graph::Graph;
use crate::trace::{Step, StepKind};
use std::collections::HashMap;

/// Floyd-Warshall all-pairs shortest paths.
///
/// Builds a `|V| x |V|` distance matrix (diagonal 0, direct edges
/// their weight, `∞` otherwise) and a parallel `next` matrix whose
/// `[i][j]` entry is the node to step to from `i` en route to `j`.
/// The triple loop relaxes through each intermediate `k`, copying
/// `next[i][k]` forward on improvement. Both matrices index by the
/// lexical node order returned in `matrix_nodes`.
///
/// After all `k` complete, a negative diagonal entry proves a
/// negative cycle through that node; the run reports `cycle = true`
/// but still returns the matrices, which remain useful for display.
/// `operations` counts every inner-loop comparison.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn run_floyd_warshall(graph: &Graph) -> RunResult {
    let mut result = RunResult::new(Algorithm::FloydWarshall);
    let nodes = graph.node_ids();
    let v = nodes.len();
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut dist = vec![vec![f64::INFINITY; v]; v];
    let mut next: Vec<Vec<Option<String>>> = vec![vec![None; v]; v];

    for (i, id) in nodes.iter().enumerate() {
        dist[i][i] = 0.0;
        for edge in graph.neighbors(id) {
            if let Some(&j) = index.get(edge.target.as_str()) {
                dist[i][j] = edge.weight;
                next[i][j] = Some(edge.target.clone());
            }
        }
    }
    result
        .trace
        .record(Step::new(StepKind::Init, "Floyd-Warshall: Init matrix"));

    for k in 0..v {
        result.trace.record(
            Step::new(StepKind::Pass, format!("Intermediate: k={}", nodes[k]))
                .with_node(nodes[k].as_str()),
        );

        for i in 0..v {
            for j in 0..v {
                result.operations += 1;

                let through = dist[i][k] + dist[k][j];
                if dist[i][k].is_finite() && dist[k][j].is_finite() && through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k].clone();
                    result.trace.record(
                        Step::new(
                            StepKind::Update,
                            format!("Update: {}→{} via {} = {:.2}", nodes[i], nodes[j], nodes[k], through),
                        )
                        .with_edge(nodes[i].as_str(), nodes[j].as_str())
                        .with_node(nodes[k].as_str())
                        .with_value(through),
                    );
                }
            }
        }
    }

    if (0..v).any(|i| dist[i][i] < 0.0) {
        result
            .trace
            .record(Step::new(StepKind::NegativeCycle, "NEGATIVE CYCLE!"));
        result.cycle = true;
    }

    result.dist_matrix = Some(dist);
    result.next_matrix = Some(next);
    result.matrix_nodes = Some(nodes);
    result
}

/// Row/column of a node id in the matrices of a Floyd-Warshall result
pub fn matrix_index(nodes: &[String], id: &str) -> Option<usize> {
    nodes.iter().position(|n| n == id)
}

/// Walk the `next` matrix from `from` to `to`.
///
/// Returns `None` when either id is unknown or no route exists. The
/// walk is bounded by `|V|` hops, so a matrix distorted by a negative
/// cycle cannot loop forever.
pub fn reconstruct_path(
    nodes: &[String],
    next: &[Vec<Option<String>>],
    from: &str,
    to: &str,
) -> Option<Vec<String>> {
    let mut i = matrix_index(nodes, from)?;
    let j = matrix_index(nodes, to)?;
    let mut path = vec![from.to_string()];

    while i != j {
        if path.len() > nodes.len() {
            return None;
        }
        let hop = next[i][j].clone()?;
        i = matrix_index(nodes, &hop)?;
        path.push(hop);
    }
    Some(path)
}
