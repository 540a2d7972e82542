use crate::algos::{
    run_bellman_ford, run_dijkstra, run_floyd_warshall, run_kruskal, run_prim, run_traversal,
    Algorithm, RunResult,
};
use crate::graph::{has_negative_weights, Graph};
use serde::Serialize;

/// One row of the side-by-side comparison table
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_edges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub cycle: bool,
    /// Why the algorithm was not run on this graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub operations: u64,
}

impl AlgorithmSummary {
    fn from_result(result: RunResult) -> Self {
        AlgorithmSummary {
            algorithm: result.algorithm,
            path: result.path,
            mst_edges: result.mst_edges,
            cost: result.cost,
            cycle: result.cycle,
            skipped: None,
            error: result.error,
            operations: result.operations,
        }
    }

    fn skipped(algorithm: Algorithm, reason: &str) -> Self {
        AlgorithmSummary {
            algorithm,
            path: None,
            mst_edges: None,
            cost: None,
            cycle: false,
            skipped: Some(reason.to_string()),
            error: None,
            operations: 0,
        }
    }
}

/// Run every algorithm on the same graph and parameters.
///
/// Dijkstra is skipped when the graph carries a negative weight and
/// both MST algorithms are skipped when it is directed, so the table
/// never shows an algorithm run outside its precondition. Traces are
/// dropped from the summaries; a caller that wants to replay a run
/// invokes that algorithm directly.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn run_all(graph: &Graph, start: &str, target: &str) -> Vec<AlgorithmSummary> {
    let negative = has_negative_weights(graph);
    let directed = graph.directed();

    let mut rows = Vec::new();
    rows.push(AlgorithmSummary::from_result(run_traversal(
        graph, start, true,
    )));
    rows.push(AlgorithmSummary::from_result(run_traversal(
        graph, start, false,
    )));
    rows.push(if negative {
        AlgorithmSummary::skipped(Algorithm::Dijkstra, "negative weights")
    } else {
        AlgorithmSummary::from_result(run_dijkstra(graph, start, target))
    });
    rows.push(AlgorithmSummary::from_result(run_bellman_ford(
        graph, start, target,
    )));
    for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
        rows.push(if directed {
            AlgorithmSummary::skipped(algorithm, "directed graph")
        } else if algorithm == Algorithm::Prim {
            AlgorithmSummary::from_result(run_prim(graph, Some(start)))
        } else {
            AlgorithmSummary::from_result(run_kruskal(graph))
        });
    }
    rows.push(AlgorithmSummary::from_result(run_floyd_warshall(graph)));
    rows
}
