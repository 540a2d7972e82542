//! Graph algorithm implementations
//!
//! Contains the seven step-traced algorithm runners plus shared
//! result types:
//! - `traversal`: BFS/DFS shared driver
//! - `dijkstra`, `bellman_ford`: single-source shortest paths
//! - `prim`, `kruskal`: minimum spanning trees
//! - `floyd_warshall`: all-pairs shortest paths
//! - `compare`: side-by-side run of every algorithm
//!
//! Every runner is a pure function of `(graph, params)`: it borrows
//! the graph immutably, runs synchronously to completion, and retains
//! nothing afterwards. Runners never return `Err`: precondition
//! violations land in [`RunResult::error`] so callers render failure
//! state directly.

pub mod bellman_ford;
pub mod compare;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub(crate) mod shared;
pub mod traversal;

pub use bellman_ford::run_bellman_ford;
pub use compare::{run_all, AlgorithmSummary};
pub use dijkstra::run_dijkstra;
pub use floyd_warshall::{matrix_index, reconstruct_path, run_floyd_warshall};
pub use kruskal::run_kruskal;
pub use prim::run_prim;
pub use traversal::run_traversal;

use crate::graph::Graph;
use crate::trace::Trace;
use crate::trace_time;
use serde::Serialize;
use std::time::Instant;

/// Selectable algorithm, round-trippable with UI dropdown tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Prim,
    Kruskal,
    FloydWarshall,
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellmanford" | "bellman-ford" => Ok(Algorithm::BellmanFord),
            "prim" | "prims" => Ok(Algorithm::Prim),
            "kruskal" | "kruskals" => Ok(Algorithm::Kruskal),
            "floydwarshall" | "floyd-warshall" => Ok(Algorithm::FloydWarshall),
            other => Err(format!(
                "unknown algorithm '{}' (expected: bfs, dfs, dijkstra, bellman-ford, prims, kruskals, floyd-warshall)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::Prim => "Prim's",
            Algorithm::Kruskal => "Kruskal's",
            Algorithm::FloydWarshall => "Floyd-Warshall",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single algorithm run.
///
/// Always well-formed: precondition violations set `error`, structural
/// infeasibility (unreachable target, disconnected MST) leaves
/// `path`/`cost` empty, and a detected negative cycle sets `cycle`
/// while suppressing both. The `trace` replays the run step by step.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    /// Node sequence: visitation order for traversals, the
    /// reconstructed route for shortest-path runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Canonical edge keys committed by an MST run. Fewer than
    /// `|V| - 1` entries means the graph was disconnected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_edges: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// True only when a reachable negative cycle was proven
    pub cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Count of core removals/relaxations/comparisons, for the
    /// empirical complexity display
    pub operations: u64,
    pub trace: Trace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_matrix: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_matrix: Option<Vec<Vec<Option<String>>>>,
    /// Node order indexing both matrices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix_nodes: Option<Vec<String>>,
}

impl RunResult {
    /// Empty result shell for a run in progress
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        RunResult {
            algorithm,
            path: None,
            mst_edges: None,
            cost: None,
            cycle: false,
            error: None,
            operations: 0,
            trace: Trace::new(),
            dist_matrix: None,
            next_matrix: None,
            matrix_nodes: None,
        }
    }

    /// Result for a run refused before it started
    pub(crate) fn failure(algorithm: Algorithm, error: impl Into<String>) -> Self {
        let mut result = RunResult::new(algorithm);
        result.error = Some(error.into());
        result
    }
}

/// Run the selected algorithm, validating the parameters its family
/// needs. Start is required for traversals and shortest paths,
/// optional for Prim's, unused by Kruskal's and Floyd-Warshall;
/// target is required for shortest paths only.
#[tracing::instrument(skip(graph), fields(algorithm = %algorithm))]
pub fn run(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
) -> RunResult {
    let started = Instant::now();

    let result = match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => match start {
            Some(start) => run_traversal(graph, start, algorithm == Algorithm::Bfs),
            None => RunResult::failure(algorithm, "start node required"),
        },
        Algorithm::Dijkstra | Algorithm::BellmanFord => match (start, target) {
            (Some(start), Some(target)) if algorithm == Algorithm::Dijkstra => {
                run_dijkstra(graph, start, target)
            }
            (Some(start), Some(target)) => run_bellman_ford(graph, start, target),
            (None, _) => RunResult::failure(algorithm, "start node required"),
            (_, None) => RunResult::failure(algorithm, "target node required"),
        },
        Algorithm::Prim => run_prim(graph, start),
        Algorithm::Kruskal => run_kruskal(graph),
        Algorithm::FloydWarshall => run_floyd_warshall(graph),
    };

    trace_time!(
        started,
        "algorithm run complete",
        operations = result.operations,
        steps = result.trace.len() as u64
    );
    result
}
