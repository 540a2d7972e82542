use crate::algos::{Algorithm, RunResult};
use crate::graph::Graph;
use crate::trace::{Step, StepKind};
use std::collections::{HashSet, VecDeque};

/// Breadth- or depth-first traversal from a start node.
///
/// One driver serves both orders: BFS removes from the front of the
/// frontier, DFS from the back. A node is marked visited when it is
/// removed, not when it is inserted, and a node that resurfaces
/// already-visited is skipped. Neighbors expand in ascending lexical
/// order regardless of adjacency insertion order (reversed for DFS so
/// the lexically smallest branch is explored first), which keeps the
/// step sequence reproducible.
///
/// `operations` counts frontier removals. The result path is the
/// visitation order; traversals have no cost.
#[tracing::instrument(skip(graph), fields(start = %start, breadth_first = breadth_first))]
pub fn run_traversal(graph: &Graph, start: &str, breadth_first: bool) -> RunResult {
    let algorithm = if breadth_first {
        Algorithm::Bfs
    } else {
        Algorithm::Dfs
    };
    if !graph.contains_node(start) {
        return RunResult::failure(algorithm, format!("node not found: {}", start));
    }

    let label = if breadth_first { "BFS" } else { "DFS" };
    let frontier_label = if breadth_first { "Queue" } else { "Stack" };

    let mut result = RunResult::new(algorithm);
    let mut visited: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();
    let mut frontier: VecDeque<String> = VecDeque::from([start.to_string()]);

    while !frontier.is_empty() {
        let current = if breadth_first {
            frontier.pop_front()
        } else {
            frontier.pop_back()
        };
        let Some(current) = current else { break };
        result.operations += 1;

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        order.push(current.clone());

        let snapshot = frontier.iter().cloned().collect::<Vec<_>>().join(", ");
        result.trace.record(
            Step::new(StepKind::Visit, format!("{}: Visiting {}", label, current))
                .with_node(current.as_str())
                .with_frontier(format!("{}: [{}]", frontier_label, snapshot)),
        );

        let mut neighbors: Vec<String> = graph
            .neighbors(&current)
            .iter()
            .map(|e| e.target.clone())
            .collect();
        neighbors.sort();
        if !breadth_first {
            neighbors.reverse();
        }

        for neighbor in neighbors {
            if visited.contains(&neighbor) {
                continue;
            }
            result.trace.record(
                Step::new(
                    StepKind::Explore,
                    format!("Exploring edge {}→{}", current, neighbor),
                )
                .with_edge(current.as_str(), neighbor.as_str()),
            );
            if !frontier.contains(&neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    result.path = Some(order);
    result
}
