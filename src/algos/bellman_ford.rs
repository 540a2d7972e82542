use crate::algos::shared::{init_distance_maps, rebuild_path};
use crate::algos::{Algorithm, RunResult};
use crate::graph::Graph;
use crate::trace::{Step, StepKind};

struct FlatEdge {
    u: String,
    v: String,
    weight: f64,
}

/// Bellman-Ford shortest path from `start` to `target`, with negative
/// cycle detection.
///
/// Relaxes a flat edge list `|V|` times. The final pass is the cycle
/// check folded into the loop: any edge that still relaxes there
/// proves a reachable negative cycle and the run returns immediately
/// with `cycle = true` and no path or cost. Earlier passes break out
/// the first time a whole pass performs no relaxation. `operations`
/// counts edge examinations.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn run_bellman_ford(graph: &Graph, start: &str, target: &str) -> RunResult {
    let mut result = RunResult::new(Algorithm::BellmanFord);
    for id in [start, target] {
        if !graph.contains_node(id) {
            return RunResult::failure(Algorithm::BellmanFord, format!("node not found: {}", id));
        }
    }

    let (mut distances, mut previous) = init_distance_maps(graph);
    let node_count = graph.node_count();

    // Undirected graphs contribute both directions, which is what
    // relaxation needs
    let mut edges = Vec::new();
    for u in graph.node_ids() {
        for edge in graph.neighbors(&u) {
            edges.push(FlatEdge {
                u: u.clone(),
                v: edge.target.clone(),
                weight: edge.weight,
            });
        }
    }

    distances.insert(start.to_string(), 0.0);
    result.trace.record(Step::new(
        StepKind::Init,
        format!("Bellman-Ford: {} passes", node_count.saturating_sub(1)),
    ));

    for pass in 0..node_count {
        let cycle_check = pass == node_count - 1;
        if cycle_check {
            result.trace.record(Step::new(
                StepKind::CycleCheckStart,
                "Cycle detection pass".to_string(),
            ));
        } else {
            result.trace.record(Step::new(
                StepKind::Pass,
                format!("Pass {}/{}", pass + 1, node_count - 1),
            ));
        }

        let mut did_relax = false;
        for edge in &edges {
            result.operations += 1;

            let from_dist = distances.get(&edge.u).copied().unwrap_or(f64::INFINITY);
            let to_dist = distances.get(&edge.v).copied().unwrap_or(f64::INFINITY);
            if from_dist.is_finite() && from_dist + edge.weight < to_dist {
                if cycle_check {
                    result.trace.record(
                        Step::new(
                            StepKind::NegativeCycle,
                            format!("NEGATIVE CYCLE at {}→{}!", edge.u, edge.v),
                        )
                        .with_edge(edge.u.as_str(), edge.v.as_str()),
                    );
                    result.cycle = true;
                    return result;
                }

                let new_dist = from_dist + edge.weight;
                distances.insert(edge.v.clone(), new_dist);
                previous.insert(edge.v.clone(), Some(edge.u.clone()));
                did_relax = true;
                result.trace.record(
                    Step::new(
                        StepKind::Relax,
                        format!("RELAX: {} dist={:.2}", edge.v, new_dist),
                    )
                    .with_edge(edge.u.as_str(), edge.v.as_str())
                    .with_value(new_dist),
                );
            }
        }

        if !cycle_check && !did_relax {
            result.trace.record(Step::new(
                StepKind::FinishEarly,
                format!("Early termination at pass {}", pass + 1),
            ));
            break;
        }
    }

    let final_dist = distances.get(target).copied().unwrap_or(f64::INFINITY);
    if final_dist.is_finite() {
        result.path = Some(rebuild_path(&previous, target));
        result.cost = Some(final_dist);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negative_cycle_square() -> Graph {
        // A→B(1)→C(-4)→D(1)→A(1): total -1 around the loop
        let mut g = Graph::new(true);
        for id in ["A", "B", "C", "D"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", -4.0).unwrap();
        g.add_edge("C", "D", 1.0).unwrap();
        g.add_edge("D", "A", 1.0).unwrap();
        g
    }

    #[test]
    fn test_negative_cycle_detected() {
        let result = run_bellman_ford(&negative_cycle_square(), "A", "C");
        assert!(result.cycle);
        assert!(result.path.is_none());
        assert!(result.cost.is_none());
        assert_eq!(
            result.trace.steps().last().map(|s| s.kind),
            Some(StepKind::NegativeCycle)
        );
    }

    #[test]
    fn test_zero_weight_loop_is_not_a_negative_cycle() {
        // 1 - 3 + 1 + 1 sums to zero: relaxation stabilizes and the
        // check pass stays quiet
        let mut g = Graph::new(true);
        for id in ["A", "B", "C", "D"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", -3.0).unwrap();
        g.add_edge("C", "D", 1.0).unwrap();
        g.add_edge("D", "A", 1.0).unwrap();

        let result = run_bellman_ford(&g, "A", "C");
        assert!(!result.cycle);
        assert_eq!(result.cost, Some(-2.0));
    }

    #[test]
    fn test_negative_edge_without_cycle_is_fine() {
        let mut g = Graph::new(true);
        for id in ["A", "B", "C"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 4.0).unwrap();
        g.add_edge("A", "C", 2.0).unwrap();
        g.add_edge("C", "B", -1.0).unwrap();

        let result = run_bellman_ford(&g, "A", "B");
        assert!(!result.cycle);
        assert_eq!(result.path.unwrap(), vec!["A", "C", "B"]);
        assert_eq!(result.cost, Some(1.0));
    }

    #[test]
    fn test_early_termination_on_stable_pass() {
        let mut g = Graph::new(false);
        for id in ["A", "B", "C", "D"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 1.0).unwrap();
        g.add_edge("C", "D", 1.0).unwrap();

        let result = run_bellman_ford(&g, "A", "D");
        assert!(result
            .trace
            .steps()
            .iter()
            .any(|s| s.kind == StepKind::FinishEarly));
        assert_eq!(result.cost, Some(3.0));
    }

    #[test]
    fn test_unreachable_target() {
        let mut g = Graph::new(true);
        for id in ["A", "B"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("B", "A", 1.0).unwrap();
        let result = run_bellman_ford(&g, "A", "B");
        assert!(result.path.is_none());
        assert!(!result.cycle);
    }

    #[test]
    fn test_operations_count_edge_examinations() {
        let mut g = Graph::new(true);
        for id in ["A", "B"] {
            g.add_node(id).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        let result = run_bellman_ford(&g, "A", "B");
        // Pass 1 relaxes A→B; pass 2 is the cycle check and examines
        // the single edge again. One edge, two passes.
        assert_eq!(result.operations, 2);
    }

    #[test]
    fn test_single_node_graph() {
        let mut g = Graph::new(false);
        g.add_node("A").unwrap();
        let result = run_bellman_ford(&g, "A", "A");
        assert_eq!(result.path.unwrap(), vec!["A"]);
        assert_eq!(result.cost, Some(0.0));
        assert!(!result.cycle);
    }
}
