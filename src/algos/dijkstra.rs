use crate::algos::shared::{init_distance_maps, rebuild_path};
use crate::algos::{Algorithm, RunResult};
use crate::collections::MinQueue;
use crate::graph::Graph;
use crate::trace::{Step, StepKind};

/// Dijkstra's shortest path from `start` to `target`.
///
/// Precondition: no negative edge weight. The caller verifies this
/// (see [`crate::graph::has_negative_weights`]) before invoking; the
/// run loop does not re-validate, and violating the precondition
/// yields incorrect distances rather than a crash.
///
/// The heap holds stale duplicates by design: a dequeued entry whose
/// key exceeds the best-known distance is skipped (lazy deletion).
/// The loop exits the moment the target pops non-stale, which is
/// observable in the step and operation counts. `operations` counts
/// dequeues.
#[tracing::instrument(skip(graph), fields(start = %start, target = %target))]
pub fn run_dijkstra(graph: &Graph, start: &str, target: &str) -> RunResult {
    let mut result = RunResult::new(Algorithm::Dijkstra);
    for id in [start, target] {
        if !graph.contains_node(id) {
            return RunResult::failure(Algorithm::Dijkstra, format!("node not found: {}", id));
        }
    }

    let (mut distances, mut previous) = init_distance_maps(graph);
    let mut queue = MinQueue::new();

    distances.insert(start.to_string(), 0.0);
    queue.enqueue(0.0, start.to_string());
    result.trace.record(Step::new(
        StepKind::Init,
        format!("Initialize: {} dist=0", start),
    ));

    while let Some((key, current)) = queue.dequeue() {
        result.operations += 1;

        let best = distances.get(&current).copied().unwrap_or(f64::INFINITY);
        if key > best {
            continue; // stale entry, superseded since it was enqueued
        }
        if current == target {
            break; // early exit: target settled
        }

        result.trace.record(
            Step::new(
                StepKind::Current,
                format!("Extract min: {} (dist={:.2})", current, best),
            )
            .with_node(current.as_str())
            .with_frontier(format!("PQ size: {}", queue.len())),
        );

        for edge in graph.neighbors(&current) {
            let distance = best + edge.weight;
            let known = distances
                .get(&edge.target)
                .copied()
                .unwrap_or(f64::INFINITY);
            if distance < known {
                distances.insert(edge.target.clone(), distance);
                previous.insert(edge.target.clone(), Some(current.clone()));
                result.trace.record(
                    Step::new(
                        StepKind::Update,
                        format!("RELAX: {} dist={:.2}", edge.target, distance),
                    )
                    .with_edge(current.as_str(), edge.target.as_str())
                    .with_node(edge.target.as_str())
                    .with_value(distance),
                );
                queue.enqueue(distance, edge.target.clone());
            }
        }
    }

    let final_dist = distances.get(target).copied().unwrap_or(f64::INFINITY);
    if final_dist.is_finite() {
        result.path = Some(rebuild_path(&previous, target));
        result.cost = Some(final_dist);
    }
    result
}
