use crate::graph::edge_key;
use crate::trace::{StepKind, Trace};
use serde::Serialize;
use std::collections::BTreeSet;

/// Renderer-facing state reconstructed from a trace prefix.
///
/// `visited` and `highlighted_edges` drive node/edge coloring;
/// `committed_edges`/`committed_nodes` are the partial spanning tree
/// for MST runs, with `mst_cost` its running total. `current` is the
/// node of the latest step, `action` its description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayState {
    pub visited: BTreeSet<String>,
    pub highlighted_edges: BTreeSet<String>,
    pub committed_edges: BTreeSet<String>,
    pub committed_nodes: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Fold steps `0..upto` into the state as of step `upto`.
///
/// Pure and idempotent: the caller may replay any prefix in any order
/// (pause, resume, fast-forward) and always gets the same state.
/// `directed` must match the graph the trace was recorded against so
/// edge keys canonicalize the same way.
pub fn replay(trace: &Trace, directed: bool, upto: usize) -> ReplayState {
    let mut state = ReplayState::default();
    let upto = upto.min(trace.len());
    let mut mst_total = 0.0;
    let mut has_mst = false;

    for step in &trace.steps()[..upto] {
        if let Some(node) = &step.node {
            state.visited.insert(node.clone());
        }

        if step.kind == StepKind::AddMst {
            if let Some(key) = &step.edge_key {
                state.committed_edges.insert(key.clone());
                for endpoint in key.split('-') {
                    state.committed_nodes.insert(endpoint.to_string());
                }
            }
            if let Some(weight) = step.value {
                mst_total += weight;
                has_mst = true;
            }
        } else if let (Some(from), Some(to)) = (&step.from, &step.to) {
            state.highlighted_edges.insert(edge_key(from, to, directed));
        }
    }

    if has_mst {
        state.mst_cost = Some(mst_total);
    }
    if upto > 0 {
        let last = &trace.steps()[upto - 1];
        state.current = last.node.clone();
        state.action = Some(last.action.clone());
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Step;

    fn sample_trace() -> Trace {
        let mut trace = Trace::new();
        trace.record(Step::new(StepKind::Init, "init"));
        trace.record(Step::new(StepKind::Visit, "visit A").with_node("A"));
        trace.record(Step::new(StepKind::Explore, "explore A->B").with_edge("A", "B"));
        trace.record(
            Step::new(StepKind::AddMst, "add A-B")
                .with_edge("A", "B")
                .with_edge_key("A-B")
                .with_value(2.0),
        );
        trace
    }

    #[test]
    fn test_replay_empty_prefix() {
        let state = replay(&sample_trace(), false, 0);
        assert!(state.visited.is_empty());
        assert!(state.current.is_none());
        assert!(state.mst_cost.is_none());
    }

    #[test]
    fn test_replay_partial_prefix() {
        let state = replay(&sample_trace(), false, 3);
        assert!(state.visited.contains("A"));
        assert!(state.highlighted_edges.contains("A-B"));
        assert!(state.committed_edges.is_empty());
        assert_eq!(state.action.as_deref(), Some("explore A->B"));
    }

    #[test]
    fn test_replay_full_accumulates_mst() {
        let state = replay(&sample_trace(), false, 4);
        assert!(state.committed_edges.contains("A-B"));
        assert!(state.committed_nodes.contains("A"));
        assert!(state.committed_nodes.contains("B"));
        assert_eq!(state.mst_cost, Some(2.0));
    }

    #[test]
    fn test_replay_clamps_out_of_range() {
        let trace = sample_trace();
        assert_eq!(replay(&trace, false, 99), replay(&trace, false, trace.len()));
    }

    #[test]
    fn test_replay_directed_edge_orientation() {
        let mut trace = Trace::new();
        trace.record(Step::new(StepKind::Explore, "explore B->A").with_edge("B", "A"));
        let state = replay(&trace, true, 1);
        assert!(state.highlighted_edges.contains("B-A"));
        let undirected = replay(&trace, false, 1);
        assert!(undirected.highlighted_edges.contains("A-B"));
    }
}
