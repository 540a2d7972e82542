//! Execution traces
//!
//! Every algorithm run appends immutable [`Step`]s to a [`Trace`].
//! The trace is the replay artifact: a UI steps through a prefix of
//! it to animate the run, and [`replay`] folds a prefix back into the
//! highlight sets the renderer needs.

pub mod replay;

pub use replay::{replay, ReplayState};

use serde::Serialize;

/// What a recorded step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Algorithm set up its working state
    Init,
    /// Traversal visited a node
    Visit,
    /// Traversal examined an edge to an unvisited neighbor
    Explore,
    /// A node was extracted for processing
    Current,
    /// A tentative distance or connecting weight improved
    Update,
    /// An edge relaxation succeeded (Bellman-Ford)
    Relax,
    /// A relaxation pass (or intermediate-node round) began
    Pass,
    /// An edge was committed to the spanning tree
    AddMst,
    /// An edge was rejected because it would close a cycle
    Skip,
    /// The folded-in negative-cycle detection pass began
    CycleCheckStart,
    /// A reachable negative cycle was proven
    NegativeCycle,
    /// A pass-based algorithm stabilized before its last pass
    FinishEarly,
}

/// One recorded step of an algorithm run.
///
/// Only `kind` and `action` are always present; the node/edge fields
/// carry whatever the step kind involves, and `frontier` snapshots
/// the auxiliary structure (queue, stack, heap size, MST size) when
/// the original visualization displayed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Canonical key of a committed MST edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_key: Option<String>,
    /// New distance or weight, for kinds that change one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Human-readable description for the action panel
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontier: Option<String>,
}

impl Step {
    /// Create a step with no node or edge attached
    pub fn new(kind: StepKind, action: impl Into<String>) -> Self {
        Step {
            kind,
            node: None,
            from: None,
            to: None,
            edge_key: None,
            value: None,
            action: action.into(),
            frontier: None,
        }
    }

    /// Attach the node this step concerns
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Attach the edge this step concerns
    pub fn with_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    /// Attach a committed MST edge key
    pub fn with_edge_key(mut self, key: impl Into<String>) -> Self {
        self.edge_key = Some(key.into());
        self
    }

    /// Attach the new distance/weight value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach an auxiliary data structure snapshot
    pub fn with_frontier(mut self, frontier: impl Into<String>) -> Self {
        self.frontier = Some(frontier.into());
        self
    }
}

/// Ordered, append-only step sequence for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
