//! Step traces: immutable snapshots of a solver's progress.
//!
//! Solvers write [`AlgorithmStep`] values into a [`StepRecorder`] passed in
//! by the caller. A `Vec<AlgorithmStep>` is the usual recorder; [`Discard`]
//! drops everything so the algorithms can run without a log attached.

/// An undirected edge between two nodes, kept in the order it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Node the edge leaves.
    pub from: usize,
    /// Node the edge enters.
    pub to: usize,
}

impl Edge {
    /// Construct an edge.
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether `node` is one of the two endpoints.
    pub const fn touches(&self, node: usize) -> bool {
        self.from == node || self.to == node
    }
}

/// Snapshot of a solver at one point of its execution.
///
/// Only `description`, `visited` and `path` are always present; each solver
/// fills a different subset of the remaining fields.
///
/// # Examples
/// ```
/// use tsp_trace_core::{AlgorithmStep, Edge};
///
/// let step = AlgorithmStep::new("Move to node 2", vec![0, 2], vec![0, 2])
///     .with_current_node(2)
///     .with_cost(1.5)
///     .with_highlight_edge(Edge::new(0, 2));
/// assert_eq!(step.current_node, Some(2));
/// assert!(step.exploring_edges.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlgorithmStep {
    /// Human-readable summary of the event.
    pub description: String,
    /// Node being processed, if the step is about one.
    pub current_node: Option<usize>,
    /// Visited nodes in the order they were visited.
    pub visited: Vec<usize>,
    /// Partial (or final) path built so far.
    pub path: Vec<usize>,
    /// Cumulative cost at this point.
    pub cost: Option<f64>,
    /// Candidate edges under consideration, not yet committed.
    pub exploring_edges: Option<Vec<Edge>>,
    /// Edge committed by this step.
    pub highlight_edge: Option<Edge>,
    /// Free-text detail.
    pub additional_info: Option<String>,
}

impl AlgorithmStep {
    /// Start a step with the mandatory fields.
    pub fn new(description: impl Into<String>, visited: Vec<usize>, path: Vec<usize>) -> Self {
        Self {
            description: description.into(),
            current_node: None,
            visited,
            path,
            cost: None,
            exploring_edges: None,
            highlight_edge: None,
            additional_info: None,
        }
    }

    /// Set the node being processed.
    #[must_use]
    pub const fn with_current_node(mut self, node: usize) -> Self {
        self.current_node = Some(node);
        self
    }

    /// Set the cumulative cost.
    #[must_use]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the candidate edges.
    #[must_use]
    pub fn with_exploring_edges(mut self, edges: Vec<Edge>) -> Self {
        self.exploring_edges = Some(edges);
        self
    }

    /// Set the committed edge.
    #[must_use]
    pub const fn with_highlight_edge(mut self, edge: Edge) -> Self {
        self.highlight_edge = Some(edge);
        self
    }

    /// Attach free-text detail.
    #[must_use]
    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

/// Append-only sink for [`AlgorithmStep`] snapshots.
pub trait StepRecorder {
    /// Append a step.
    fn record(&mut self, step: AlgorithmStep);

    /// Whether recorded steps are kept.
    ///
    /// Solvers skip building snapshots when this returns `false`.
    fn is_recording(&self) -> bool {
        true
    }

    /// Build and append a step only when recording.
    fn record_with(&mut self, build: &mut dyn FnMut() -> AlgorithmStep) {
        if self.is_recording() {
            self.record(build());
        }
    }
}

impl StepRecorder for Vec<AlgorithmStep> {
    fn record(&mut self, step: AlgorithmStep) {
        self.push(step);
    }
}

/// Recorder that drops every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl StepRecorder for Discard {
    fn record(&mut self, _step: AlgorithmStep) {}

    fn is_recording(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_recorder_appends_in_order() {
        let mut steps: Vec<AlgorithmStep> = Vec::new();
        steps.record(AlgorithmStep::new("first", vec![0], vec![0]));
        steps.record_with(&mut || AlgorithmStep::new("second", vec![0, 1], vec![0, 1]));
        let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, ["first", "second"]);
    }

    #[rstest]
    fn discard_never_builds_steps() {
        let mut built = false;
        Discard.record_with(&mut || {
            built = true;
            AlgorithmStep::new("unused", Vec::new(), Vec::new())
        });
        assert!(!built);
    }

    #[rstest]
    fn builder_leaves_unset_fields_empty() {
        let step = AlgorithmStep::new("start", vec![0], vec![0]).with_cost(0.0);
        assert_eq!(step.cost, Some(0.0));
        assert!(step.current_node.is_none());
        assert!(step.highlight_edge.is_none());
        assert!(step.additional_info.is_none());
    }

    #[rstest]
    fn edge_touches_endpoints() {
        let edge = Edge::new(3, 5);
        assert!(edge.touches(3));
        assert!(edge.touches(5));
        assert!(!edge.touches(4));
    }
}
