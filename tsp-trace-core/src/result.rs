//! Solver outputs: the bare [`Solution`] and the timed, traced [`TspResult`].

use std::time::Duration;

use crate::{AlgorithmStep, Tour};

/// Cost reported when an instance is refused as infeasible.
pub const INFEASIBLE_COST: f64 = f64::INFINITY;

/// Tour and cost produced by an algorithm, before timing is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final tour, empty when infeasible.
    pub tour: Tour,
    /// Closed-tour cost, or [`INFEASIBLE_COST`].
    pub cost: f64,
}

impl Solution {
    /// Construct a solution.
    pub const fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The empty, unbounded solution.
    pub const fn infeasible() -> Self {
        Self::new(Tour::empty(), INFEASIBLE_COST)
    }

    /// Whether the solution carries a usable tour.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Result of one solver invocation.
///
/// `steps` is a fixed, zero-indexed log: index `0` is the initial snapshot
/// and the last entry holds the final path and cost.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use tsp_trace_core::{AlgorithmStep, Solution, Tour, TspResult};
///
/// let steps = vec![AlgorithmStep::new("done", vec![0], vec![0]).with_cost(0.0)];
/// let result = TspResult::new(
///     Solution::new(Tour::new(vec![0]), 0.0),
///     Duration::from_secs(2),
///     steps,
/// );
/// assert!(result.is_feasible());
/// assert_eq!(result.execution_time_ms(), 2000.0);
/// assert_eq!(result.final_step().and_then(|s| s.cost), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TspResult {
    tour: Tour,
    cost: f64,
    execution_time: Duration,
    steps: Vec<AlgorithmStep>,
}

impl TspResult {
    /// Attach timing and the step log to a solution.
    pub fn new(solution: Solution, execution_time: Duration, steps: Vec<AlgorithmStep>) -> Self {
        Self {
            tour: solution.tour,
            cost: solution.cost,
            execution_time,
            steps,
        }
    }

    /// Final tour; empty when infeasible.
    pub const fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Final node sequence.
    pub fn path(&self) -> &[usize] {
        self.tour.nodes()
    }

    /// Final cost, or [`INFEASIBLE_COST`].
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Wall-clock time spent in the solver.
    pub const fn execution_time(&self) -> Duration {
        self.execution_time
    }

    /// Wall-clock time in fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// Every recorded step in order.
    pub fn steps(&self) -> &[AlgorithmStep] {
        &self.steps
    }

    /// Step at `index`, if any.
    pub fn step(&self, index: usize) -> Option<&AlgorithmStep> {
        self.steps.get(index)
    }

    /// Terminal snapshot.
    pub fn final_step(&self) -> Option<&AlgorithmStep> {
        self.steps.last()
    }

    /// Whether the solver produced a usable tour.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Split into the solution and its step log.
    pub fn into_parts(self) -> (Solution, Duration, Vec<AlgorithmStep>) {
        (
            Solution::new(self.tour, self.cost),
            self.execution_time,
            self.steps,
        )
    }
}

/// Serialises as `{ path, cost, executionTimeMs, steps }` with a `null`
/// cost for refused instances.
#[cfg(feature = "serde")]
impl serde::Serialize for TspResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Record<'a> {
            path: &'a [usize],
            cost: Option<f64>,
            execution_time_ms: f64,
            steps: &'a [AlgorithmStep],
        }

        let record = Record {
            path: self.path(),
            cost: self.is_feasible().then_some(self.cost),
            execution_time_ms: self.execution_time_ms(),
            steps: &self.steps,
        };
        serde::Serialize::serialize(&record, serializer)
    }
}
