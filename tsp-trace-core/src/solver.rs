//! The [`Solver`] trait and the [`Algorithm`] catalogue.

use std::time::Instant;

use thiserror::Error;

use crate::{AlgorithmStep, DistanceMatrix, Solution, StepRecorder, TspResult};

/// The tour construction algorithms offered by the engine.
///
/// # Examples
/// ```
/// use tsp_trace_core::Algorithm;
///
/// assert_eq!(Algorithm::HeldKarp.as_str(), "held-karp");
/// assert_eq!("christofides".parse::<Algorithm>(), Ok(Algorithm::Christofides));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Nearest-neighbour construction from node 0.
    Greedy,
    /// Exact bitmask dynamic programming.
    HeldKarp,
    /// MST, matching and Eulerian shortcutting.
    Christofides,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Self; 3] = [Self::Greedy, Self::HeldKarp, Self::Christofides];

    /// Return the algorithm as a kebab-case `&str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::HeldKarp => "held-karp",
            Self::Christofides => "christofides",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);

impl std::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "greedy" | "nearest-neighbor" | "nearest-neighbour" => Ok(Self::Greedy),
            "held-karp" | "heldkarp" => Ok(Self::HeldKarp),
            "christofides" => Ok(Self::Christofides),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Build a tour over a distance matrix, tracing each step.
///
/// Implementations are pure functions of the matrix: they keep no state
/// between calls and must be `Send + Sync` so independent instances can be
/// solved on different threads.
pub trait Solver: Send + Sync {
    /// Which algorithm this solver runs.
    fn algorithm(&self) -> Algorithm;

    /// Run the algorithm, writing snapshots into `recorder`.
    fn run(&self, matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution;

    /// Run the algorithm with a fresh step log and wall-clock timing.
    fn solve(&self, matrix: &DistanceMatrix) -> TspResult {
        let started_at = Instant::now();
        let mut steps: Vec<AlgorithmStep> = Vec::new();
        let solution = self.run(matrix, &mut steps);
        let elapsed = started_at.elapsed();
        log::info!(
            "{} solved {} nodes: cost {:.4} in {elapsed:?}",
            self.algorithm(),
            matrix.len(),
            solution.cost
        );
        TspResult::new(solution, elapsed, steps)
    }
}
