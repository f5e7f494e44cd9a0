//! Lookup of solvers by [`Algorithm`].

use tsp_trace_core::{Algorithm, DistanceMatrix, Solver, TspResult};

use crate::{ChristofidesSolver, GreedySolver, HeldKarpSolver};

/// Boxed solver for `algorithm`.
///
/// # Examples
/// ```
/// use tsp_trace_core::Algorithm;
/// use tsp_trace_solvers::solver_for;
///
/// assert_eq!(solver_for(Algorithm::HeldKarp).algorithm(), Algorithm::HeldKarp);
/// ```
#[must_use]
pub fn solver_for(algorithm: Algorithm) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::Greedy => Box::new(GreedySolver),
        Algorithm::HeldKarp => Box::new(HeldKarpSolver),
        Algorithm::Christofides => Box::new(ChristofidesSolver),
    }
}

/// Run `algorithms` one after another over `matrix`.
#[must_use]
pub fn solve_each(
    matrix: &DistanceMatrix,
    algorithms: impl IntoIterator<Item = Algorithm>,
) -> Vec<(Algorithm, TspResult)> {
    algorithms
        .into_iter()
        .map(|algorithm| (algorithm, solver_for(algorithm).solve(matrix)))
        .collect()
}

/// Run every algorithm in [`Algorithm::ALL`] order for side-by-side comparison.
#[must_use]
pub fn solve_all(matrix: &DistanceMatrix) -> Vec<(Algorithm, TspResult)> {
    solve_each(matrix, Algorithm::ALL)
}
