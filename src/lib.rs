//! Facade crate for the tsp-trace engine.
//!
//! This crate re-exports the core domain types together with the three
//! solvers so callers depend on a single package.
//!
//! # Examples
//! ```
//! use tsp_trace::{Algorithm, DistanceMatrix, solve_all};
//!
//! # fn main() -> Result<(), tsp_trace::MatrixError> {
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 3.0, 4.0],
//!     vec![3.0, 0.0, 5.0],
//!     vec![4.0, 5.0, 0.0],
//! ])?;
//! for (algorithm, result) in solve_all(&matrix) {
//!     assert_eq!(result.cost(), 12.0, "{algorithm}");
//!     assert!(!result.steps().is_empty());
//! }
//! assert_eq!(Algorithm::ALL.len(), 3);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use tsp_trace_core::{
    Algorithm, AlgorithmStep, Discard, DistanceMatrix, Edge, INFEASIBLE_COST, MatrixError,
    ParseAlgorithmError, Solution, Solver, StepRecorder, Tour, TourError, TspResult,
};

pub use tsp_trace_solvers::{
    ChristofidesSolver, GreedySolver, HeldKarpSolver, MAX_NODES, christofides, held_karp,
    nearest_neighbour, solve_all, solve_each, solver_for,
};

#[cfg(feature = "test-support")]
pub use tsp_trace_core::test_support;
