//! Tour construction algorithms for tsp-trace.
//!
//! Three implementations of the [`Solver`](tsp_trace_core::Solver) trait are
//! provided:
//!
//! - [`GreedySolver`]: nearest-neighbour construction in `O(n^2)`.
//! - [`HeldKarpSolver`]: exact bitmask dynamic programming, limited to
//!   [`MAX_NODES`] nodes.
//! - [`ChristofidesSolver`]: spanning tree, greedy matching and Eulerian
//!   shortcutting in `O(n^3)`.
//!
//! Each solver records an [`AlgorithmStep`](tsp_trace_core::AlgorithmStep)
//! after every meaningful event. The free functions underneath the solvers
//! take a [`StepRecorder`](tsp_trace_core::StepRecorder) so they can run
//! with no trace at all.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod christofides;
mod greedy;
mod held_karp;
mod registry;

pub use christofides::{ChristofidesSolver, christofides};
pub use greedy::{GreedySolver, nearest_neighbour};
pub use held_karp::{HeldKarpSolver, MAX_NODES, held_karp};
pub use registry::{solve_all, solve_each, solver_for};
