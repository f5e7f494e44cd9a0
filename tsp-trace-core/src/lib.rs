//! Core domain types for the tsp-trace engine.
//!
//! A [`DistanceMatrix`] is validated once at construction; every
//! [`Solver`] then maps it to a [`TspResult`] holding the final [`Tour`],
//! its cost, the elapsed time and the ordered [`AlgorithmStep`] log that a
//! visualiser can replay.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod matrix;
pub mod result;
pub mod solver;
pub mod step;
pub mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use matrix::{DistanceMatrix, MatrixError};
pub use result::{INFEASIBLE_COST, Solution, TspResult};
pub use solver::{Algorithm, ParseAlgorithmError, Solver};
pub use step::{AlgorithmStep, Discard, Edge, StepRecorder};
pub use tour::{Tour, TourError};
