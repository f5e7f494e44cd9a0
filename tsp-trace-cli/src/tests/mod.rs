//! Shared test harness modules for the tsp-trace CLI.

use super::*;

mod helpers;
mod report;
mod solve_unit;
