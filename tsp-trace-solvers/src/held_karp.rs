//! Exact tours by bitmask dynamic programming.
//!
//! `dp[mask][last]` holds the cheapest walk that starts at node 0, visits
//! exactly the nodes in `mask` and ends at `last`. The table costs
//! `O(n * 2^n)` memory and `O(n^2 * 2^n)` time, so instances above
//! [`MAX_NODES`] are refused with an infeasible result instead.

use tsp_trace_core::{
    Algorithm, AlgorithmStep, DistanceMatrix, INFEASIBLE_COST, Solution, Solver, StepRecorder,
    Tour,
};

/// Largest instance the exact solver accepts.
pub const MAX_NODES: usize = 15;

/// Parent marker for states with no predecessor.
const NO_PARENT: u8 = u8::MAX;

/// Exact Held-Karp solver.
///
/// # Examples
/// ```
/// use tsp_trace_core::{DistanceMatrix, Solver};
/// use tsp_trace_solvers::HeldKarpSolver;
///
/// # fn main() -> Result<(), tsp_trace_core::MatrixError> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 9.0, 1.0],
///     vec![1.0, 0.0, 1.0, 9.0],
///     vec![9.0, 1.0, 0.0, 1.0],
///     vec![1.0, 9.0, 1.0, 0.0],
/// ])?;
/// let result = HeldKarpSolver.solve(&matrix);
/// assert_eq!(result.cost(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HeldKarpSolver;

impl Solver for HeldKarpSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HeldKarp
    }

    fn run(&self, matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
        held_karp(matrix, recorder)
    }
}

/// Solve `matrix` exactly, or refuse when it has more than [`MAX_NODES`] nodes.
#[must_use]
pub fn held_karp(matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
    let len = matrix.len();
    if len > MAX_NODES {
        log::warn!("Held-Karp refused {len} nodes; the exact solver accepts at most {MAX_NODES}");
        recorder.record_with(&mut || {
            AlgorithmStep::new(
                format!("Held-Karp is limited to {MAX_NODES} nodes; refusing {len}"),
                Vec::new(),
                Vec::new(),
            )
            .with_cost(INFEASIBLE_COST)
            .with_additional_info(format!(
                "O(n^2 * 2^n) time and O(n * 2^n) memory make n = {len} impractical"
            ))
        });
        return Solution::infeasible();
    }

    let subsets = 1_usize << len;
    recorder.record_with(&mut || {
        AlgorithmStep::new("Initialise DP table", vec![0], vec![0])
            .with_current_node(0)
            .with_cost(0.0)
            .with_additional_info(format!(
                "{subsets} subsets x {len} end nodes; dp[{{0}}][0] = 0"
            ))
    });

    recorder.record_with(&mut || {
        AlgorithmStep::new("Sweep subsets in increasing mask order", vec![0], vec![0])
            .with_current_node(0)
            .with_additional_info(format!(
                "relaxing up to {} transitions",
                subsets.saturating_mul(len).saturating_mul(len)
            ))
    });
    log::debug!("Held-Karp sweeping {subsets} subsets over {len} nodes");
    let table = DpTable::fill(matrix);

    let Some(solution) = table.reconstruct(matrix) else {
        log::warn!("Held-Karp found no closed tour over {len} nodes");
        recorder.record_with(&mut || {
            AlgorithmStep::new("No closed tour found", Vec::new(), Vec::new())
                .with_cost(INFEASIBLE_COST)
        });
        return Solution::infeasible();
    };

    recorder.record_with(&mut || {
        let nodes = solution.tour.nodes().to_vec();
        AlgorithmStep::new("Reconstruct optimal tour", nodes.clone(), nodes)
            .with_current_node(0)
            .with_cost(solution.cost)
            .with_additional_info(format!(
                "followed parent pointers from the full mask; optimal cost {:.3}",
                solution.cost
            ))
    });
    solution
}

/// Dense `(mask, last)` tables owned by one solve.
struct DpTable {
    len: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl DpTable {
    const fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.len + last
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::indexing_slicing,
        clippy::cast_possible_truncation,
        reason = "indices are bounded by 2^n x n with n <= MAX_NODES, so parents fit in u8"
    )]
    fn fill(matrix: &DistanceMatrix) -> Self {
        let len = matrix.len();
        let subsets = 1_usize << len;
        let mut table = Self {
            len,
            cost: vec![f64::INFINITY; subsets * len],
            parent: vec![NO_PARENT; subsets * len],
        };
        let start = table.index(1, 0);
        table.cost[start] = 0.0;

        for mask in (1..subsets).step_by(2) {
            for last in 0..len {
                if mask & (1 << last) == 0 {
                    continue;
                }
                let base = table.cost[table.index(mask, last)];
                if !base.is_finite() {
                    continue;
                }
                for next in 0..len {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    let target = table.index(mask | (1 << next), next);
                    let candidate = base + matrix.distance(last, next);
                    if candidate < table.cost[target] {
                        table.cost[target] = candidate;
                        table.parent[target] = last as u8;
                    }
                }
            }
        }
        table
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::indexing_slicing,
        reason = "indices are bounded by the table dimensions"
    )]
    fn reconstruct(&self, matrix: &DistanceMatrix) -> Option<Solution> {
        if self.len == 1 {
            return Some(Solution::new(Tour::new(vec![0]), 0.0));
        }
        let full = (1_usize << self.len) - 1;
        let mut best: Option<(usize, f64)> = None;
        for last in 1..self.len {
            let total = self.cost[self.index(full, last)] + matrix.distance(last, 0);
            if total.is_finite() && best.is_none_or(|(_, best_cost)| total < best_cost) {
                best = Some((last, total));
            }
        }
        let (mut node, cost) = best?;

        let mut mask = full;
        let mut path = Vec::with_capacity(self.len);
        for _ in 0..self.len {
            path.push(node);
            if node == 0 {
                break;
            }
            let parent = self.parent[self.index(mask, node)];
            if parent == NO_PARENT {
                return None;
            }
            mask &= !(1 << node);
            node = usize::from(parent);
        }
        path.reverse();
        (path.first() == Some(&0) && path.len() == self.len)
            .then(|| Solution::new(Tour::new(path), cost))
    }
}
