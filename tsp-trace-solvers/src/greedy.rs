//! Nearest-neighbour tour construction.
//!
//! Starts at node 0 and repeatedly moves to the closest unvisited node. Ties
//! go to the lowest index. Runs in `O(n^2)`.

use tsp_trace_core::{
    Algorithm, AlgorithmStep, DistanceMatrix, Edge, Solution, Solver, StepRecorder, Tour,
};

/// Nearest-neighbour heuristic solver.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tsp_trace_core::{DistanceMatrix, Solver};
/// use tsp_trace_solvers::GreedySolver;
///
/// # fn main() -> Result<(), tsp_trace_core::MatrixError> {
/// let matrix = DistanceMatrix::from_points(&[
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 1.0, y: 0.0 },
///     Coord { x: 1.0, y: 1.0 },
///     Coord { x: 0.0, y: 1.0 },
/// ])?;
/// let result = GreedySolver.solve(&matrix);
/// assert_eq!(result.path(), &[0, 1, 2, 3]);
/// assert_eq!(result.cost(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn run(&self, matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
        nearest_neighbour(matrix, recorder)
    }
}

/// Build a nearest-neighbour tour from node 0, recording each move.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "tour cost accumulates floating-point distances"
)]
pub fn nearest_neighbour(matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
    let len = matrix.len();
    let mut visited = vec![false; len];
    let mut path = Vec::with_capacity(len);
    let mut cost = 0.0;
    let mut current = 0;

    mark(&mut visited, current);
    path.push(current);
    recorder.record_with(&mut || {
        AlgorithmStep::new("Start at node 0", path.clone(), path.clone())
            .with_current_node(current)
            .with_cost(cost)
    });

    while path.len() < len {
        let candidates: Vec<usize> = matrix
            .nodes()
            .filter(|&node| !visited.get(node).copied().unwrap_or(true))
            .collect();
        recorder.record_with(&mut || {
            AlgorithmStep::new(
                format!(
                    "Exploring {} candidate edges from node {current}",
                    candidates.len()
                ),
                path.clone(),
                path.clone(),
            )
            .with_current_node(current)
            .with_cost(cost)
            .with_exploring_edges(
                candidates
                    .iter()
                    .map(|&node| Edge::new(current, node))
                    .collect(),
            )
        });

        let Some((next, distance)) = nearest(matrix, current, &candidates) else {
            break;
        };
        mark(&mut visited, next);
        path.push(next);
        cost += distance;
        recorder.record_with(&mut || {
            AlgorithmStep::new(format!("Visit node {next}"), path.clone(), path.clone())
                .with_current_node(next)
                .with_cost(cost)
                .with_highlight_edge(Edge::new(current, next))
                .with_additional_info(format!(
                    "edge {current} -> {next} adds {distance:.3}; running cost {cost:.3}"
                ))
        });
        current = next;
    }

    let closing = matrix.distance(current, 0);
    cost += closing;
    recorder.record_with(&mut || {
        let step = AlgorithmStep::new("Return to node 0", path.clone(), path.clone())
            .with_current_node(0)
            .with_cost(cost)
            .with_additional_info(format!(
                "closing edge {current} -> 0 adds {closing:.3}; total cost {cost:.3}"
            ));
        if current == 0 {
            step
        } else {
            step.with_highlight_edge(Edge::new(current, 0))
        }
    });

    Solution::new(Tour::new(path), cost)
}

/// Closest candidate to `from`; the first strictly smaller distance wins.
fn nearest(matrix: &DistanceMatrix, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
    candidates.iter().fold(None, |best, &node| {
        let distance = matrix.distance(from, node);
        match best {
            Some((_, best_distance)) if distance >= best_distance => best,
            _ => Some((node, distance)),
        }
    })
}

fn mark(visited: &mut [bool], node: usize) {
    if let Some(slot) = visited.get_mut(node) {
        *slot = true;
    }
}
