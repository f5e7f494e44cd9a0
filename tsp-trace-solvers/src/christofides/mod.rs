//! Christofides-style approximation.
//!
//! The pipeline runs six stages in order:
//!
//! 1. Prim's minimum spanning tree from node 0 ([`minimum_spanning_tree`]).
//! 2. Vertices with odd tree degree ([`odd_degree_vertices`]).
//! 3. Greedy pairing of those vertices ([`greedy_matching`]).
//! 4. Tree and matching overlaid into a [`Multigraph`] of even degree.
//! 5. An Eulerian circuit of the multigraph ([`eulerian_circuit`]).
//! 6. Repeated vertices skipped to give a Hamiltonian tour ([`shortcut`]).
//!
//! The matching is greedy rather than minimum weight, so the classical 1.5
//! approximation bound does not hold. Tours are still valid permutations.

mod euler;
mod matching;
mod mst;

pub use euler::{Multigraph, eulerian_circuit, shortcut};
pub use matching::greedy_matching;
pub use mst::{MstEdge, minimum_spanning_tree, odd_degree_vertices, total_weight};

use tsp_trace_core::{
    Algorithm, AlgorithmStep, DistanceMatrix, Edge, INFEASIBLE_COST, Solution, Solver,
    StepRecorder, Tour,
};

/// Christofides-style solver with greedy matching.
///
/// # Examples
/// ```
/// use tsp_trace_core::{DistanceMatrix, Solver};
/// use tsp_trace_solvers::ChristofidesSolver;
///
/// # fn main() -> Result<(), tsp_trace_core::MatrixError> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])?;
/// let result = ChristofidesSolver.solve(&matrix);
/// assert_eq!(result.path().len(), 3);
/// assert_eq!(result.cost(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ChristofidesSolver;

impl Solver for ChristofidesSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Christofides
    }

    fn run(&self, matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
        christofides(matrix, recorder)
    }
}

/// Run the six Christofides stages over `matrix`, recording each one.
#[must_use]
pub fn christofides(matrix: &DistanceMatrix, recorder: &mut dyn StepRecorder) -> Solution {
    let len = matrix.len();

    let tree = minimum_spanning_tree(matrix);
    record_tree(&tree, recorder);
    log::debug!(
        "MST over {len} nodes has {} edges, weight {:.4}",
        tree.len(),
        total_weight(&tree)
    );

    let odd = odd_degree_vertices(len, &tree);
    recorder.record_with(&mut || {
        AlgorithmStep::new(
            format!("Found {} odd-degree vertices", odd.len()),
            odd.clone(),
            Vec::new(),
        )
        .with_exploring_edges(tree.iter().map(MstEdge::edge).collect())
        .with_additional_info(format!("odd vertices: {odd:?}"))
    });

    let pairs = greedy_matching(matrix, &odd);
    record_matching(&odd, &pairs, recorder);
    log::debug!("matched {} odd vertices into {} pairs", odd.len(), pairs.len());

    let graph = Multigraph::from_edges(
        len,
        tree.iter().map(MstEdge::edge).chain(pairs.iter().copied()),
    );
    let even = graph.is_even();
    recorder.record_with(&mut || {
        AlgorithmStep::new(
            "Combine MST and matching into a multigraph",
            matrix.nodes().collect(),
            Vec::new(),
        )
        .with_exploring_edges(graph.edges().to_vec())
        .with_additional_info(format!(
            "{} edges; every vertex has even degree: {even}",
            graph.edge_count()
        ))
    });
    if !even {
        log::warn!("multigraph over {len} nodes has odd-degree vertices");
    }

    let circuit = eulerian_circuit(&graph, 0);
    recorder.record_with(&mut || {
        AlgorithmStep::new(
            format!("Extract Eulerian circuit of {} vertices", circuit.len()),
            matrix.nodes().collect(),
            circuit.clone(),
        )
        .with_current_node(0)
        .with_additional_info(format!("circuit: {circuit:?}"))
    });

    let tour = Tour::new(shortcut(&circuit, len));
    if let Err(err) = tour.validate(len) {
        log::warn!("Christofides shortcut did not yield a tour: {err}");
        recorder.record_with(&mut || {
            AlgorithmStep::new("Shortcut did not cover every node", Vec::new(), Vec::new())
                .with_cost(INFEASIBLE_COST)
                .with_additional_info(err.to_string())
        });
        return Solution::infeasible();
    }
    let cost = tour.closed_cost(matrix);
    recorder.record_with(&mut || {
        let nodes = tour.nodes().to_vec();
        AlgorithmStep::new("Shortcut to Hamiltonian tour", nodes.clone(), nodes)
            .with_current_node(0)
            .with_cost(cost)
            .with_exploring_edges(tour.edges().collect())
            .with_additional_info(format!(
                "skipped {} repeated visits; total cost {cost:.3}",
                circuit.len().saturating_sub(tour.len())
            ))
    });

    Solution::new(tour, cost)
}

/// Replay Prim's growth one edge at a time.
fn record_tree(tree: &[MstEdge], recorder: &mut dyn StepRecorder) {
    if !recorder.is_recording() {
        return;
    }
    let mut visited = vec![0];
    let mut edges: Vec<Edge> = Vec::with_capacity(tree.len());
    recorder.record(
        AlgorithmStep::new("Start Prim's algorithm at node 0", visited.clone(), Vec::new())
            .with_current_node(0),
    );
    for mst_edge in tree {
        visited.push(mst_edge.to);
        edges.push(mst_edge.edge());
        recorder.record(
            AlgorithmStep::new(
                format!("Add MST edge {} - {}", mst_edge.from, mst_edge.to),
                visited.clone(),
                Vec::new(),
            )
            .with_current_node(mst_edge.to)
            .with_exploring_edges(edges.clone())
            .with_highlight_edge(mst_edge.edge())
            .with_additional_info(format!("weight {:.3}", mst_edge.weight)),
        );
    }
    recorder.record(
        AlgorithmStep::new("Minimum spanning tree complete", visited, Vec::new())
            .with_exploring_edges(edges)
            .with_additional_info(format!("total weight {:.3}", total_weight(tree))),
    );
}

fn record_matching(odd: &[usize], pairs: &[Edge], recorder: &mut dyn StepRecorder) {
    if !recorder.is_recording() {
        return;
    }
    let mut matched = Vec::with_capacity(odd.len());
    for (count, pair) in pairs.iter().enumerate() {
        matched.extend([pair.from, pair.to]);
        recorder.record(
            AlgorithmStep::new(
                format!("Match {} with {}", pair.from, pair.to),
                matched.clone(),
                Vec::new(),
            )
            .with_current_node(pair.from)
            .with_exploring_edges(pairs.iter().take(count + 1).copied().collect())
            .with_highlight_edge(*pair),
        );
    }
    recorder.record(
        AlgorithmStep::new("Greedy matching complete", matched, Vec::new())
            .with_exploring_edges(pairs.to_vec())
            .with_additional_info(format!("{} pairs", pairs.len())),
    );
}

#[cfg(test)]
mod tests;
