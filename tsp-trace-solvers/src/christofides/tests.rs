//! Tests for the Christofides pipeline.

use rstest::rstest;
use tsp_trace_core::test_support::{
    grid_points, is_permutation, line_points, matrix_from_points, single_node, unit_square,
};
use tsp_trace_core::{AlgorithmStep, Discard};

use super::*;

#[rstest]
fn unit_square_yields_a_perimeter_tour() {
    let matrix = unit_square();
    let solution = christofides(&matrix, &mut Discard);
    assert!(is_permutation(solution.tour.nodes(), 4));
    assert_eq!(solution.tour.nodes(), &[0, 3, 2, 1]);
    assert!(solution.cost >= 4.0 - 1e-12);
    assert!((solution.cost - 4.0).abs() < 1e-12);
}

#[rstest]
fn single_node_degenerates_to_zero_cost() {
    let mut steps: Vec<AlgorithmStep> = Vec::new();
    let solution = christofides(&single_node(), &mut steps);
    assert_eq!(solution.tour.nodes(), &[0]);
    assert_eq!(solution.cost, 0.0);
    let last = steps.last().expect("final step");
    assert_eq!(last.path, vec![0]);
    assert_eq!(last.cost, Some(0.0));
}

#[rstest]
fn path_tree_needs_a_single_matching_pair() {
    let matrix = matrix_from_points(&line_points(5));
    let tree = minimum_spanning_tree(&matrix);
    let odd = odd_degree_vertices(matrix.len(), &tree);
    let pairs = greedy_matching(&matrix, &odd);
    assert_eq!(pairs, vec![Edge::new(0, 4)]);

    let solution = christofides(&matrix, &mut Discard);
    assert!(is_permutation(solution.tour.nodes(), 5));
    assert!((solution.cost - 8.0).abs() < 1e-9);
}

#[rstest]
#[case(2, 2)]
#[case(6, 3)]
#[case(9, 3)]
#[case(12, 4)]
fn grids_give_permutations(#[case] count: usize, #[case] columns: usize) {
    let matrix = matrix_from_points(&grid_points(count, columns));
    let solution = christofides(&matrix, &mut Discard);
    assert!(is_permutation(solution.tour.nodes(), count));
    assert_eq!(solution.tour.nodes().first(), Some(&0));
    assert!((solution.tour.closed_cost(&matrix) - solution.cost).abs() < 1e-9);
}

#[rstest]
fn multigraph_is_even_after_matching() {
    let matrix = matrix_from_points(&grid_points(10, 4));
    let tree = minimum_spanning_tree(&matrix);
    let odd = odd_degree_vertices(matrix.len(), &tree);
    assert!(odd.len().is_multiple_of(2));
    let pairs = greedy_matching(&matrix, &odd);
    let graph = Multigraph::from_edges(
        matrix.len(),
        tree.iter().map(MstEdge::edge).chain(pairs.iter().copied()),
    );
    assert!(graph.is_even());
    let circuit = eulerian_circuit(&graph, 0);
    assert_eq!(circuit.len(), graph.edge_count() + 1);
}

#[rstest]
fn records_every_stage() {
    let mut steps: Vec<AlgorithmStep> = Vec::new();
    let solution = christofides(&unit_square(), &mut steps);
    let descriptions: Vec<&str> = steps.iter().map(|step| step.description.as_str()).collect();
    assert_eq!(
        descriptions,
        [
            "Start Prim's algorithm at node 0",
            "Add MST edge 0 - 1",
            "Add MST edge 0 - 3",
            "Add MST edge 1 - 2",
            "Minimum spanning tree complete",
            "Found 2 odd-degree vertices",
            "Match 2 with 3",
            "Greedy matching complete",
            "Combine MST and matching into a multigraph",
            "Extract Eulerian circuit of 5 vertices",
            "Shortcut to Hamiltonian tour",
        ]
    );
    let last = steps.last().expect("final step");
    assert_eq!(last.path, solution.tour.nodes());
    assert_eq!(last.cost, Some(solution.cost));
}

#[rstest]
fn recorder_does_not_change_the_tour() {
    let matrix = matrix_from_points(&grid_points(8, 3));
    let traced = christofides(&matrix, &mut Vec::<AlgorithmStep>::new());
    let silent = christofides(&matrix, &mut Discard);
    assert_eq!(traced, silent);
}
