//! Deterministic instances shared by unit tests, behaviour tests and
//! benchmarks.

use geo::Coord;

use crate::{DistanceMatrix, MatrixError};

/// Corners of the unit square, listed counter-clockwise from the origin.
pub fn unit_square_points() -> Vec<Coord<f64>> {
    vec![
        Coord { x: 0.0, y: 0.0 },
        Coord { x: 1.0, y: 0.0 },
        Coord { x: 1.0, y: 1.0 },
        Coord { x: 0.0, y: 1.0 },
    ]
}

/// Euclidean matrix over [`unit_square_points`]; the optimal tour costs `4.0`.
pub fn unit_square() -> DistanceMatrix {
    matrix_from_points(&unit_square_points())
}

/// The one-node instance.
pub fn single_node() -> DistanceMatrix {
    matrix_from_points(&[Coord { x: 0.0, y: 0.0 }])
}

/// `count` points evenly spaced along the x-axis at unit intervals.
pub fn line_points(count: usize) -> Vec<Coord<f64>> {
    (0..count)
        .map(|i| Coord {
            x: i as f64,
            y: 0.0,
        })
        .collect()
}

/// Points on a `columns`-wide grid with unit spacing, row by row.
pub fn grid_points(count: usize, columns: usize) -> Vec<Coord<f64>> {
    let columns = columns.max(1);
    (0..count)
        .map(|i| Coord {
            x: (i % columns) as f64,
            y: (i / columns) as f64,
        })
        .collect()
}

/// Euclidean matrix over `points`.
///
/// # Panics
///
/// Panics if the points do not form a valid matrix; fixtures are expected to
/// be well formed.
pub fn matrix_from_points(points: &[Coord<f64>]) -> DistanceMatrix {
    match DistanceMatrix::from_points(points) {
        Ok(matrix) => matrix,
        Err(err) => panic!("fixture points should form a valid matrix: {err}"),
    }
}

/// Matrix from explicit rows, surfacing validation errors.
pub fn matrix_from_rows(rows: &[&[f64]]) -> Result<DistanceMatrix, MatrixError> {
    DistanceMatrix::new(rows.iter().map(|row| row.to_vec()).collect())
}

/// Whether `path` visits each of `0..len` exactly once.
pub fn is_permutation(path: &[usize], len: usize) -> bool {
    if path.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    path.iter().all(|&node| match seen.get_mut(node) {
        Some(slot) if !*slot => {
            *slot = true;
            true
        }
        _ => false,
    })
}
