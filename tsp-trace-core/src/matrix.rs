//! Symmetric distance matrices over node indices `0..n`.
//!
//! [`DistanceMatrix`] is the single input shared by every solver. Validation
//! happens once at construction, so a matrix that exists is square, finite,
//! non-negative, symmetric and has a zero diagonal.

use std::ops::Range;

use geo::{Coord, Distance, Euclidean, Point};
use thiserror::Error;

/// Relative tolerance used when comparing `d(i, j)` with `d(j, i)`.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Errors returned when constructing a [`DistanceMatrix`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// No rows (or no points) were supplied.
    #[error("distance matrix must contain at least one node")]
    Empty,
    /// A row does not have one entry per node.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Offending row index.
        row: usize,
        /// Number of nodes in the matrix.
        expected: usize,
        /// Number of entries found in the row.
        found: usize,
    },
    /// An entry is NaN or infinite.
    #[error("distance at ({row}, {column}) is not finite")]
    NonFinite {
        /// Row index of the entry.
        row: usize,
        /// Column index of the entry.
        column: usize,
    },
    /// An entry is below zero.
    #[error("distance at ({row}, {column}) is negative")]
    Negative {
        /// Row index of the entry.
        row: usize,
        /// Column index of the entry.
        column: usize,
    },
    /// A node has a non-zero distance to itself.
    #[error("diagonal entry {index} must be zero")]
    NonZeroDiagonal {
        /// Node whose self-distance is non-zero.
        index: usize,
    },
    /// `d(row, column)` and `d(column, row)` disagree.
    #[error("distance ({row}, {column}) differs from ({column}, {row})")]
    Asymmetric {
        /// Row index of the entry.
        row: usize,
        /// Column index of the entry.
        column: usize,
    },
}

/// Square, symmetric matrix of non-negative distances.
///
/// Entries are stored row-major in a single allocation.
///
/// # Examples
/// ```
/// use tsp_trace_core::DistanceMatrix;
///
/// # fn main() -> Result<(), tsp_trace_core::MatrixError> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 3.0],
///     vec![2.0, 0.0, 4.0],
///     vec![3.0, 4.0, 0.0],
/// ])?;
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.distance(1, 2), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    len: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    /// Validate and construct a matrix from its rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let len = rows.len();
        if len == 0 {
            return Err(MatrixError::Empty);
        }
        let mut distances = Vec::with_capacity(len * len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != len {
                return Err(MatrixError::Ragged {
                    row,
                    expected: len,
                    found: values.len(),
                });
            }
            distances.extend(values);
        }
        Self::from_row_major(len, distances)
    }

    /// Build the Euclidean distance matrix for a set of planar points.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tsp_trace_core::DistanceMatrix;
    ///
    /// # fn main() -> Result<(), tsp_trace_core::MatrixError> {
    /// let matrix = DistanceMatrix::from_points(&[
    ///     Coord { x: 0.0, y: 0.0 },
    ///     Coord { x: 3.0, y: 4.0 },
    /// ])?;
    /// assert_eq!(matrix.distance(0, 1), 5.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_points(points: &[Coord<f64>]) -> Result<Self, MatrixError> {
        let len = points.len();
        if len == 0 {
            return Err(MatrixError::Empty);
        }
        let mut distances = vec![0.0; len * len];
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let d = Euclidean.distance(Point::from(*a), Point::from(*b));
                distances[i * len + j] = d;
                distances[j * len + i] = d;
            }
        }
        Self::from_row_major(len, distances)
    }

    fn from_row_major(len: usize, distances: Vec<f64>) -> Result<Self, MatrixError> {
        for (offset, &value) in distances.iter().enumerate() {
            let (row, column) = (offset / len, offset % len);
            if !value.is_finite() {
                return Err(MatrixError::NonFinite { row, column });
            }
            if value < 0.0 {
                return Err(MatrixError::Negative { row, column });
            }
            if row == column && value != 0.0 {
                return Err(MatrixError::NonZeroDiagonal { index: row });
            }
            if column > row {
                let mirrored = distances[column * len + row];
                let scale = value.abs().max(mirrored.abs()).max(1.0);
                if (value - mirrored).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(MatrixError::Asymmetric { row, column });
                }
            }
        }
        Ok(Self { len, distances })
    }

    /// Number of nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed matrix; present for API symmetry.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node indices `0..n`.
    pub const fn nodes(&self) -> Range<usize> {
        0..self.len
    }

    /// Distance between two nodes.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.len && to < self.len,
            "node index out of range: ({from}, {to}) for {} nodes",
            self.len
        );
        self.distances[from * self.len + to]
    }

    /// Distances from `node` to every node, or `None` when out of range.
    pub fn row(&self, node: usize) -> Option<&[f64]> {
        self.distances.chunks_exact(self.len).nth(node)
    }
}

/// Serialises as `{"distances": [[..], ..]}`, the row shape accepted by
/// instance files.
#[cfg(feature = "serde")]
impl serde::Serialize for DistanceMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(serde::Serialize)]
        struct Rows<'a> {
            distances: Vec<&'a [f64]>,
        }

        let distances = self.nodes().filter_map(|node| self.row(node)).collect();
        serde::Serialize::serialize(&Rows { distances }, serializer)
    }
}
