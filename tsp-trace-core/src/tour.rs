//! Closed tours through every node of a [`DistanceMatrix`].

use thiserror::Error;

use crate::{DistanceMatrix, Edge};

/// Errors returned by [`Tour::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The tour does not visit exactly `expected` nodes.
    #[error("tour visits {found} nodes, expected {expected}")]
    WrongLength {
        /// Number of nodes in the instance.
        expected: usize,
        /// Number of entries in the tour.
        found: usize,
    },
    /// A node index is outside `0..len`.
    #[error("node {node} is out of range for {len} nodes")]
    NodeOutOfRange {
        /// Offending node.
        node: usize,
        /// Number of nodes in the instance.
        len: usize,
    },
    /// A node appears more than once.
    #[error("node {node} appears more than once")]
    DuplicateNode {
        /// Repeated node.
        node: usize,
    },
}

/// Ordered sequence of node indices, implicitly closed back to its first node.
///
/// # Examples
/// ```
/// use tsp_trace_core::{DistanceMatrix, Tour};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])?;
/// let tour = Tour::new(vec![0, 1, 2]);
/// tour.validate(matrix.len())?;
/// assert_eq!(tour.closed_cost(&matrix), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wrap a node sequence. Call [`Tour::validate`] to check it.
    pub const fn new(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }

    /// The empty tour reported for infeasible instances.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Visited nodes in order.
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the tour, returning the node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.0
    }

    /// Edges of the closed tour, including the return to the first node.
    ///
    /// A single-node tour yields the self-loop `0 -> 0`; an empty tour
    /// yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let closing = match (self.0.last(), self.0.first()) {
            (Some(&last), Some(&first)) => Some(Edge::new(last, first)),
            _ => None,
        };
        self.0
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .chain(closing)
    }

    /// Total length of the closed tour under `matrix`.
    pub fn closed_cost(&self, matrix: &DistanceMatrix) -> f64 {
        self.edges()
            .map(|edge| matrix.distance(edge.from, edge.to))
            .sum()
    }

    /// Check that the tour is a permutation of `0..len`.
    pub fn validate(&self, len: usize) -> Result<(), TourError> {
        if self.0.len() != len {
            return Err(TourError::WrongLength {
                expected: len,
                found: self.0.len(),
            });
        }
        let mut seen = vec![false; len];
        for &node in &self.0 {
            let slot = seen
                .get_mut(node)
                .ok_or(TourError::NodeOutOfRange { node, len })?;
            if *slot {
                return Err(TourError::DuplicateNode { node });
            }
            *slot = true;
        }
        Ok(())
    }
}

impl From<Vec<usize>> for Tour {
    fn from(nodes: Vec<usize>) -> Self {
        Self::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn edges_close_the_loop() {
        let tour = Tour::new(vec![2, 0, 1]);
        let edges: Vec<Edge> = tour.edges().collect();
        assert_eq!(
            edges,
            vec![Edge::new(2, 0), Edge::new(0, 1), Edge::new(1, 2)]
        );
    }

    #[rstest]
    fn single_node_tour_has_self_loop() {
        let tour = Tour::new(vec![0]);
        assert_eq!(tour.edges().collect::<Vec<_>>(), vec![Edge::new(0, 0)]);
    }

    #[rstest]
    fn empty_tour_has_no_edges() {
        assert_eq!(Tour::empty().edges().count(), 0);
    }

    #[rstest]
    #[case(vec![0, 1, 2], 3, Ok(()))]
    #[case(vec![0, 1], 3, Err(TourError::WrongLength { expected: 3, found: 2 }))]
    #[case(vec![0, 1, 3], 3, Err(TourError::NodeOutOfRange { node: 3, len: 3 }))]
    #[case(vec![0, 1, 1], 3, Err(TourError::DuplicateNode { node: 1 }))]
    fn validate_checks_permutation(
        #[case] nodes: Vec<usize>,
        #[case] len: usize,
        #[case] expected: Result<(), TourError>,
    ) {
        assert_eq!(Tour::new(nodes).validate(len), expected);
    }
}
