//! Prim's minimum spanning tree and MST degree parity.

use tsp_trace_core::{DistanceMatrix, Edge};

/// Weighted edge of a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEdge {
    /// Endpoint already in the tree when the edge was added.
    pub from: usize,
    /// Endpoint the edge brought into the tree.
    pub to: usize,
    /// Distance between the endpoints.
    pub weight: f64,
}

impl MstEdge {
    /// The unweighted edge.
    #[must_use]
    pub const fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}

/// Prim's algorithm from node 0 using a naive `O(n^3)` scan.
///
/// Each round picks the lightest edge from any tree vertex to any vertex
/// outside the tree, scanning both in ascending index order; the first
/// strictly lighter edge wins. Edges are returned in the order they were
/// added, so `edges[k].to` is the `k + 1`-th vertex to join the tree.
#[must_use]
pub fn minimum_spanning_tree(matrix: &DistanceMatrix) -> Vec<MstEdge> {
    let len = matrix.len();
    let mut in_tree = vec![false; len];
    if let Some(root) = in_tree.first_mut() {
        *root = true;
    }
    let mut edges = Vec::with_capacity(len.saturating_sub(1));

    for _ in 1..len {
        let mut best: Option<MstEdge> = None;
        for from in matrix.nodes().filter(|&node| is_set(&in_tree, node)) {
            for to in matrix.nodes().filter(|&node| !is_set(&in_tree, node)) {
                let weight = matrix.distance(from, to);
                if best.is_none_or(|edge| weight < edge.weight) {
                    best = Some(MstEdge { from, to, weight });
                }
            }
        }
        let Some(edge) = best else {
            break;
        };
        if let Some(slot) = in_tree.get_mut(edge.to) {
            *slot = true;
        }
        edges.push(edge);
    }
    edges
}

/// Vertices whose degree in `tree` is odd, in ascending order.
///
/// The result always has even length for a tree over `len` vertices.
#[must_use]
pub fn odd_degree_vertices(len: usize, tree: &[MstEdge]) -> Vec<usize> {
    let mut degree = vec![0_usize; len];
    for edge in tree {
        for node in [edge.from, edge.to] {
            if let Some(count) = degree.get_mut(node) {
                *count += 1;
            }
        }
    }
    degree
        .iter()
        .enumerate()
        .filter(|(_, count)| !count.is_multiple_of(2))
        .map(|(node, _)| node)
        .collect()
}

/// Sum of the tree's edge weights.
#[must_use]
pub fn total_weight(tree: &[MstEdge]) -> f64 {
    tree.iter().map(|edge| edge.weight).sum()
}

fn is_set(flags: &[bool], node: usize) -> bool {
    flags.get(node).copied().unwrap_or(false)
}
