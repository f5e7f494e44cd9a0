//! Multigraph assembly, Eulerian circuits and shortcutting.

use tsp_trace_core::Edge;

/// Undirected multigraph over `0..len` stored as adjacency lists.
///
/// Parallel edges appear once per copy in both endpoint lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multigraph {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<Edge>,
}

impl Multigraph {
    /// Overlay `edges` on `len` vertices. Edges touching a vertex outside
    /// `0..len` are dropped.
    #[must_use]
    pub fn from_edges(len: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut adjacency = vec![Vec::new(); len];
        let mut kept = Vec::new();
        for edge in edges {
            if edge.from >= len || edge.to >= len {
                log::debug!("dropping edge {} - {} outside {len} vertices", edge.from, edge.to);
                continue;
            }
            if let Some(list) = adjacency.get_mut(edge.from) {
                list.push(edge.to);
            }
            if let Some(list) = adjacency.get_mut(edge.to) {
                list.push(edge.from);
            }
            kept.push(edge);
        }
        Self {
            adjacency,
            edges: kept,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges, counting parallel copies.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Degree of `node`, or zero when it is out of range.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Whether every vertex has even degree.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.adjacency
            .iter()
            .all(|neighbours| neighbours.len().is_multiple_of(2))
    }
}

/// Walk every edge of `graph` once, starting and ending at `start`.
///
/// Uses an explicit stack over a private copy of the adjacency lists. The
/// top vertex follows its most recently listed unused edge, and the
/// matching reverse entry is removed from the neighbour's list. A vertex
/// with no unused edges is popped onto the circuit, which is reversed at
/// the end. Assumes `graph` is connected on its non-isolated vertices and
/// [`Multigraph::is_even`]; otherwise the result is not a circuit.
///
/// Returns an empty walk when `start` is out of range.
#[must_use]
pub fn eulerian_circuit(graph: &Multigraph, start: usize) -> Vec<usize> {
    if start >= graph.len() {
        return Vec::new();
    }
    let mut remaining = graph.adjacency.clone();
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&top) = stack.last() {
        match remaining.get_mut(top).and_then(Vec::pop) {
            Some(next) => {
                if let Some(back) = remaining.get_mut(next) {
                    if let Some(position) = back.iter().position(|&node| node == top) {
                        back.swap_remove(position);
                    }
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                circuit.push(top);
            }
        }
    }
    circuit.reverse();
    circuit
}

/// Keep the first visit of each vertex in `circuit`.
///
/// Vertices outside `0..len` are skipped. When the circuit covers every
/// vertex the result is a permutation of `0..len`.
#[must_use]
pub fn shortcut(circuit: &[usize], len: usize) -> Vec<usize> {
    let mut seen = vec![false; len];
    circuit
        .iter()
        .copied()
        .filter(|&node| match seen.get_mut(node) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
        .collect()
}
