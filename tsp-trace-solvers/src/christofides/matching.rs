//! Greedy pairing of odd-degree vertices.

use tsp_trace_core::{DistanceMatrix, Edge};

/// Pair up `vertices` greedily.
///
/// Vertices are taken in the order given. Each one still unmatched is paired
/// with its nearest unmatched successor in that order, ties going to the
/// earlier vertex. The result is a perfect matching whenever `vertices` has
/// even length, but it is not guaranteed to have minimum weight. With an odd
/// count the last vertex is left out.
#[must_use]
pub fn greedy_matching(matrix: &DistanceMatrix, vertices: &[usize]) -> Vec<Edge> {
    let mut matched = vec![false; vertices.len()];
    let mut pairs = Vec::new();

    for (i, &from) in vertices.iter().enumerate() {
        if is_matched(&matched, i) {
            continue;
        }
        let mut best: Option<(usize, f64)> = None;
        for (j, &to) in vertices.iter().enumerate().skip(i + 1) {
            if is_matched(&matched, j) {
                continue;
            }
            let distance = matrix.distance(from, to);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((j, distance));
            }
        }
        let Some((j, _)) = best else {
            continue;
        };
        for slot in [i, j] {
            if let Some(flag) = matched.get_mut(slot) {
                *flag = true;
            }
        }
        if let Some(&to) = vertices.get(j) {
            pairs.push(Edge::new(from, to));
        }
    }
    pairs
}

fn is_matched(matched: &[bool], slot: usize) -> bool {
    matched.get(slot).copied().unwrap_or(true)
}
