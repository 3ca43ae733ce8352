//! Orientation-free edge and edge-set equality.

use std::collections::HashSet;

use crate::{Edge, EdgeKey};

/// Returns the sorted keys of `edges`, the canonical form of an undirected
/// edge set.
pub(crate) fn edge_set(edges: &[Edge]) -> Vec<EdgeKey> {
    let mut keys: Vec<EdgeKey> = edges.iter().map(Edge::key).collect();
    keys.sort_unstable();
    keys
}

/// Returns `true` when both slices hold the same undirected edges,
/// regardless of order or orientation.
///
/// # Examples
/// ```
/// use treeline_core::{Edge, same_edge_set};
///
/// let left = [Edge::weighted(0, 1, 2.0), Edge::weighted(1, 2, 3.0)];
/// let right = [Edge::weighted(2, 1, 3.0), Edge::weighted(1, 0, 2.0)];
/// assert!(same_edge_set(&left, &right));
/// ```
#[must_use]
pub fn same_edge_set(left: &[Edge], right: &[Edge]) -> bool {
    left.len() == right.len() && edge_set(left) == edge_set(right)
}

/// Keeps the first edge for every distinct [`EdgeKey`], preserving order.
pub(crate) fn dedup_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(edges.len());
    edges
        .into_iter()
        .filter(|edge| seen.insert(edge.key()))
        .collect()
}

/// Keeps the first item for every distinct edge set, preserving order.
///
/// Returns the survivors and the number of items dropped.
pub(crate) fn dedup_by_edge_set<T, F>(items: Vec<T>, edges_of: F) -> (Vec<T>, usize)
where
    F: Fn(&T) -> &[Edge],
{
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(edge_set(edges_of(item))))
        .collect();
    let pruned = before - kept.len();
    (kept, pruned)
}
