//! Brute-force MST oracle.
//!
//! Enumerates every `(n - 1)`-edge subset of a small graph, keeps the
//! spanning trees, and reports those of minimum total weight.

use crate::{Edge, EdgeKey};

use super::helpers::is_spanning_tree;

/// Every minimum spanning tree of a graph, as sorted edge keys.
#[derive(Clone, Debug)]
pub(super) struct OracleMsts {
    /// Minimum total weight, or `None` when no spanning tree exists.
    pub weight: Option<f64>,
    /// Sorted edge sets of every tree with that weight, themselves sorted.
    pub trees: Vec<Vec<EdgeKey>>,
}

/// Enumerates every MST of `edges` over `node_count` nodes.
///
/// Self-loops are ignored; duplicate keys are collapsed to one edge.
pub(super) fn brute_force_msts(node_count: usize, edges: &[Edge]) -> OracleMsts {
    let mut candidates: Vec<Edge> = edges.iter().copied().filter(|e| !e.is_self_loop()).collect();
    candidates.sort_by_key(Edge::key);
    candidates.dedup_by_key(|edge| edge.key());

    let size = node_count.saturating_sub(1);
    let mut best: Option<f64> = None;
    let mut trees: Vec<Vec<EdgeKey>> = Vec::new();

    for_each_subset(candidates.len(), size, &mut |indices: &[usize]| {
        let chosen: Vec<Edge> = indices.iter().map(|&i| candidates[i]).collect();
        if !is_spanning_tree(node_count, &chosen) {
            return;
        }
        let weight: f64 = chosen.iter().map(|e| f64::from(e.weight_or_unit())).sum();
        let mut keys: Vec<EdgeKey> = chosen.iter().map(Edge::key).collect();
        keys.sort_unstable();
        match best {
            Some(current) if weight > current => {}
            Some(current) if weight == current => trees.push(keys),
            _ => {
                best = Some(weight);
                trees = vec![keys];
            }
        }
    });

    trees.sort();
    OracleMsts {
        weight: best,
        trees,
    }
}

/// Calls `visit` with every `size`-combination of `0..len` in
/// lexicographic order.
fn for_each_subset(len: usize, size: usize, visit: &mut impl FnMut(&[usize])) {
    fn recurse(
        start: usize,
        len: usize,
        size: usize,
        chosen: &mut Vec<usize>,
        visit: &mut impl FnMut(&[usize]),
    ) {
        if chosen.len() == size {
            visit(chosen);
            return;
        }
        let remaining = size - chosen.len();
        for index in start..len {
            if len - index < remaining {
                break;
            }
            chosen.push(index);
            recurse(index + 1, len, size, chosen, visit);
            chosen.pop();
        }
    }

    if size > len {
        return;
    }
    recurse(0, len, size, &mut Vec::with_capacity(size), visit);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_subsets(len: usize, size: usize) -> usize {
        let mut count = 0;
        for_each_subset(len, size, &mut |_: &[usize]| count += 1);
        count
    }

    #[test]
    fn subset_counts_are_binomial() {
        assert_eq!(count_subsets(5, 2), 10);
        assert_eq!(count_subsets(6, 3), 20);
        assert_eq!(count_subsets(3, 0), 1);
        assert_eq!(count_subsets(2, 3), 0);
    }

    #[test]
    fn oracle_counts_triangle_of_ties() {
        let edges = [
            Edge::unweighted(0, 1),
            Edge::unweighted(1, 2),
            Edge::unweighted(0, 2),
        ];
        let result = brute_force_msts(3, &edges);
        assert_eq!(result.weight, Some(2.0));
        assert_eq!(result.trees.len(), 3);
    }

    #[test]
    fn oracle_prefers_lighter_trees() {
        let edges = [
            Edge::weighted(0, 1, 1.0),
            Edge::weighted(1, 2, 2.0),
            Edge::weighted(0, 2, 3.0),
        ];
        let result = brute_force_msts(3, &edges);
        assert_eq!(result.weight, Some(3.0));
        assert_eq!(result.trees.len(), 1);
    }

    #[test]
    fn oracle_collapses_symmetric_records_and_skips_loops() {
        let edges = [
            Edge::weighted(0, 1, 1.0),
            Edge::weighted(1, 0, 1.0),
            Edge::weighted(1, 1, 0.5),
        ];
        let result = brute_force_msts(2, &edges);
        assert_eq!(result.weight, Some(1.0));
        assert_eq!(result.trees.len(), 1);
    }

    #[test]
    fn oracle_reports_disconnected_graphs() {
        let edges = [Edge::unweighted(0, 1)];
        let result = brute_force_msts(3, &edges);
        assert_eq!(result.weight, None);
        assert!(result.trees.is_empty());
    }

    #[test]
    fn oracle_counts_square_cycle() {
        let edges = [
            Edge::unweighted(0, 1),
            Edge::unweighted(1, 2),
            Edge::unweighted(2, 3),
            Edge::unweighted(3, 0),
        ];
        assert_eq!(brute_force_msts(4, &edges).trees.len(), 4);
    }
}
