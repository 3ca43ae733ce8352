//! Shared helper functions for MST property-based tests.

use crate::Edge;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `edges` form a spanning tree of `node_count` nodes.
pub(super) fn is_spanning_tree(node_count: usize, edges: &[Edge]) -> bool {
    if edges.len() + 1 != node_count {
        return false;
    }
    let mut parent: Vec<usize> = (0..node_count).collect();
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return false;
        }
        parent[left] = right;
    }
    true
}
