//! Tie-branching Prim enumeration.
//!
//! A generation is a list of partial trees that all hold the same number of
//! edges. Each step extends every partial tree by each of its minimum-weight
//! frontier edges, then collapses partial trees with equal edge sets. Equal
//! edge sets imply equal visited sets, so collapsing never loses a reachable
//! final tree, and it keeps each generation bounded by the number of distinct
//! partial trees rather than by the number of tie interleavings.

use tracing::{debug, instrument, warn};

use crate::{Edge, Graph, error::MstError};

use super::{
    SpanningTree, check_start, edge_set::dedup_by_edge_set, record_duplicates_pruned,
    undirected_edges,
};

/// Enumerates every MST that Prim's algorithm can produce from `start` by
/// resolving weight ties differently.
///
/// Each result records its edges in selection order and its nodes in
/// discovery order. Results are distinct as unordered edge sets; when
/// several executions reach the same set, the one produced first is kept.
///
/// # Errors
/// Returns the shared precondition errors of [`crate::kruskal`],
/// [`MstError::UnknownStartNode`] when `start` is not a node of the graph,
/// and [`MstError::DisconnectedGraph`] when the frontier empties early.
///
/// # Examples
/// ```
/// use treeline_core::{AdjacencyGraph, compute_all_mst};
///
/// let graph = AdjacencyGraph::with_edges(
///     ["A", "B", "C"],
///     &[(0, 1, None), (1, 2, None), (0, 2, None)],
/// )?;
/// let trees = compute_all_mst(&graph, 0)?;
/// assert_eq!(trees.len(), 3);
/// assert!(trees.iter().all(|tree| tree.total_weight() == 2.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.compute_all",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), results = tracing::field::Empty),
)]
pub fn compute_all_mst<G: Graph + ?Sized>(
    graph: &G,
    start: usize,
) -> Result<Vec<SpanningTree>, MstError> {
    let edges = undirected_edges(graph)?;
    let node_count = graph.node_count();
    check_start(start, node_count)?;
    let trees = enumerate_from(&edges, node_count, start)?;
    tracing::Span::current().record("results", trees.len());
    Ok(trees)
}

/// Runs [`compute_all_mst`] from the node labelled `label`.
///
/// # Errors
/// Returns [`MstError::UnknownStartLabel`] when no node carries `label`, and
/// otherwise as for [`compute_all_mst`].
pub fn compute_all_mst_from_label<G: Graph + ?Sized>(
    graph: &G,
    label: &str,
) -> Result<Vec<SpanningTree>, MstError> {
    let start = graph
        .node_by_label(label)
        .ok_or_else(|| MstError::UnknownStartLabel {
            label: label.to_owned(),
        })?;
    compute_all_mst(graph, start)
}

/// Collects the Prim enumerations from every start vertex and deduplicates
/// them by edge set.
///
/// The result is treated as the set of all distinct MSTs of the graph.
///
/// # Errors
/// As for [`compute_all_mst`].
///
/// # Examples
/// ```
/// use treeline_core::{AdjacencyGraph, get_all_mst};
///
/// let graph = AdjacencyGraph::with_edges(
///     ["A", "B", "C", "D"],
///     &[(0, 1, None), (0, 2, None), (0, 3, None), (1, 2, None), (1, 3, None), (2, 3, None)],
/// )?;
/// assert_eq!(get_all_mst(&graph)?.len(), 16);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.get_all",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), results = tracing::field::Empty),
)]
pub fn get_all_mst<G: Graph + ?Sized>(graph: &G) -> Result<Vec<SpanningTree>, MstError> {
    let edges = undirected_edges(graph)?;
    let trees = enumerate_all_starts(&edges, graph.node_count())?;
    tracing::Span::current().record("results", trees.len());
    Ok(trees)
}

/// Returns the number of distinct MSTs found by [`get_all_mst`].
///
/// # Errors
/// As for [`get_all_mst`].
pub fn count_all_mst<G: Graph + ?Sized>(graph: &G) -> Result<usize, MstError> {
    get_all_mst(graph).map(|trees| trees.len())
}

pub(crate) fn enumerate_all_starts(
    edges: &[Edge],
    node_count: usize,
) -> Result<Vec<SpanningTree>, MstError> {
    let mut combined = Vec::new();
    for start in 0..node_count {
        combined.extend(enumerate_from(edges, node_count, start)?);
    }
    let (trees, pruned) = dedup_by_edge_set(combined, SpanningTree::edges);
    record_duplicates_pruned(pruned);
    debug!(distinct = trees.len(), pruned, "merged enumerations from every start");
    Ok(trees)
}

pub(crate) fn enumerate_from(
    edges: &[Edge],
    node_count: usize,
    start: usize,
) -> Result<Vec<SpanningTree>, MstError> {
    let required = node_count.saturating_sub(1);
    let mut generation = vec![PartialTree::rooted_at(start, node_count)];

    for step in 1..=required {
        let mut next = Vec::new();
        for partial in &generation {
            let candidates = partial.cheapest_frontier(edges);
            if candidates.is_empty() {
                warn!(
                    start,
                    placed = partial.edges.len(),
                    required,
                    "frontier emptied before the tree spanned the graph"
                );
                return Err(MstError::DisconnectedGraph {
                    tree_edges: partial.edges.len(),
                    required,
                });
            }
            next.extend(
                candidates
                    .into_iter()
                    .map(|(edge, reached)| partial.extend(edge, reached)),
            );
        }

        let expanded = next.len();
        let (kept, pruned) = dedup_by_edge_set(next, |partial: &PartialTree| {
            partial.edges.as_slice()
        });
        record_duplicates_pruned(pruned);
        debug!(step, expanded, kept = kept.len(), pruned, "prim generation expanded");
        generation = kept;
    }

    let trees: Vec<SpanningTree> = generation.into_iter().map(PartialTree::finish).collect();
    let (trees, pruned) = dedup_by_edge_set(trees, SpanningTree::edges);
    record_duplicates_pruned(pruned);
    Ok(trees)
}

/// An in-progress Prim execution. Extending one yields a new value; no two
/// branches share storage.
#[derive(Clone, Debug)]
struct PartialTree {
    edges: Vec<Edge>,
    nodes: Vec<usize>,
    visited: Vec<bool>,
}

impl PartialTree {
    fn rooted_at(start: usize, node_count: usize) -> Self {
        let mut visited = vec![false; node_count];
        visited[start] = true;
        Self {
            edges: Vec::new(),
            nodes: vec![start],
            visited,
        }
    }

    fn is_visited(&self, node: usize) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// Returns the minimum-weight frontier edges, oriented visited → new,
    /// paired with the node each one reaches.
    fn cheapest_frontier(&self, edges: &[Edge]) -> Vec<(Edge, usize)> {
        let frontier: Vec<(Edge, usize)> = edges
            .iter()
            .filter_map(|edge| {
                match (self.is_visited(edge.source()), self.is_visited(edge.target())) {
                    (true, false) => Some((*edge, edge.target())),
                    (false, true) => Some((edge.reversed(), edge.source())),
                    _ => None,
                }
            })
            .collect();

        let Some(minimum) = frontier
            .iter()
            .map(|(edge, _)| edge.weight_or_unit())
            .min_by(f32::total_cmp)
        else {
            return Vec::new();
        };

        frontier
            .into_iter()
            .filter(|(edge, _)| edge.weight_or_unit() == minimum)
            .collect()
    }

    fn extend(&self, edge: Edge, reached: usize) -> Self {
        let mut next = self.clone();
        next.edges.push(edge);
        next.nodes.push(reached);
        next.visited[reached] = true;
        next
    }

    fn finish(self) -> SpanningTree {
        SpanningTree {
            edges: self.edges,
            nodes: self.nodes,
        }
    }
}
