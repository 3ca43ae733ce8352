//! Sequential Kruskal with rejected-edge reporting.

use tracing::{instrument, warn};

use crate::{
    Edge, Graph, UnionFind, UnionFindStrategy,
    error::MstError,
};

use super::{KruskalOutcome, record_rejected_edges, undirected_edges};

/// Computes an MST with Kruskal's algorithm.
///
/// Uses [`UnionFindStrategy::DEFAULT`]; the result does not depend
/// on the strategy. See [`kruskal_with_strategy`].
///
/// # Errors
/// Returns [`MstError::EmptyGraph`], [`MstError::NoEdges`] or
/// [`MstError::DirectedGraphUnsupported`] when the graph fails the shared
/// preconditions, [`MstError::InvalidNodeId`] or
/// [`MstError::NonFiniteWeight`] for malformed edges, and
/// [`MstError::DisconnectedGraph`] when the edges run out before the tree
/// spans every node.
///
/// # Examples
/// ```
/// use treeline_core::{AdjacencyGraph, kruskal};
///
/// let graph = AdjacencyGraph::with_edges(
///     ["A", "B", "C"],
///     &[(0, 1, Some(1.0)), (1, 2, Some(2.0)), (0, 2, Some(2.0))],
/// )?;
/// let outcome = kruskal(&graph)?;
/// assert_eq!(outcome.total_weight(), 3.0);
/// assert_eq!(outcome.cycle().len(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn kruskal<G: Graph + ?Sized>(graph: &G) -> Result<KruskalOutcome, MstError> {
    kruskal_with_strategy(graph, UnionFindStrategy::DEFAULT)
}

/// Computes an MST with Kruskal's algorithm using the given union-find
/// strategy.
///
/// Edges are deduplicated by their orientation-free key, then stably sorted
/// by effective weight, so equal weights keep the order in which the graph's
/// adjacency lists yield them. The walk stops as soon as `node_count - 1`
/// edges are accepted; `cycle` therefore only lists rejections seen up to
/// that point.
///
/// # Errors
/// As for [`kruskal`].
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), strategy = strategy.as_str()),
)]
pub fn kruskal_with_strategy<G: Graph + ?Sized>(
    graph: &G,
    strategy: UnionFindStrategy,
) -> Result<KruskalOutcome, MstError> {
    let edges = undirected_edges(graph)?;
    run_kruskal(graph.node_count(), edges, strategy)
}

pub(crate) fn run_kruskal(
    node_count: usize,
    mut edges: Vec<Edge>,
    strategy: UnionFindStrategy,
) -> Result<KruskalOutcome, MstError> {
    // Key weights fold `-0.0` into `0.0`, so signed zeros stay tied.
    edges.sort_by(|left, right| left.key().weight().total_cmp(&right.key().weight()));

    let target = node_count.saturating_sub(1);
    let mut sets = UnionFind::new(strategy, node_count);
    let mut mst = Vec::with_capacity(target);
    let mut cycle = Vec::new();

    for edge in edges {
        if mst.len() == target {
            break;
        }
        let source_root = sets.find(edge.source())?;
        let target_root = sets.find(edge.target())?;
        if source_root == target_root {
            cycle.push(edge);
        } else {
            sets.union(source_root, target_root)?;
            mst.push(edge);
        }
    }

    record_rejected_edges(cycle.len());

    if mst.len() < target {
        warn!(
            accepted = mst.len(),
            required = target,
            components = sets.component_count(),
            "edges exhausted before the tree spanned the graph"
        );
        return Err(MstError::DisconnectedGraph {
            tree_edges: mst.len(),
            required: target,
        });
    }

    Ok(KruskalOutcome { mst, cycle })
}
