//! Shared preconditions for the Kruskal and Prim engines.

use crate::{
    Edge, Graph,
    error::MstError,
};

use super::edge_set::dedup_edges;

/// Validates `graph` and returns its undirected edge list.
///
/// Checks run in a fixed order: empty graph, missing edges, directedness,
/// then every stored edge for in-range endpoints and a finite weight. Edges
/// are collected node by node and deduplicated by [`Edge::key`], keeping the
/// first occurrence, so symmetric records collapse to one edge.
pub(crate) fn undirected_edges<G: Graph + ?Sized>(graph: &G) -> Result<Vec<Edge>, MstError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    if graph.edge_count() == 0 {
        return Err(MstError::NoEdges);
    }
    if graph.is_directed() {
        return Err(MstError::DirectedGraphUnsupported);
    }

    let mut edges = Vec::with_capacity(graph.edge_count());
    for node in 0..node_count {
        for edge in graph.edges(node) {
            validate_edge(edge, node_count)?;
            edges.push(*edge);
        }
    }
    Ok(dedup_edges(edges))
}

fn validate_edge(edge: &Edge, node_count: usize) -> Result<(), MstError> {
    for node in [edge.source(), edge.target()] {
        if node >= node_count {
            return Err(MstError::InvalidNodeId { node, node_count });
        }
    }
    if !edge.weight_or_unit().is_finite() {
        return Err(MstError::NonFiniteWeight {
            left: edge.source(),
            right: edge.target(),
        });
    }
    Ok(())
}

/// Rejects start vertices outside the graph.
pub(crate) const fn check_start(start: usize, node_count: usize) -> Result<(), MstError> {
    if start < node_count {
        Ok(())
    } else {
        Err(MstError::UnknownStartNode { start, node_count })
    }
}
