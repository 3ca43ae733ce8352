//! Minimum spanning tree (MST) construction and enumeration.
//!
//! Two engines share the precondition checks in `validate`:
//!
//! - [`kruskal`] builds one MST from stably sorted edges and reports the
//!   edges it rejected as cycle-forming, in encounter order.
//! - [`compute_all_mst`] enumerates every distinct MST a tie-breaking
//!   execution of Prim's algorithm can produce from one start vertex.
//!   [`get_all_mst`] repeats that from every vertex and deduplicates the
//!   union of the results.
//!
//! Edge-set comparisons are orientation-free throughout: `(a, b, w)` and
//! `(b, a, w)` are the same edge.

mod edge_set;
mod kruskal;
mod prim;
mod validate;

use crate::{Edge, EdgeKey, Graph};

pub use self::{
    edge_set::same_edge_set,
    kruskal::{kruskal, kruskal_with_strategy},
    prim::{compute_all_mst, compute_all_mst_from_label, count_all_mst, get_all_mst},
};

pub(crate) use self::{
    kruskal::run_kruskal,
    prim::{enumerate_all_starts, enumerate_from},
    validate::{check_start, undirected_edges},
};

/// Sums effective edge weights as `f64`.
pub(crate) fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| f64::from(edge.weight_or_unit())).sum()
}

/// Result of a Kruskal run: the MST and the rejected cycle-forming edges.
#[derive(Clone, Debug, PartialEq)]
pub struct KruskalOutcome {
    mst: Vec<Edge>,
    cycle: Vec<Edge>,
}

impl KruskalOutcome {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    pub fn mst(&self) -> &[Edge] {
        &self.mst
    }

    /// Returns the edges rejected because both endpoints already shared a
    /// root, in the order Kruskal considered them.
    #[must_use]
    pub fn cycle(&self) -> &[Edge] {
        &self.cycle
    }

    /// Returns the summed weight of the MST edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.mst)
    }

    /// Splits the outcome into `(mst, cycle)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, Vec<Edge>) {
        (self.mst, self.cycle)
    }
}

/// One enumerated MST together with the order Prim discovered its nodes.
///
/// Edges are oriented from the already-visited endpoint to the node it
/// reached.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    nodes: Vec<usize>,
}

impl SpanningTree {
    /// Returns the tree edges in selection order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns node indices in discovery order, starting with the start
    /// vertex.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the summed weight of the tree edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// Returns the sorted, orientation-free keys of the tree edges.
    #[must_use]
    pub fn edge_set(&self) -> Vec<EdgeKey> {
        edge_set::edge_set(&self.edges)
    }

    /// Resolves the discovery order to node labels.
    ///
    /// Nodes without a label are skipped.
    #[must_use]
    pub fn visit_labels<'g, G: Graph + ?Sized>(&self, graph: &'g G) -> Vec<&'g str> {
        self.nodes
            .iter()
            .filter_map(|&node| graph.label(node))
            .collect()
    }

    /// Splits the tree into `(edges, nodes)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, Vec<usize>) {
        (self.edges, self.nodes)
    }
}

#[cfg(feature = "metrics")]
fn record_rejected_edges(count: usize) {
    metrics::counter!("mst_kruskal_rejected_edges").increment(count as u64);
}

#[cfg(not(feature = "metrics"))]
const fn record_rejected_edges(_count: usize) {}

#[cfg(feature = "metrics")]
fn record_duplicates_pruned(count: usize) {
    metrics::counter!("mst_prim_duplicates_pruned").increment(count as u64);
}

#[cfg(not(feature = "metrics"))]
const fn record_duplicates_pruned(_count: usize) {}


#[cfg(test)]
mod property;
