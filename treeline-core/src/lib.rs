//! Treeline core library.
//!
//! Minimum spanning tree computation and enumeration for small teaching
//! graphs, together with the union-find family the engines build on.
//!
//! - [`kruskal`] computes one MST and the cycle-forming edges it rejected.
//! - [`compute_all_mst`] enumerates every distinct MST reachable by
//!   tie-breaking executions of Prim's algorithm from one start vertex.
//! - [`get_all_mst`] and [`count_all_mst`] aggregate that enumeration over
//!   every start vertex.
//! - [`UnionFind`] exposes the quick-find, quick-union, weighted and
//!   path-compressing strategies behind one interface.
//!
//! All operations are synchronous and never mutate the caller's graph.
//! Enumeration cost grows with the number of distinct MSTs, so callers keep
//! inputs small (a few dozen nodes at most; [`MstEngineBuilder::with_max_nodes`]
//! enforces a cap when required).
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the engines emit:
//!
//! - `mst_kruskal_rejected_edges` (counter)
//! - `mst_prim_duplicates_pruned` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    engine::{MstEngine, MstEngineBuilder},
    error::{
        GraphError, GraphErrorCode, MstError, MstErrorCode, Result, UnionFindError,
        UnionFindErrorCode,
    },
    graph::{AdjacencyGraph, Edge, EdgeKey, Graph, Node, UNIT_WEIGHT},
    mst::{
        KruskalOutcome, SpanningTree, compute_all_mst, compute_all_mst_from_label,
        count_all_mst, get_all_mst, kruskal, kruskal_with_strategy, same_edge_set,
    },
    union_find::{UnionFind, UnionFindStrategy},
};
