//! Graph abstraction consumed by the MST engines.
//!
//! The engines never own or mutate a graph. They read node counts, adjacency
//! lists and the `directed` flag through the [`Graph`] trait, so callers can
//! plug in whatever representation their exercises already use.
//! [`AdjacencyGraph`] is the in-memory implementation shipped with the crate.

use std::{cmp::Ordering, sync::Arc};

use crate::error::GraphError;

/// Weight used for edges without an explicit weight.
pub const UNIT_WEIGHT: f32 = 1.0;

/// A weighted edge stored in a node's adjacency list.
///
/// Edges are undirected for every MST operation: `(a, b, w)` and `(b, a, w)`
/// describe the same edge. Use [`Edge::key`] when comparing edges.
///
/// # Examples
/// ```
/// use treeline_core::Edge;
///
/// let forward = Edge::new(0, 3, Some(2.5));
/// let backward = Edge::new(3, 0, Some(2.5));
/// assert_eq!(forward.key(), backward.key());
/// assert_eq!(Edge::unweighted(1, 2).weight_or_unit(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Option<f32>,
}

impl Edge {
    /// Creates an edge with an optional weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Option<f32>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Creates an edge carrying an explicit weight.
    #[must_use]
    pub const fn weighted(source: usize, target: usize, weight: f32) -> Self {
        Self::new(source, target, Some(weight))
    }

    /// Creates an edge without a weight; it counts as [`UNIT_WEIGHT`].
    #[must_use]
    pub const fn unweighted(source: usize, target: usize) -> Self {
        Self::new(source, target, None)
    }

    /// Returns the source endpoint as stored.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the target endpoint as stored.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the stored weight, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Option<f32> { self.weight }

    /// Returns the effective weight, treating a missing weight as
    /// [`UNIT_WEIGHT`].
    #[must_use]
    pub fn weight_or_unit(&self) -> f32 {
        self.weight.unwrap_or(UNIT_WEIGHT)
    }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }

    /// Returns `true` when the edge joins a node to itself.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the orientation-free identity of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target, self.weight_or_unit())
    }
}

/// Orientation-free identity of an undirected edge.
///
/// Two edges are the same undirected edge exactly when their keys are equal:
/// the endpoints are stored as `(min, max)` and the effective weight is
/// compared bitwise after folding `-0.0` into `0.0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct EdgeKey {
    low: usize,
    high: usize,
    weight_bits: u32,
}

impl EdgeKey {
    fn new(left: usize, right: usize, weight: f32) -> Self {
        let (low, high) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let normalised = if weight == 0.0 { 0.0_f32 } else { weight };
        Self {
            low,
            high,
            weight_bits: normalised.to_bits(),
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn low(&self) -> usize { self.low }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn high(&self) -> usize { self.high }

    /// Returns the effective weight.
    #[must_use]
    pub const fn weight(&self) -> f32 {
        f32::from_bits(self.weight_bits)
    }
}

/// A graph node: a stable label plus its index in the node sequence.
#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    label: Arc<str>,
}

impl Node {
    /// Returns the node's position in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> usize { self.index }

    /// Returns the node's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

/// Read-only view over a graph, as required by the MST engines.
///
/// # Examples
/// ```
/// use treeline_core::{Edge, Graph};
///
/// struct Pair([Vec<Edge>; 2]);
///
/// impl Graph for Pair {
///     fn node_count(&self) -> usize { 2 }
///     fn edges(&self, node: usize) -> &[Edge] {
///         self.0.get(node).map(Vec::as_slice).unwrap_or_default()
///     }
///     fn is_directed(&self) -> bool { false }
///     fn label(&self, node: usize) -> Option<&str> {
///         ["L", "R"].get(node).copied()
///     }
/// }
///
/// let graph = Pair([vec![Edge::weighted(0, 1, 4.0)], vec![]]);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.node_by_label("R"), Some(1));
/// ```
pub trait Graph {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the outgoing edges recorded for `node`.
    ///
    /// Implementations return an empty slice for unknown nodes.
    fn edges(&self, node: usize) -> &[Edge];

    /// Returns `true` when the graph's edges are directed.
    fn is_directed(&self) -> bool;

    /// Returns the display label of `node`.
    fn label(&self, node: usize) -> Option<&str>;

    /// Returns the number of stored edge records across all adjacency lists.
    fn edge_count(&self) -> usize {
        (0..self.node_count()).map(|node| self.edges(node).len()).sum()
    }

    /// Returns `true` when the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns the index of the first node labelled `label`.
    fn node_by_label(&self, label: &str) -> Option<usize> {
        (0..self.node_count()).find(|&node| self.label(node) == Some(label))
    }
}

/// An adjacency-list graph with labelled nodes.
///
/// # Examples
/// ```
/// use treeline_core::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::undirected(["A", "B", "C"]);
/// graph.add_edge(0, 1, Some(3.0))?;
/// graph.add_edge(1, 2, None)?;
/// assert_eq!(graph.edges(1).len(), 2);
/// assert!(!graph.is_directed());
/// # Ok::<(), treeline_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
}

impl AdjacencyGraph {
    /// Creates an undirected graph with one node per label.
    #[must_use]
    pub fn undirected<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self::with_direction(labels, false)
    }

    /// Creates a directed graph with one node per label.
    #[must_use]
    pub fn directed<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self::with_direction(labels, true)
    }

    fn with_direction<I, S>(labels: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let nodes: Vec<Node> = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| Node {
                index,
                label: label.into(),
            })
            .collect();
        let adjacency = vec![Vec::new(); nodes.len()];
        Self {
            nodes,
            adjacency,
            directed,
        }
    }

    /// Creates an undirected graph from labels and `(source, target, weight)`
    /// triples, storing both directions of every edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is out of range.
    pub fn with_edges<I, S>(
        labels: I,
        edges: &[(usize, usize, Option<f32>)],
    ) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let mut graph = Self::undirected(labels);
        for &(source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Adds an edge. Undirected graphs record it on both endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is out of range.
    pub fn add_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: Option<f32>,
    ) -> Result<&mut Self, GraphError> {
        self.add_arc(source, target, weight)?;
        if !self.directed && source != target {
            self.push_record(target, Edge::new(target, source, weight));
        }
        Ok(self)
    }

    /// Adds a single edge record on `source` only.
    ///
    /// The MST engines still treat the record as undirected, so graphs may
    /// store each edge once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an endpoint is out of range.
    pub fn add_arc(
        &mut self,
        source: usize,
        target: usize,
        weight: Option<f32>,
    ) -> Result<&mut Self, GraphError> {
        self.ensure_node(source)?;
        self.ensure_node(target)?;
        self.push_record(source, Edge::new(source, target, weight));
        Ok(self)
    }

    /// Removes every record of the undirected edge between `left` and
    /// `right`, returning how many records were dropped.
    pub fn remove_edge(&mut self, left: usize, right: usize) -> usize {
        let mut removed = 0;
        for list in &mut self.adjacency {
            let before = list.len();
            list.retain(|edge| {
                !((edge.source() == left && edge.target() == right)
                    || (edge.source() == right && edge.target() == left))
            });
            removed += before - list.len();
        }
        removed
    }

    /// Returns the nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up the node index for `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] when no node carries the label.
    pub fn index_of(&self, label: &str) -> Result<usize, GraphError> {
        self.node_by_label(label)
            .ok_or_else(|| GraphError::UnknownLabel {
                label: label.to_owned(),
            })
    }

    fn ensure_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode {
                node,
                node_count: self.nodes.len(),
            })
        }
    }

    fn push_record(&mut self, node: usize, edge: Edge) {
        if let Some(list) = self.adjacency.get_mut(node) {
            list.push(edge);
        }
    }
}

impl Graph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edges(&self, node: usize) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn label(&self, node: usize) -> Option<&str> {
        self.nodes.get(node).map(Node::label)
    }
}
