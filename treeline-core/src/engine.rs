//! Configurable front door to the MST engines.
//!
//! [`MstEngineBuilder`] validates the configuration once; the resulting
//! [`MstEngine`] applies it to every call. The free functions in the crate
//! root behave like an engine built from the defaults.

use tracing::{instrument, warn};

use crate::{
    Graph, KruskalOutcome, SpanningTree, UnionFindStrategy,
    error::{MstError, Result},
    mst::{check_start, enumerate_all_starts, enumerate_from, run_kruskal, undirected_edges},
};

/// Configures and constructs [`MstEngine`] instances.
///
/// # Examples
/// ```
/// use treeline_core::{MstEngineBuilder, UnionFindStrategy};
///
/// let engine = MstEngineBuilder::new()
///     .with_union_find_strategy(UnionFindStrategy::QuickFind)
///     .with_max_nodes(Some(16))
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(engine.max_nodes(), Some(16));
/// assert_eq!(engine.union_find_strategy(), UnionFindStrategy::QuickFind);
/// ```
#[derive(Clone, Debug)]
pub struct MstEngineBuilder {
    union_find_strategy: UnionFindStrategy,
    max_nodes: Option<usize>,
}

impl Default for MstEngineBuilder {
    fn default() -> Self {
        Self {
            union_find_strategy: UnionFindStrategy::DEFAULT,
            max_nodes: None,
        }
    }
}

impl MstEngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{MstEngineBuilder, UnionFindStrategy};
    ///
    /// let builder = MstEngineBuilder::new();
    /// assert_eq!(builder.max_nodes(), None);
    /// assert_eq!(builder.union_find_strategy(), UnionFindStrategy::default());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the union-find strategy Kruskal runs on.
    #[must_use]
    pub const fn with_union_find_strategy(mut self, strategy: UnionFindStrategy) -> Self {
        self.union_find_strategy = strategy;
        self
    }

    /// Returns the configured union-find strategy.
    #[must_use]
    pub const fn union_find_strategy(&self) -> UnionFindStrategy {
        self.union_find_strategy
    }

    /// Caps the number of nodes a graph may have; `None` removes the cap.
    #[must_use]
    pub const fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Returns the configured node cap.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Validates the configuration and constructs an [`MstEngine`].
    ///
    /// # Errors
    /// Returns [`MstError::InvalidMaxNodes`] when the node cap is zero.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{MstEngineBuilder, MstError};
    ///
    /// let err = MstEngineBuilder::new()
    ///     .with_max_nodes(Some(0))
    ///     .build()
    ///     .expect_err("a zero cap is rejected");
    /// assert!(matches!(err, MstError::InvalidMaxNodes { got: 0 }));
    /// ```
    pub fn build(self) -> Result<MstEngine> {
        if self.max_nodes == Some(0) {
            return Err(MstError::InvalidMaxNodes { got: 0 });
        }
        Ok(MstEngine {
            union_find_strategy: self.union_find_strategy,
            max_nodes: self.max_nodes,
        })
    }
}

/// Runs the MST engines under a validated configuration.
///
/// # Examples
/// ```
/// use treeline_core::{AdjacencyGraph, MstEngineBuilder};
///
/// let graph = AdjacencyGraph::with_edges(
///     ["A", "B", "C", "D"],
///     &[(0, 1, None), (1, 2, None), (2, 3, None), (3, 0, None)],
/// )?;
/// let engine = MstEngineBuilder::new().build()?;
/// assert_eq!(engine.count_all_mst(&graph)?, 4);
/// assert_eq!(engine.kruskal(&graph)?.cycle().len(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MstEngine {
    union_find_strategy: UnionFindStrategy,
    max_nodes: Option<usize>,
}

impl Default for MstEngine {
    fn default() -> Self {
        Self {
            union_find_strategy: UnionFindStrategy::DEFAULT,
            max_nodes: None,
        }
    }
}

impl MstEngine {
    /// Returns the union-find strategy Kruskal runs on.
    #[must_use]
    pub const fn union_find_strategy(&self) -> UnionFindStrategy {
        self.union_find_strategy
    }

    /// Returns the node cap, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Runs [`crate::kruskal`] under this configuration.
    ///
    /// # Errors
    /// Returns [`MstError::GraphTooLarge`] when the graph exceeds the node
    /// cap, and otherwise as for [`crate::kruskal`].
    #[instrument(
        name = "engine.kruskal",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), strategy = self.union_find_strategy.as_str()),
    )]
    pub fn kruskal<G: Graph + ?Sized>(&self, graph: &G) -> Result<KruskalOutcome> {
        self.check_size(graph)?;
        let edges = undirected_edges(graph)?;
        run_kruskal(graph.node_count(), edges, self.union_find_strategy)
    }

    /// Runs [`crate::compute_all_mst`] under this configuration.
    ///
    /// # Errors
    /// Returns [`MstError::GraphTooLarge`] when the graph exceeds the node
    /// cap, and otherwise as for [`crate::compute_all_mst`].
    #[instrument(
        name = "engine.compute_all",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), results = tracing::field::Empty),
    )]
    pub fn compute_all_mst<G: Graph + ?Sized>(
        &self,
        graph: &G,
        start: usize,
    ) -> Result<Vec<SpanningTree>> {
        self.check_size(graph)?;
        let edges = undirected_edges(graph)?;
        check_start(start, graph.node_count())?;
        let trees = enumerate_from(&edges, graph.node_count(), start)?;
        tracing::Span::current().record("results", trees.len());
        Ok(trees)
    }

    /// Runs [`crate::get_all_mst`] under this configuration.
    ///
    /// # Errors
    /// Returns [`MstError::GraphTooLarge`] when the graph exceeds the node
    /// cap, and otherwise as for [`crate::get_all_mst`].
    #[instrument(
        name = "engine.get_all",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), results = tracing::field::Empty),
    )]
    pub fn get_all_mst<G: Graph + ?Sized>(&self, graph: &G) -> Result<Vec<SpanningTree>> {
        self.check_size(graph)?;
        let edges = undirected_edges(graph)?;
        let trees = enumerate_all_starts(&edges, graph.node_count())?;
        tracing::Span::current().record("results", trees.len());
        Ok(trees)
    }

    /// Runs [`crate::count_all_mst`] under this configuration.
    ///
    /// # Errors
    /// As for [`MstEngine::get_all_mst`].
    pub fn count_all_mst<G: Graph + ?Sized>(&self, graph: &G) -> Result<usize> {
        self.get_all_mst(graph).map(|trees| trees.len())
    }

    fn check_size<G: Graph + ?Sized>(&self, graph: &G) -> Result<()> {
        let nodes = graph.node_count();
        match self.max_nodes {
            Some(max_nodes) if nodes > max_nodes => {
                warn!(nodes, max_nodes, "graph exceeds the configured node cap");
                Err(MstError::GraphTooLarge { nodes, max_nodes })
            }
            _ => Ok(()),
        }
    }
}
