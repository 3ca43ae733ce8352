//! Error types for the treeline core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable error codes for each variant.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// An index outside `[0, len)` was passed to `find` or `union`.
    #[error("index {index} is out of range for a union-find over {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// An index outside `[0, len)` was passed to `find` or `union`.
        IndexOutOfRange => IndexOutOfRange { .. } => "UNION_FIND_INDEX_OUT_OF_RANGE",
    }
}

/// An error produced while assembling an [`crate::AdjacencyGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint does not name a node of the graph.
    #[error("node {node} does not exist (graph has {node_count} nodes)")]
    UnknownNode {
        /// The endpoint that was not found.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// No node carries the requested label.
    #[error("no node is labelled `{label}`")]
    UnknownLabel {
        /// The label that was looked up.
        label: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint does not name a node of the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// No node carries the requested label.
        UnknownLabel => UnknownLabel { .. } => "GRAPH_UNKNOWN_LABEL",
    }
}

/// Errors returned while computing or enumerating minimum spanning trees.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The graph has no nodes.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The graph has nodes but no edges.
    #[error("cannot compute an MST for a graph without edges")]
    NoEdges,
    /// MST operations require an undirected graph.
    #[error("minimum spanning trees are only defined for undirected graphs")]
    DirectedGraphUnsupported,
    /// Fewer than `node_count - 1` edges could be connected.
    #[error("graph is disconnected: only {tree_edges} of {required} tree edges could be placed")]
    DisconnectedGraph {
        /// Number of tree edges placed before the search ran dry.
        tree_edges: usize,
        /// Number of edges a spanning tree needs (`node_count - 1`).
        required: usize,
    },
    /// The start vertex is not a node of the graph.
    #[error("start node {start} is not part of the graph ({node_count} nodes)")]
    UnknownStartNode {
        /// The requested start vertex.
        start: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// No node carries the requested start label.
    #[error("no start node is labelled `{label}`")]
    UnknownStartLabel {
        /// The label that was looked up.
        label: String,
    },
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a non-finite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The left endpoint as stored.
        left: usize,
        /// The right endpoint as stored.
        right: usize,
    },
    /// The configured node limit was exceeded.
    #[error("graph has {nodes} nodes but the engine is limited to {max_nodes}")]
    GraphTooLarge {
        /// Number of nodes in the rejected graph.
        nodes: usize,
        /// Configured upper bound.
        max_nodes: usize,
    },
    /// A node limit of zero was requested.
    #[error("max_nodes must be at least 1 (got {got})")]
    InvalidMaxNodes {
        /// The rejected limit.
        got: usize,
    },
    /// A union-find operation failed inside an algorithm run.
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no nodes.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// The graph has nodes but no edges.
        NoEdges => NoEdges => "MST_NO_EDGES",
        /// MST operations require an undirected graph.
        DirectedGraphUnsupported => DirectedGraphUnsupported => "MST_DIRECTED_GRAPH_UNSUPPORTED",
        /// Fewer than `node_count - 1` edges could be connected.
        DisconnectedGraph => DisconnectedGraph { .. } => "MST_DISCONNECTED_GRAPH",
        /// The start vertex is not a node of the graph.
        UnknownStartNode => UnknownStartNode { .. } => "MST_UNKNOWN_START_NODE",
        /// No node carries the requested start label.
        UnknownStartLabel => UnknownStartLabel { .. } => "MST_UNKNOWN_START_LABEL",
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "MST_INVALID_NODE_ID",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The configured node limit was exceeded.
        GraphTooLarge => GraphTooLarge { .. } => "MST_GRAPH_TOO_LARGE",
        /// A node limit of zero was requested.
        InvalidMaxNodes => InvalidMaxNodes { .. } => "MST_INVALID_MAX_NODES",
        /// A union-find operation failed inside an algorithm run.
        UnionFind => UnionFind { .. } => "MST_UNION_FIND",
    }
}

impl MstError {
    /// Retrieve the inner [`UnionFindErrorCode`] when the error originated in
    /// a union-find operation.
    #[must_use]
    pub const fn union_find_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::UnionFind(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the MST API.
pub type Result<T> = core::result::Result<T, MstError>;
