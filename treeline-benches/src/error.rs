//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark graphs so
//! setup functions can propagate failures with `?`.

use treeline_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction rejected an edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// An MST computation failed while validating a benchmark input.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
