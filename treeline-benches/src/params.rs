//! Benchmark parameter types.

use std::fmt;

/// Parameters for a grid-graph benchmark run.
#[derive(Clone, Debug)]
pub struct GridBenchParams {
    /// Number of rows in the grid.
    pub rows: usize,
    /// Number of columns in the grid.
    pub cols: usize,
    /// Number of distinct edge weights; one makes every edge a tie.
    pub weight_levels: u8,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{},levels={}", self.rows, self.cols, self.weight_levels)
    }
}

/// Parameters for a union-find benchmark run.
#[derive(Clone, Debug)]
pub struct UnionFindBenchParams {
    /// Number of elements in the structure.
    pub len: usize,
    /// Stable strategy identifier.
    pub strategy: &'static str,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.len, self.strategy)
    }
}
