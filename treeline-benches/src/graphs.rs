//! Seeded synthetic graphs for benchmarks.
//!
//! Grids keep the number of distinct MSTs predictable: with a single weight
//! level every spanning tree is minimal, and additional levels break ties.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use treeline_core::{AdjacencyGraph, kruskal};

use crate::error::BenchSetupError;

/// Configuration for a seeded grid graph.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Number of distinct whole-number weights drawn per edge.
    pub weight_levels: u8,
    /// Random seed for weight assignment.
    pub seed: u64,
}

/// Builds a `rows x cols` grid whose edge weights are drawn uniformly from
/// `1..=weight_levels`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when any dimension or the weight
/// level count is zero.
///
/// # Examples
/// ```
/// use treeline_benches::graphs::{GridConfig, seeded_grid};
/// use treeline_core::Graph;
///
/// let graph = seeded_grid(&GridConfig { rows: 2, cols: 3, weight_levels: 1, seed: 7 })?;
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 14);
/// # Ok::<(), treeline_benches::error::BenchSetupError>(())
/// ```
pub fn seeded_grid(config: &GridConfig) -> Result<AdjacencyGraph, BenchSetupError> {
    if config.rows == 0 {
        return Err(BenchSetupError::ZeroValue { context: "rows" });
    }
    if config.cols == 0 {
        return Err(BenchSetupError::ZeroValue { context: "cols" });
    }
    if config.weight_levels == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "weight_levels",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let node_count = config.rows.saturating_mul(config.cols);
    let mut graph = AdjacencyGraph::undirected((0..node_count).map(|node| format!("n{node}")));

    for row in 0..config.rows {
        for col in 0..config.cols {
            let node = row * config.cols + col;
            if col + 1 < config.cols {
                let weight = f32::from(rng.gen_range(1..=config.weight_levels));
                graph.add_edge(node, node + 1, Some(weight))?;
            }
            if row + 1 < config.rows {
                let weight = f32::from(rng.gen_range(1..=config.weight_levels));
                graph.add_edge(node, node + config.cols, Some(weight))?;
            }
        }
    }
    Ok(graph)
}

/// Builds a grid and confirms it admits a spanning tree.
///
/// # Errors
/// As for [`seeded_grid`], plus [`BenchSetupError::Mst`] when Kruskal fails.
pub fn validated_grid(config: &GridConfig) -> Result<AdjacencyGraph, BenchSetupError> {
    let graph = seeded_grid(config)?;
    kruskal(&graph)?;
    Ok(graph)
}

/// Draws `count` random index pairs in `0..len` for union-find workloads.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `len` is zero.
pub fn random_pairs(
    len: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if len == 0 {
        return Err(BenchSetupError::ZeroValue { context: "len" });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect())
}
