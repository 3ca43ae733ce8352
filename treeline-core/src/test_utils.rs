//! Shared test utilities for `treeline-core`.

use proptest::test_runner::Config as ProptestConfig;
use treeline_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::AdjacencyGraph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `TREELINE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Single-letter labels `A`, `B`, ... for `count` nodes.
pub(crate) fn letter_labels(count: usize) -> Vec<String> {
    (b'A'..=b'Z')
        .take(count)
        .map(|byte| char::from(byte).to_string())
        .collect()
}

/// Builds an undirected graph from letter-labelled weighted edges such as
/// `("A", "G", 3.0)`.
pub(crate) fn lettered_graph(node_count: usize, edges: &[(&str, &str, f32)]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::undirected(letter_labels(node_count));
    for &(left, right, weight) in edges {
        let source = graph.index_of(left).expect("left label exists");
        let target = graph.index_of(right).expect("right label exists");
        graph
            .add_edge(source, target, Some(weight))
            .expect("endpoints exist");
    }
    graph
}

/// Complete graph on `node_count` nodes with unit weights.
pub(crate) fn complete_unit_graph(node_count: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::undirected(letter_labels(node_count));
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            graph.add_edge(source, target, None).expect("endpoints exist");
        }
    }
    graph
}

/// `rows x cols` grid with unit weights, labelled row-major.
pub(crate) fn unit_grid(rows: usize, cols: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::undirected(letter_labels(rows * cols));
    for row in 0..rows {
        for col in 0..cols {
            let node = row * cols + col;
            if col + 1 < cols {
                graph.add_edge(node, node + 1, None).expect("endpoints exist");
            }
            if row + 1 < rows {
                graph
                    .add_edge(node, node + cols, None)
                    .expect("endpoints exist");
            }
        }
    }
    graph
}
