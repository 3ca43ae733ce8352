//! Property 1: agreement with the brute-force oracle.
//!
//! On connected inputs, Kruskal's total weight equals the oracle minimum,
//! every per-start Prim result is an oracle tree, and the cross-start
//! aggregation finds exactly the oracle's set of trees. On disconnected
//! inputs, every engine reports [`MstError::DisconnectedGraph`].

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, Graph, MstError, SpanningTree, compute_all_mst, get_all_mst, kruskal};

use super::oracle::{OracleMsts, brute_force_msts};
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let edges: Vec<Edge> = (0..graph.node_count())
        .flat_map(|node| graph.edges(node).iter().copied())
        .collect();
    let oracle = brute_force_msts(fixture.node_count, &edges);

    if !fixture.is_connected() {
        return check_disconnected(fixture, &oracle);
    }

    let Some(expected_weight) = oracle.weight else {
        return Err(TestCaseError::fail(format!(
            "oracle found no spanning tree ({})",
            fixture.describe()
        )));
    };

    let outcome = kruskal(&graph).map_err(|err| fail("kruskal", &err, fixture))?;
    if outcome.total_weight() != expected_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight {} != oracle weight {expected_weight} ({})",
            outcome.total_weight(),
            fixture.describe()
        )));
    }

    for start in 0..fixture.node_count {
        let trees = compute_all_mst(&graph, start)
            .map_err(|err| fail("compute_all_mst", &err, fixture))?;
        for tree in &trees {
            if oracle.trees.binary_search(&tree.edge_set()).is_err() {
                return Err(TestCaseError::fail(format!(
                    "start {start} produced a non-minimal tree {:?} ({})",
                    tree.edges(),
                    fixture.describe()
                )));
            }
        }
    }

    let all = get_all_mst(&graph).map_err(|err| fail("get_all_mst", &err, fixture))?;
    let mut found: Vec<_> = all.iter().map(SpanningTree::edge_set).collect();
    found.sort();
    if found != oracle.trees {
        return Err(TestCaseError::fail(format!(
            "aggregation found {} trees, oracle {} ({})",
            found.len(),
            oracle.trees.len(),
            fixture.describe()
        )));
    }

    Ok(())
}

fn check_disconnected(fixture: &MstFixture, oracle: &OracleMsts) -> TestCaseResult {
    if oracle.weight.is_some() {
        return Err(TestCaseError::fail(format!(
            "oracle spanned a disconnected fixture ({})",
            fixture.describe()
        )));
    }
    let graph = fixture.graph();
    let results = [
        ("kruskal", kruskal(&graph).err()),
        ("compute_all_mst", compute_all_mst(&graph, 0).err()),
        ("get_all_mst", get_all_mst(&graph).err()),
    ];
    for (engine, err) in results {
        if !matches!(err, Some(MstError::DisconnectedGraph { .. })) {
            return Err(TestCaseError::fail(format!(
                "{engine} returned {err:?} instead of a disconnected error ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}

fn fail(engine: &str, err: &MstError, fixture: &MstFixture) -> TestCaseError {
    TestCaseError::fail(format!("{engine} failed: {err} ({})", fixture.describe()))
}
