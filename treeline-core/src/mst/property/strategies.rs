//! Strategy builders for MST property-based tests.
//!
//! Graphs stay small enough for the brute-force oracle to enumerate every
//! spanning tree. Weights are whole numbers so sums compare exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for connected graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for every generated graph.
const MAX_NODES: usize = 6;
/// Largest whole-number weight.
const MAX_WEIGHT: u8 = 9;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Distinct => generate_distinct(rng),
        WeightDistribution::FewTies => generate_few_ties(rng),
        WeightDistribution::Unit => generate_unit(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Connected graphs ────────────────────────────────────────────────────

/// Lays a random spanning path, then adds every remaining pair with
/// probability `extra_probability`.
fn connected_graph(
    rng: &mut SmallRng,
    extra_probability: f64,
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> Option<f32>,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut pairs: Vec<(usize, usize)> = order
        .windows(2)
        .map(|window| canonical(window[0], window[1]))
        .collect();
    for (source, target) in all_pairs(0, node_count) {
        if !pairs.contains(&(source, target)) && rng.gen_bool(extra_probability) {
            pairs.push((source, target));
        }
    }

    let edges = pairs
        .into_iter()
        .map(|(source, target)| (source, target, weight(rng)))
        .collect();
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

fn generate_distinct(rng: &mut SmallRng) -> MstFixture {
    let mut next = 0_u8;
    connected_graph(rng, 0.6, WeightDistribution::Distinct, move |_| {
        next += 1;
        Some(f32::from(next))
    })
}

fn generate_few_ties(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f32> = (0..pool_size)
        .map(|_| f32::from(rng.gen_range(1..=MAX_WEIGHT)))
        .collect();
    connected_graph(rng, 0.7, WeightDistribution::FewTies, move |r| {
        Some(pool[r.gen_range(0..pool.len())])
    })
}

fn generate_unit(rng: &mut SmallRng) -> MstFixture {
    connected_graph(rng, 0.5, WeightDistribution::Unit, |_| None)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    connected_graph(rng, 0.15, WeightDistribution::Sparse, |r| {
        Some(f32::from(r.gen_range(1..=MAX_WEIGHT)))
    })
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates two or three components of one to three nodes each, with at
/// least one edge in the whole graph.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=3);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=3))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(0.7) {
                edges.push((source, target, Some(f32::from(rng.gen_range(1..=MAX_WEIGHT)))));
            }
        }
        offset += size;
    }
    let node_count = offset;

    if edges.is_empty() {
        // Node 2 stays isolated, so the graph remains disconnected.
        let padded = node_count.max(3);
        return MstFixture {
            node_count: padded,
            edges: vec![(0, 1, None)],
            distribution: WeightDistribution::Disconnected,
        };
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards the tie-heavy distributions, which drive branching.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Distinct),
            3 => Just(Self::FewTies),
            3 => Just(Self::Unit),
            2 => Just(Self::Sparse),
            1 => Just(Self::Disconnected),
        ]
    }
}
