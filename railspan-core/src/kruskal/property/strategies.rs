//! Graph generation strategies for Kruskal property-based tests.
//!
//! Each generator produces unique unordered pairs over `0..node_count` so the
//! fixtures never trip duplicate-edge rejection.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{KruskalFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering all weight distributions.
pub(super) fn kruskal_fixture_strategy() -> impl Strategy<Value = KruskalFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> KruskalFixture {
    match distribution {
        WeightDistribution::Unique => {
            probabilistic_graph(rng, MAX_NODES, (0.1, 0.4), distribution, |r| {
                r.gen_range(0.0_f64..500.0)
            })
        }
        WeightDistribution::ManyIdentical => {
            probabilistic_graph(rng, MAX_NODES, (0.2, 0.5), distribution, |r| {
                f64::from(r.gen_range(1_u8..=3))
            })
        }
        WeightDistribution::Dense => {
            probabilistic_graph(rng, DENSE_MAX_NODES, (0.7, 0.95), distribution, |r| {
                r.gen_range(0.0_f64..50.0)
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Disconnected => disconnected_graph(rng),
    }
}

fn probabilistic_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_of: impl FnMut(&mut SmallRng) -> f64,
) -> KruskalFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                let weight = weight_of(rng);
                edges.push(oriented(rng, left, right, weight));
            }
        }
    }
    KruskalFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Spanning path plus roughly `n / 2` random chords.
fn sparse_graph(rng: &mut SmallRng) -> KruskalFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut pairs = std::collections::HashSet::new();
    let mut edges = Vec::new();
    for window in order.windows(2) {
        let (left, right) = (window[0], window[1]);
        pairs.insert((left.min(right), left.max(right)));
        let weight = rng.gen_range(0.0_f64..100.0);
        edges.push((left, right, weight));
    }

    for _ in 0..node_count / 2 {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        if left == right || !pairs.insert((left.min(right), left.max(right))) {
            continue;
        }
        let weight = rng.gen_range(0.0_f64..100.0);
        edges.push((left, right, weight));
    }

    // Shuffle insertion order so the path is not already sorted.
    shuffle(&mut edges, rng);

    KruskalFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Two to four components, each internally dense, with no bridges.
fn disconnected_graph(rng: &mut SmallRng) -> KruskalFixture {
    let component_count = rng.gen_range(2_usize..=4);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(1_usize..=10);
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(0.6) {
                    let weight = rng.gen_range(0.0_f64..20.0);
                    edges.push(oriented(rng, left, right, weight));
                }
            }
        }
        offset += size;
    }
    KruskalFixture {
        node_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: f64) -> (usize, usize, f64) {
    if rng.gen_bool(0.5) {
        (left, right, weight)
    } else {
        (right, left, weight)
    }
}

fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}
