//! Property runners for the Kruskal iterator.
//!
//! - **Oracle equivalence**: the admitted edge sequence and total weight
//!   match the sequential oracle.
//! - **Structural invariants**: no cycle at admission, at most
//!   `min(edge_count, node_count - 1)` edges, exactly `node_count - 1` iff
//!   the input is connected, non-decreasing weights.
//! - **Determinism**: two iterators over the same graph agree edge by edge.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, Graph, KruskalState};

use super::{
    oracle::{count_input_components, find_root, sequential_kruskal},
    types::KruskalFixture,
};

/// Drains a fresh iterator, returning admitted edge ids in order.
fn run_to_end(fixture: &KruskalFixture, graph: &Graph<usize>) -> Result<Vec<usize>, TestCaseError> {
    let iter = graph.get_kruskal_iterator().map_err(|err| {
        TestCaseError::fail(format!(
            "get_kruskal_iterator failed: {err} (distribution={:?}, nodes={})",
            fixture.distribution, fixture.node_count,
        ))
    })?;
    Ok(iter.map(|edge| edge.id().index()).collect())
}

/// Compares the iterator against the sequential oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &KruskalFixture) -> TestCaseResult {
    let graph = fixture.build_graph();
    let produced = run_to_end(fixture, &graph)?;
    let expected = sequential_kruskal(fixture);

    if produced != expected.admitted {
        return Err(TestCaseError::fail(format!(
            "admitted edges differ: iterator={produced:?}, oracle={:?} (distribution={:?})",
            expected.admitted, fixture.distribution,
        )));
    }

    let forest = graph
        .minimum_spanning_forest()
        .map_err(|err| TestCaseError::fail(format!("forest failed: {err}")))?;
    if (forest.total_weight() - expected.total_weight).abs() > 1e-9 {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from oracle {}",
            forest.total_weight(),
            expected.total_weight,
        )));
    }
    if forest.component_count() != expected.component_count {
        return Err(TestCaseError::fail(format!(
            "component count {} differs from oracle {}",
            forest.component_count(),
            expected.component_count,
        )));
    }
    Ok(())
}

/// Validates structural invariants of the produced forest.
pub(super) fn run_structural_invariants_property(fixture: &KruskalFixture) -> TestCaseResult {
    let graph = fixture.build_graph();
    let mut iter = graph
        .get_kruskal_iterator()
        .map_err(|err| TestCaseError::fail(format!("get_kruskal_iterator failed: {err}")))?;

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut previous_weight = f64::NEG_INFINITY;
    let mut produced: Vec<Edge<'_, usize>> = Vec::new();

    for edge in iter.by_ref() {
        validate_admission(&mut parent, &edge)?;
        if edge.weight() < previous_weight {
            return Err(TestCaseError::fail(format!(
                "edge {} has weight {} after {}",
                edge.id(),
                edge.weight(),
                previous_weight,
            )));
        }
        previous_weight = edge.weight();
        produced.push(edge);
    }

    if iter.state() != KruskalState::Exhausted {
        return Err(TestCaseError::fail("iterator did not reach Exhausted"));
    }

    let bound = graph.edge_count().min(graph.node_count().saturating_sub(1));
    if produced.len() > bound {
        return Err(TestCaseError::fail(format!(
            "{} edges exceed bound {bound}",
            produced.len()
        )));
    }

    let connected = count_input_components(fixture) == 1;
    let spanning = produced.len() == graph.node_count().saturating_sub(1);
    if connected != spanning {
        return Err(TestCaseError::fail(format!(
            "connected={connected} but produced {} edges for {} nodes",
            produced.len(),
            graph.node_count(),
        )));
    }

    if iter.component_count() != count_input_components(fixture) {
        return Err(TestCaseError::fail(format!(
            "iterator reports {} components, input has {}",
            iter.component_count(),
            count_input_components(fixture),
        )));
    }
    Ok(())
}

/// Checks that an edge joined two different components when it was yielded.
fn validate_admission(parent: &mut [usize], edge: &Edge<'_, usize>) -> TestCaseResult {
    let left_root = find_root(parent, *edge.source());
    let right_root = find_root(parent, *edge.target());
    if left_root == right_root {
        return Err(TestCaseError::fail(format!(
            "edge ({}, {}) closes a cycle",
            edge.source(),
            edge.target(),
        )));
    }
    parent[right_root] = left_root;
    Ok(())
}

/// Confirms that two iterators over the same graph agree.
pub(super) fn run_determinism_property(fixture: &KruskalFixture) -> TestCaseResult {
    let graph = fixture.build_graph();
    let first = run_to_end(fixture, &graph)?;
    let second = run_to_end(fixture, &graph)?;
    let rebuilt = run_to_end(fixture, &fixture.build_graph())?;
    if first != second || first != rebuilt {
        return Err(TestCaseError::fail(format!(
            "non-deterministic sequence: {first:?} vs {second:?} vs {rebuilt:?}"
        )));
    }
    Ok(())
}
