//! Shared test utilities for `railspan-core`.

use proptest::test_runner::Config as ProptestConfig;
use railspan_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::Graph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `RAILSPAN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph over string labels from `(left, right, weight)` triples,
/// adding every label mentioned by an edge as a node first.
pub(crate) fn labelled_graph(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> Graph<&'static str> {
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(*node);
    }
    for (left, right, weight) in edges {
        if let Err(err) = graph.add_edge(left, right, *weight) {
            panic!("fixture edge {left}-{right} must be valid: {err}");
        }
    }
    graph
}

/// Collects the MST sequence as `(source, target, weight)` triples.
pub(crate) fn mst_triples(graph: &Graph<&'static str>) -> Vec<(&'static str, &'static str, f64)> {
    match graph.get_kruskal_iterator() {
        Ok(iter) => iter
            .map(|edge| (*edge.source(), *edge.target(), edge.weight()))
            .collect(),
        Err(err) => panic!("fixture graph must not be empty: {err}"),
    }
}
