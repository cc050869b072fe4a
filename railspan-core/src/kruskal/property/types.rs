//! Type definitions for Kruskal property-based tests.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with roughly `1.5n` edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated graph description.
///
/// Nodes are `0..node_count`; each unordered pair appears at most once in
/// `edges`, in insertion order.
#[derive(Clone, Debug)]
pub(super) struct KruskalFixture {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub distribution: WeightDistribution,
}

impl KruskalFixture {
    /// Materialises the fixture as a [`Graph`] over `usize` labels.
    pub(super) fn build_graph(&self) -> Graph<usize> {
        let mut graph = Graph::with_capacity(self.node_count, self.edges.len());
        for node in 0..self.node_count {
            graph.add_node(node);
        }
        for (left, right, weight) in &self.edges {
            if let Err(err) = graph.add_edge(left, right, *weight) {
                panic!("generated edge ({left}, {right}) must be valid: {err}");
            }
        }
        graph
    }
}
