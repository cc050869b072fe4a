//! Sequential Kruskal oracle for property verification.
//!
//! A deliberately plain, eager implementation over raw index arrays. The
//! sort key mirrors the iterator (`weight.total_cmp`, then insertion index)
//! so the admitted edge sequence must match exactly, not just in total
//! weight.

use super::types::KruskalFixture;

/// Result of the sequential oracle.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleResult {
    /// Admitted edges as insertion indices, in admission order.
    pub admitted: Vec<usize>,
    /// Sum of admitted weights.
    pub total_weight: f64,
    /// Components remaining after every edge has been considered.
    pub component_count: usize,
}

/// Runs Kruskal's algorithm eagerly over the fixture's edges.
pub(super) fn sequential_kruskal(fixture: &KruskalFixture) -> OracleResult {
    let mut order: Vec<usize> = (0..fixture.edges.len()).collect();
    order.sort_by(|&a, &b| {
        fixture.edges[a]
            .2
            .total_cmp(&fixture.edges[b].2)
            .then(a.cmp(&b))
    });

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut admitted = Vec::new();
    let mut total_weight = 0.0;

    for index in order {
        let (left, right, weight) = fixture.edges[index];
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            admitted.push(index);
            total_weight += weight;
        }
    }

    OracleResult {
        component_count: fixture.node_count - admitted.len(),
        admitted,
        total_weight,
    }
}

/// Path-halving find used by the oracle and the structural checks.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the fixture's input graph.
pub(super) fn count_input_components(fixture: &KruskalFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut components = fixture.node_count;
    for &(left, right, _) in &fixture.edges {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            components -= 1;
        }
    }
    components
}
