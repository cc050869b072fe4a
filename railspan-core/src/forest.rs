//! Eagerly collected minimum spanning forests.

use tracing::instrument;

use crate::{
    error::Result,
    graph::{Edge, Graph, GraphNode},
};

/// The full output of a minimum spanning tree computation.
///
/// When the graph is connected the forest is a single minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<'g, T> {
    edges: Vec<Edge<'g, T>>,
    total_weight: f64,
    node_count: usize,
}

impl<'g, T> MinimumSpanningForest<'g, T> {
    /// Returns the forest edges in the order Kruskal's algorithm admitted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<'g, T>] { &self.edges }

    /// Returns the sum of the edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.node_count.saturating_sub(self.edges.len())
    }

    /// Returns `true` when the forest spans every node in a single tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count() == 1
    }
}

impl<T: GraphNode> Graph<T> {
    /// Drains a fresh [`crate::KruskalIter`] into a [`MinimumSpanningForest`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::EmptyGraph`] when the graph has no nodes.
    ///
    /// # Examples
    /// ```
    /// use railspan_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// for name in ["a", "b", "c"] {
    ///     graph.add_node(name);
    /// }
    /// graph.add_edge(&"a", &"b", 2.0)?;
    /// graph.add_edge(&"b", &"c", 3.0)?;
    /// graph.add_edge(&"a", &"c", 4.0)?;
    ///
    /// let forest = graph.minimum_spanning_forest()?;
    /// assert!(forest.is_tree());
    /// assert_eq!(forest.edges().len(), 2);
    /// assert_eq!(forest.total_weight(), 5.0);
    /// # Ok::<(), railspan_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.minimum_spanning_forest",
        level = "debug",
        err,
        skip(self),
        fields(nodes = self.node_count(), edges = self.edge_count()),
    )]
    pub fn minimum_spanning_forest(&self) -> Result<MinimumSpanningForest<'_, T>> {
        let edges: Vec<Edge<'_, T>> = self.get_kruskal_iterator()?.collect();
        let total_weight = edges.iter().map(Edge::weight).sum();
        Ok(MinimumSpanningForest {
            edges,
            total_weight,
            node_count: self.node_count(),
        })
    }
}
