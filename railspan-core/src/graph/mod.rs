//! Weighted undirected graph storage.
//!
//! [`Graph`] owns its nodes and edges and hands out borrowed views. Every
//! undirected relationship is stored once; self-edges, malformed weights and
//! repeated pairs are rejected when the edge is added.

mod edge;

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use tracing::{debug, trace};

use crate::{
    error::{GraphError, Result},
    id::{EdgeId, NodeId},
    kruskal::KruskalIter,
};

pub use self::edge::Edge;
pub(crate) use self::edge::{EdgeRecord, canonical_pair};

/// Capability contract for values stored as graph nodes.
///
/// Node identity is defined by `Eq` and `Hash`: two values that compare equal
/// are the same node. Types whose identity is a subset of their fields (for
/// example a station identified by name) implement those traits by hand.
/// `Debug` is used to describe nodes in errors and diagnostics.
pub trait GraphNode: Eq + Hash + Clone + fmt::Debug {}

impl<T> GraphNode for T where T: Eq + Hash + Clone + fmt::Debug {}

/// A weighted undirected graph over caller-supplied node values.
///
/// # Examples
/// ```
/// use railspan_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_node("a");
/// graph.add_node("b");
/// graph.add_node("c");
/// graph.add_edge(&"a", &"b", 1.0)?;
/// graph.add_edge(&"b", &"c", 2.0)?;
/// graph.add_edge(&"a", &"c", 5.0)?;
///
/// let total: f64 = graph.get_kruskal_iterator()?.map(|edge| edge.weight()).sum();
/// assert_eq!(total, 3.0);
/// # Ok::<(), railspan_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<T> {
    nodes: Vec<T>,
    index: HashMap<T, NodeId>,
    edges: Vec<EdgeRecord>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            pairs: HashSet::new(),
        }
    }
}

impl<T: GraphNode> Graph<T> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            pairs: HashSet::with_capacity(edges),
        }
    }

    /// Inserts `value` and returns its id.
    ///
    /// Adding a value equal to an existing node is a no-op that returns the
    /// existing id, so the same logical node never gains two identities.
    ///
    /// # Examples
    /// ```
    /// use railspan_core::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let first = graph.add_node("powell");
    /// let again = graph.add_node("powell");
    /// assert_eq!(first, again);
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn add_node(&mut self, value: T) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            trace!(node = ?value, %id, "node already present");
            return id;
        }

        let id = NodeId::new(self.nodes.len());
        self.index.insert(value.clone(), id);
        self.nodes.push(value);
        id
    }

    /// Inserts an undirected edge between two existing nodes.
    ///
    /// Checks run in this order: self-edge, missing endpoints (`left` first),
    /// weight validity, then duplicate pair. A pair may carry at most one
    /// edge; inserting it again in either orientation is rejected rather than
    /// merged, so the graph never depends on which weight arrived last.
    ///
    /// # Errors
    /// - [`GraphError::SelfEdge`] when `left == right`.
    /// - [`GraphError::NodeNotFound`] when either endpoint is absent.
    /// - [`GraphError::InvalidWeight`] when `weight` is negative, NaN, or
    ///   infinite.
    /// - [`GraphError::DuplicateEdge`] when the unordered pair already has an
    ///   edge.
    pub fn add_edge(&mut self, left: &T, right: &T, weight: f64) -> Result<EdgeId> {
        if left == right {
            return Err(GraphError::self_edge(left));
        }

        let left_id = self
            .node_id(left)
            .ok_or_else(|| GraphError::node_not_found(left))?;
        let right_id = self
            .node_id(right)
            .ok_or_else(|| GraphError::node_not_found(right))?;

        self.insert_edge(left_id, right_id, weight)
    }

    /// Inserts an undirected edge between two node ids.
    ///
    /// Behaves like [`Graph::add_edge`], addressing endpoints by the ids
    /// returned from [`Graph::add_node`].
    ///
    /// # Errors
    /// Returns the same errors as [`Graph::add_edge`]; unknown ids are
    /// reported as [`GraphError::NodeNotFound`].
    pub fn add_edge_by_id(&mut self, left: NodeId, right: NodeId, weight: f64) -> Result<EdgeId> {
        if left == right {
            return Err(match self.node(left) {
                Some(value) => GraphError::self_edge(value),
                None => GraphError::self_edge(&left),
            });
        }
        for id in [left, right] {
            if self.node(id).is_none() {
                return Err(GraphError::node_not_found(&id));
            }
        }

        self.insert_edge(left, right, weight)
    }

    fn insert_edge(&mut self, left: NodeId, right: NodeId, weight: f64) -> Result<EdgeId> {
        if !is_valid_weight(weight) {
            return Err(GraphError::invalid_weight(
                self.describe(left),
                self.describe(right),
                weight,
            ));
        }

        if !self.pairs.insert(canonical_pair(left, right)) {
            debug!(%left, %right, "rejected duplicate edge");
            return Err(GraphError::duplicate_edge(
                self.describe(left),
                self.describe(right),
            ));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeRecord::new(left, right, weight));
        trace!(edge = %id, %left, %right, weight, "edge added");
        Ok(id)
    }

    fn describe(&self, id: NodeId) -> &dyn fmt::Debug {
        match self.node(id) {
            Some(value) => value,
            None => &NOT_A_NODE,
        }
    }

    /// Returns a fresh minimum spanning tree iterator over the current
    /// contents of the graph.
    ///
    /// The iterator borrows the graph, so the graph cannot change while it
    /// is being consumed. A graph with nodes but too few edges to connect
    /// them is valid: the iterator yields a spanning forest with fewer than
    /// `node_count - 1` edges.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the graph has no nodes.
    pub fn get_kruskal_iterator(&self) -> Result<KruskalIter<'_, T>> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        Ok(KruskalIter::new(self))
    }

    /// Returns the id of `value` when it is a node of this graph.
    #[must_use]
    pub fn node_id(&self, value: &T) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    /// Returns `true` when `value` is a node of this graph.
    #[must_use]
    pub fn contains_node(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns `true` when an edge joins `left` and `right` in either order.
    #[must_use]
    pub fn contains_edge(&self, left: &T, right: &T) -> bool {
        match (self.node_id(left), self.node_id(right)) {
            (Some(left), Some(right)) => self.pairs.contains(&canonical_pair(left, right)),
            _ => false,
        }
    }
}

impl<T> Graph<T> {
    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index())
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.nodes.iter()
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge<'_, T>> {
        let record = *self.edges.get(id.index())?;
        self.view(id, record)
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(index, record)| self.view(EdgeId::new(index), *record))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn edge_records(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub(crate) fn view(&self, id: EdgeId, record: EdgeRecord) -> Option<Edge<'_, T>> {
        let source = self.node(record.source)?;
        let target = self.node(record.target)?;
        Some(Edge::new(id, record, source, target))
    }
}

const NOT_A_NODE: &str = "<unknown node>";

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
