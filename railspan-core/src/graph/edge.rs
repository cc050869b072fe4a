//! Undirected weighted edges.

use crate::id::{EdgeId, NodeId};

/// Compact edge storage owned by [`crate::Graph`].
///
/// Endpoints are canonicalised so that `source < target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EdgeRecord {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) weight: f64,
}

impl EdgeRecord {
    pub(crate) fn new(left: NodeId, right: NodeId, weight: f64) -> Self {
        let (source, target) = canonical_pair(left, right);
        Self {
            source,
            target,
            weight,
        }
    }
}

pub(crate) fn canonical_pair(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}

/// A borrowed view of an undirected edge in a [`crate::Graph`].
///
/// `source` is always the endpoint that was added to the graph first; the
/// orientation carries no meaning beyond that.
#[derive(Debug, PartialEq)]
pub struct Edge<'g, T> {
    id: EdgeId,
    source_id: NodeId,
    target_id: NodeId,
    source: &'g T,
    target: &'g T,
    weight: f64,
}

impl<T> Clone for Edge<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Edge<'_, T> {}

impl<'g, T> Edge<'g, T> {
    pub(crate) fn new(id: EdgeId, record: EdgeRecord, source: &'g T, target: &'g T) -> Self {
        Self {
            id,
            source_id: record.source,
            target_id: record.target,
            source,
            target,
            weight: record.weight,
        }
    }

    /// Returns the edge id, which is also its insertion position.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> EdgeId { self.id }

    /// Returns the endpoint added to the graph first.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &'g T { self.source }

    /// Returns the endpoint added to the graph second.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &'g T { self.target }

    /// Returns the id of [`Edge::source`].
    #[must_use]
    #[rustfmt::skip]
    pub fn source_id(&self) -> NodeId { self.source_id }

    /// Returns the id of [`Edge::target`].
    #[must_use]
    #[rustfmt::skip]
    pub fn target_id(&self) -> NodeId { self.target_id }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub fn endpoints(&self) -> (&'g T, &'g T) {
        (self.source, self.target)
    }

    /// Returns `true` when the edge joins `left` and `right` in either order.
    #[must_use]
    pub fn connects(&self, left: &T, right: &T) -> bool
    where
        T: PartialEq,
    {
        (self.source == left && self.target == right)
            || (self.source == right && self.target == left)
    }
}
