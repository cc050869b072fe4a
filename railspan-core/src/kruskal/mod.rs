//! Lazy minimum spanning tree construction using Kruskal's algorithm.
//!
//! [`KruskalIter`] yields minimum spanning tree edges one at a time. Each call
//! to `next` advances a cursor through the globally sorted edge list and
//! returns the next edge that joins two separate components, so a consumer
//! can pause, render, or stop between edges without the algorithm knowing.
//!
//! Edges are ordered by ascending weight (`f64::total_cmp`). Equal weights are
//! ordered by insertion, earliest first, which keeps the sequence identical
//! across runs on the same graph.

use std::iter::FusedIterator;

use tracing::{debug, error, instrument, trace};

use crate::{
    disjoint_set::DisjointSet,
    graph::{Edge, EdgeRecord, Graph},
    id::EdgeId,
};

/// Lifecycle of a [`KruskalIter`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KruskalState {
    /// Created, nothing computed yet.
    Ready,
    /// Sorted edges and components are prepared and edges are being produced.
    Active,
    /// Terminal: every further pull returns `None`.
    Exhausted,
}

/// Single-pass iterator over the edges of a minimum spanning tree (or forest).
///
/// Obtain one from [`Graph::get_kruskal_iterator`]. The iterator borrows the
/// graph immutably for its whole lifetime and owns its own sorted edge order
/// and [`DisjointSet`]; separate iterators share no state. It is not
/// restartable: request a new iterator to compute the tree again.
///
/// The sequence ends after `node_count - 1` edges or when the sorted edges run
/// out, whichever comes first. A disconnected graph therefore yields a
/// spanning forest with fewer than `node_count - 1` edges; that is not an
/// error, and [`KruskalIter::component_count`] reports how many trees it has.
///
/// # Examples
/// ```
/// use railspan_core::{Graph, KruskalState};
///
/// let mut graph = Graph::new();
/// for name in ["a", "b", "c", "d"] {
///     graph.add_node(name);
/// }
/// graph.add_edge(&"a", &"b", 1.0)?;
/// graph.add_edge(&"c", &"d", 1.0)?;
///
/// let mut mst = graph.get_kruskal_iterator()?;
/// assert_eq!(mst.state(), KruskalState::Ready);
/// let first = mst.next().expect("a-b is admitted");
/// assert_eq!(first.endpoints(), (&"a", &"b"));
/// assert_eq!(mst.state(), KruskalState::Active);
/// assert!(mst.next().is_some());
/// assert!(mst.next().is_none());
/// assert_eq!(mst.state(), KruskalState::Exhausted);
/// assert_eq!(mst.component_count(), 2);
/// # Ok::<(), railspan_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct KruskalIter<'g, T> {
    graph: &'g Graph<T>,
    state: KruskalState,
    scan: Option<Scan>,
    yielded: usize,
    examined: usize,
}

#[derive(Debug)]
struct Scan {
    order: Vec<usize>,
    cursor: usize,
    components: DisjointSet,
}

impl<'g, T> KruskalIter<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>) -> Self {
        Self {
            graph,
            state: KruskalState::Ready,
            scan: None,
            yielded: 0,
            examined: 0,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> KruskalState {
        self.state
    }

    /// Returns the number of edges produced so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_yielded(&self) -> usize { self.yielded }

    /// Returns the number of sorted edges inspected so far, admitted or not.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_examined(&self) -> usize { self.examined }

    /// Returns the edge count of a spanning tree over the graph,
    /// `node_count - 1`.
    #[must_use]
    pub fn target_edge_count(&self) -> usize {
        self.graph.node_count().saturating_sub(1)
    }

    /// Returns the number of components formed by the edges yielded so far.
    ///
    /// Each admitted edge merges two components, so this starts at the node
    /// count and falls by one per yielded edge. Once the iterator is
    /// exhausted it is the number of trees in the spanning forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.graph.node_count().saturating_sub(self.yielded)
    }

    fn finish(&mut self) {
        if self.state != KruskalState::Exhausted {
            debug!(
                yielded = self.yielded,
                examined = self.examined,
                components = self.component_count(),
                "kruskal sequence exhausted"
            );
        }
        self.state = KruskalState::Exhausted;
        self.scan = None;
    }
}

impl<'g, T> Iterator for KruskalIter<'g, T> {
    type Item = Edge<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == KruskalState::Exhausted {
            return None;
        }

        let graph = self.graph;
        let target = self.target_edge_count();
        let scan = self.scan.get_or_insert_with(|| prepare_scan(graph));
        self.state = KruskalState::Active;

        while self.yielded < target {
            let Some(&index) = scan.order.get(scan.cursor) else {
                break;
            };
            scan.cursor = scan.cursor.saturating_add(1);
            self.examined = self.examined.saturating_add(1);

            let Some(&record) = graph.edge_records().get(index) else {
                break;
            };
            let id = EdgeId::new(index);

            match scan.components.union(record.source, record.target) {
                Ok(true) => {
                    let Some(edge) = graph.view(id, record) else {
                        error!(
                            edge = %id,
                            source = %record.source,
                            target = %record.target,
                            "edge endpoint missing from graph; ending minimum spanning tree sequence"
                        );
                        break;
                    };
                    self.yielded = self.yielded.saturating_add(1);
                    trace!(edge = %id, weight = record.weight, "edge admitted");
                    return Some(edge);
                }
                Ok(false) => {
                    trace!(edge = %id, weight = record.weight, "edge rejected: closes a cycle");
                }
                Err(err) => {
                    error!(
                        error = %err,
                        code = %err.code(),
                        edge = %id,
                        "component lookup failed; ending minimum spanning tree sequence"
                    );
                    break;
                }
            }
        }

        self.finish();
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state == KruskalState::Exhausted {
            return (0, Some(0));
        }
        let remaining_edges = self.graph.edge_count().saturating_sub(self.examined);
        let remaining_needed = self.target_edge_count().saturating_sub(self.yielded);
        (0, Some(remaining_edges.min(remaining_needed)))
    }
}

impl<T> FusedIterator for KruskalIter<'_, T> {}

#[instrument(
    name = "kruskal.prepare",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
fn prepare_scan<T>(graph: &Graph<T>) -> Scan {
    Scan {
        order: sorted_edge_order(graph.edge_records()),
        cursor: 0,
        components: DisjointSet::with_singletons(graph.node_count()),
    }
}

/// Returns edge indices ordered by `(weight, insertion index)`.
fn sorted_edge_order(records: &[EdgeRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_unstable_by(|&left, &right| {
        records[left]
            .weight
            .total_cmp(&records[right].weight)
            .then_with(|| left.cmp(&right))
    });
    order
}

#[cfg(test)]
mod property;
