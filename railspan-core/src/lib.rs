//! Railspan core library.
//!
//! A weighted undirected graph whose minimum spanning tree is produced
//! lazily, one edge per pull, by Kruskal's algorithm over a union-find.

mod disjoint_set;
mod error;
mod forest;
mod graph;
mod id;
mod kruskal;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, GraphErrorKind, Result,
    },
    forest::MinimumSpanningForest,
    graph::{Edge, Graph, GraphNode},
    id::{EdgeId, NodeId},
    kruskal::{KruskalIter, KruskalState},
};
