//! Consumers that react to each minimum spanning tree edge as it arrives.

use railspan_core::Edge;
use railspan_providers_stations::Station;
use tracing::debug;

/// Receives spanning tree edges in the order they are produced.
///
/// A graphical front end would draw the connection; the CLI records it.
pub trait EdgeHighlighter {
    /// Called once per admitted edge.
    fn highlight(&mut self, edge: &Edge<'_, Station>);
}

/// A connection between two stations, detached from the graph borrow.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightedEdge {
    /// Station with the lower node id.
    pub from: String,
    /// Station with the higher node id.
    pub to: String,
    /// Great-circle length of the connection.
    pub miles: f64,
}

/// Highlighter that keeps every edge it sees.
#[derive(Clone, Debug, Default)]
pub struct RecordingHighlighter {
    edges: Vec<HighlightedEdge>,
}

impl RecordingHighlighter {
    /// Edges seen so far, in arrival order.
    #[must_use]
    pub fn edges(&self) -> &[HighlightedEdge] {
        &self.edges
    }

    /// Consumes the highlighter and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<HighlightedEdge> {
        self.edges
    }
}

impl EdgeHighlighter for RecordingHighlighter {
    fn highlight(&mut self, edge: &Edge<'_, Station>) {
        debug!(
            from = edge.source().name(),
            to = edge.target().name(),
            miles = edge.weight(),
            "connection highlighted"
        );
        self.edges.push(HighlightedEdge {
            from: edge.source().name().to_owned(),
            to: edge.target().name().to_owned(),
            miles: edge.weight(),
        });
    }
}
