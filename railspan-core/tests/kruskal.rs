//! Public-API tests for lazy minimum spanning tree construction.

mod common;

use common::{Town, four_towns};
use railspan_core::{Graph, GraphErrorKind, KruskalState};
use railspan_test_support::tracing::{RecordingLayer, with_recording};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn towns() -> Graph<Town> {
    four_towns()
}

#[rstest]
fn yields_tree_edges_in_weight_order(towns: Graph<Town>) {
    let names: Vec<(&str, &str, f64)> = towns
        .get_kruskal_iterator()
        .expect("graph has nodes")
        .map(|edge| (edge.source().name, edge.target().name, edge.weight()))
        .collect();
    assert_eq!(names, [
        ("Ashby", "Brill", 1.0),
        ("Brill", "Crewe", 2.0),
        ("Crewe", "Deal", 3.0),
    ]);
}

#[rstest]
fn node_identity_ignores_payload(mut towns: Graph<Town>) {
    let id = towns.add_node(Town::new("Ashby", 0));
    assert_eq!(towns.node_count(), 4);
    let stored = towns.node(id).expect("Ashby is stored");
    assert_eq!(stored.population, 1_200);

    let err = towns
        .add_edge(&Town::new("Brill", 0), &Town::new("Ashby", 1), 4.0)
        .expect_err("pair already joined");
    assert_eq!(err.kind(), GraphErrorKind::DuplicateEdge);
}

#[rstest]
fn forest_summarises_the_tree(towns: Graph<Town>) {
    let forest = towns.minimum_spanning_forest().expect("graph has nodes");
    assert!(forest.is_tree());
    assert_eq!(forest.edges().len(), 3);
    assert_eq!(forest.total_weight(), 6.0);
    assert_eq!(forest.component_count(), 1);
}

#[rstest]
fn consumer_can_stop_between_edges(towns: Graph<Town>) {
    let mut mst = towns.get_kruskal_iterator().expect("graph has nodes");
    let first = mst.next().expect("one edge at least");
    assert!(first.connects(&Town::new("Ashby", 0), &Town::new("Brill", 0)));
    assert_eq!(mst.state(), KruskalState::Active);
    assert_eq!(mst.edges_examined(), 1);
    drop(mst);

    let fresh: Vec<_> = towns
        .get_kruskal_iterator()
        .expect("graph has nodes")
        .collect();
    assert_eq!(fresh.len(), 3);
}

#[test]
fn empty_graph_is_rejected() {
    let graph: Graph<Town> = Graph::new();
    let err = graph
        .get_kruskal_iterator()
        .expect_err("no nodes to span");
    assert_eq!(err.kind(), GraphErrorKind::EmptyGraph);
}

#[rstest]
fn preparation_is_traced_once_on_first_pull(towns: Graph<Town>) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        let mut mst = towns.get_kruskal_iterator().expect("graph has nodes");
        assert!(layer.spans().is_empty(), "creation must not prepare");
        assert_eq!(mst.by_ref().count(), 3);
        assert!(mst.next().is_none());
        assert_eq!(mst.edges_examined(), 3);
    });

    let prepares: Vec<_> = layer
        .spans()
        .into_iter()
        .filter(|span| span.name == "kruskal.prepare")
        .collect();
    assert_eq!(prepares.len(), 1);
    let prepare = prepares.first().expect("one prepare span");
    assert_eq!(prepare.fields.get("nodes").map(String::as_str), Some("4"));
    assert_eq!(prepare.fields.get("edges").map(String::as_str), Some("5"));

    let admitted = layer.events_with_message("edge admitted");
    assert_eq!(admitted.len(), 3);
    assert!(admitted.iter().all(|event| event.level == Level::TRACE));
    assert!(
        layer
            .events_with_message("edge rejected: closes a cycle")
            .is_empty(),
        "the scan stops once the tree is complete"
    );

    let exhausted = layer.events_with_message("kruskal sequence exhausted");
    assert_eq!(exhausted.len(), 1);
    let summary = exhausted.first().expect("one summary event");
    assert_eq!(summary.level, Level::DEBUG);
    assert_eq!(summary.field("yielded"), Some("3"));
    assert_eq!(summary.field("components"), Some("1"));
}

#[test]
fn cycle_rejections_are_traced() {
    let mut graph = Graph::new();
    for name in ["a", "b", "c", "d"] {
        graph.add_node(name);
    }
    for (left, right, weight) in [("a", "b", 1.0), ("b", "c", 1.0), ("a", "c", 1.0), ("c", "d", 2.0)] {
        graph.add_edge(&left, &right, weight).expect("valid edge");
    }

    let (count, layer) = with_recording(|| graph.get_kruskal_iterator().map(Iterator::count));
    assert_eq!(count, Ok(3));
    let rejected = layer.events_with_message("edge rejected: closes a cycle");
    assert_eq!(rejected.len(), 1);
    let edge = rejected.first().and_then(|event| event.field("edge"));
    assert_eq!(edge, Some("e2"));
}
