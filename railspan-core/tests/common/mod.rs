//! Shared fixtures for railspan-core integration tests.

use std::hash::{Hash, Hasher};

use railspan_core::Graph;

/// Town keyed by name alone; population is payload.
#[derive(Clone, Debug)]
pub struct Town {
    pub name: &'static str,
    pub population: u32,
}

impl Town {
    pub const fn new(name: &'static str, population: u32) -> Self {
        Self { name, population }
    }
}

impl PartialEq for Town {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Town {}

impl Hash for Town {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Four towns on a line with a long shortcut and a medium diagonal.
pub fn four_towns() -> Graph<Town> {
    let towns = [
        Town::new("Ashby", 1_200),
        Town::new("Brill", 860),
        Town::new("Crewe", 71_000),
        Town::new("Deal", 30_000),
    ];
    let mut graph = Graph::new();
    for town in &towns {
        graph.add_node(town.clone());
    }
    let [a, b, c, d] = &towns;
    for (left, right, weight) in [(a, b, 1.0), (b, c, 2.0), (c, d, 3.0), (a, d, 10.0), (a, c, 5.0)] {
        graph
            .add_edge(left, right, weight)
            .expect("fixture edges are valid");
    }
    graph
}
