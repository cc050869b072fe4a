//! Benchmark support crate for railspan.
//!
//! Generates seeded synthetic station networks for the Criterion benchmarks
//! of station-map loading and lazy minimum spanning tree construction.

pub mod error;
pub mod network;
pub mod params;
