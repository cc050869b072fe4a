//! Seeded synthetic station networks.
//!
//! Stations are scattered uniformly over a latitude/longitude box and
//! rendered as `name,id,latitude,longitude` records, so benchmarks exercise
//! the same parsing and graph construction path as real data.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use railspan_core::Graph;
use railspan_providers_stations::{Station, StationError, StationMap};

/// Errors that may occur during synthetic network generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested station count was zero.
    #[error("station count must be greater than zero")]
    ZeroStations,
}

/// Configuration for a synthetic network.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of stations to generate.
    pub station_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Latitude range of the generated box, in degrees.
const LATITUDES: std::ops::Range<f64> = 37.3..38.1;
/// Longitude range of the generated box, in degrees.
const LONGITUDES: std::ops::Range<f64> = -122.6..-121.8;

/// Station records generated from a [`SyntheticConfig`].
///
/// # Examples
///
/// ```
/// use railspan_benches::network::{SyntheticConfig, SyntheticNetwork};
///
/// let config = SyntheticConfig { station_count: 6, seed: 7 };
/// let network = SyntheticNetwork::generate(&config).expect("valid config");
/// let graph = network.graph().expect("records parse");
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 15);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticNetwork {
    records: String,
    station_count: usize,
}

impl SyntheticNetwork {
    /// Generates records eagerly from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroStations`] when `station_count` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.station_count == 0 {
            return Err(SyntheticError::ZeroStations);
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut records = String::new();
        for index in 0..config.station_count {
            let latitude = rng.gen_range(LATITUDES);
            let longitude = rng.gen_range(LONGITUDES);
            records.push_str(&format!(
                "Station {index},S{index},{latitude},{longitude}\n"
            ));
        }
        Ok(Self {
            records,
            station_count: config.station_count,
        })
    }

    /// Number of stations in the network.
    #[must_use]
    pub const fn station_count(&self) -> usize {
        self.station_count
    }

    /// The generated records as text.
    #[must_use]
    pub fn records(&self) -> &str {
        &self.records
    }

    /// Parses the records into a complete station graph.
    ///
    /// # Errors
    ///
    /// Propagates [`StationError`] from the loader.
    pub fn graph(&self) -> Result<Graph<Station>, StationError> {
        Ok(StationMap::from_reader(self.records.as_bytes())?.into_graph())
    }
}
