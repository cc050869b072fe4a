//! Benchmark parameter labels.

use std::fmt;

/// Parameters for a station network benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct NetworkBenchParams {
    /// Number of stations in the network.
    pub station_count: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stations={}", self.station_count)
    }
}
