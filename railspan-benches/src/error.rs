//! Benchmark setup error type.

use railspan_core::GraphError;
use railspan_providers_stations::StationError;

use crate::network::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation was misconfigured.
    #[error("synthetic network generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Loading the generated records failed.
    #[error("station map construction failed: {0}")]
    Stations(#[from] StationError),
    /// Spanning tree construction failed.
    #[error("spanning tree construction failed: {0}")]
    Graph(#[from] GraphError),
}
