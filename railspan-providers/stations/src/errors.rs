use std::{io, path::PathBuf};

use railspan_core::GraphError;
use thiserror::Error;

/// Errors raised while loading a station map.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StationError {
    /// The station file could not be opened.
    #[error("failed to open station data `{}`: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the source failed.
    #[error("failed to read station data at line {line}: {source}")]
    Read {
        /// One-based line number being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A record did not have exactly four comma-separated fields.
    #[error("line {line}: expected 4 comma-separated fields but found {found}")]
    MalformedRecord {
        /// One-based line number of the record.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A coordinate field was not a finite decimal number.
    #[error("line {line}: {field} `{value}` is not a finite number")]
    InvalidCoordinate {
        /// One-based line number of the record.
        line: usize,
        /// Either `latitude` or `longitude`.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// Building the graph rejected a station or connection.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

/// Stable, machine-readable codes for [`StationError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StationErrorCode {
    /// See [`StationError::Open`].
    Open,
    /// See [`StationError::Read`].
    Read,
    /// See [`StationError::MalformedRecord`].
    MalformedRecord,
    /// See [`StationError::InvalidCoordinate`].
    InvalidCoordinate,
    /// See [`StationError::Graph`].
    Graph,
}

impl StationErrorCode {
    /// Returns the code as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "STATIONS_OPEN",
            Self::Read => "STATIONS_READ",
            Self::MalformedRecord => "STATIONS_MALFORMED_RECORD",
            Self::InvalidCoordinate => "STATIONS_INVALID_COORDINATE",
            Self::Graph => "STATIONS_GRAPH",
        }
    }
}

impl std::fmt::Display for StationErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StationError {
    /// Returns the stable code for this error.
    #[must_use]
    pub const fn code(&self) -> StationErrorCode {
        match self {
            Self::Open { .. } => StationErrorCode::Open,
            Self::Read { .. } => StationErrorCode::Read,
            Self::MalformedRecord { .. } => StationErrorCode::MalformedRecord,
            Self::InvalidCoordinate { .. } => StationErrorCode::InvalidCoordinate,
            Self::Graph(_) => StationErrorCode::Graph,
        }
    }
}
