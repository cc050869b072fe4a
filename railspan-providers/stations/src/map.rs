//! Station map construction.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::NonZeroUsize,
    path::Path,
};

use railspan_core::{Graph, NodeId};
use tracing::{debug, instrument, trace};

use crate::{Station, StationError, great_circle_miles};

const FIELD_COUNT: usize = 4;
const NAME_FIELD: usize = 0;
const LATITUDE_FIELD: usize = 2;
const LONGITUDE_FIELD: usize = 3;

/// Loading options for a [`StationMap`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StationMapConfig {
    /// Maximum number of records to read; `None` reads every record.
    pub station_limit: Option<NonZeroUsize>,
}

/// Builder for [`StationMapConfig`].
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use railspan_providers_stations::StationMapBuilder;
///
/// let limit = NonZeroUsize::new(2).expect("non-zero");
/// let map = StationMapBuilder::new()
///     .with_station_limit(limit)
///     .load_reader("A,1,0.0,0.0\nB,2,0.0,1.0\nC,3,1.0,1.0\n".as_bytes())?;
/// assert_eq!(map.station_count(), 2);
/// assert_eq!(map.graph().edge_count(), 1);
/// # Ok::<(), railspan_providers_stations::StationError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StationMapBuilder {
    config: StationMapConfig,
}

impl StationMapBuilder {
    /// Starts from the default configuration (no limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads at most `limit` records.
    #[must_use]
    pub fn with_station_limit(mut self, limit: NonZeroUsize) -> Self {
        self.config.station_limit = Some(limit);
        self
    }

    /// Returns the accumulated configuration.
    #[must_use]
    pub fn build(self) -> StationMapConfig {
        self.config
    }

    /// Loads a map from `reader` with this configuration.
    ///
    /// # Errors
    /// See [`StationMap::from_reader_with`].
    pub fn load_reader(self, reader: impl BufRead) -> Result<StationMap, StationError> {
        StationMap::from_reader_with(reader, self.config)
    }

    /// Loads a map from the file at `path` with this configuration.
    ///
    /// # Errors
    /// See [`StationMap::from_path_with`].
    pub fn load_path(self, path: impl AsRef<Path>) -> Result<StationMap, StationError> {
        StationMap::from_path_with(path, self.config)
    }
}

/// Complete graph of stations weighted by great-circle miles.
#[derive(Debug)]
pub struct StationMap {
    graph: Graph<Station>,
    config: StationMapConfig,
}

impl StationMap {
    /// Loads every record from `reader`.
    ///
    /// # Errors
    /// See [`StationMap::from_reader_with`].
    pub fn from_reader(reader: impl BufRead) -> Result<Self, StationError> {
        Self::from_reader_with(reader, StationMapConfig::default())
    }

    /// Loads every record from the file at `path`.
    ///
    /// # Errors
    /// See [`StationMap::from_path_with`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StationError> {
        Self::from_path_with(path, StationMapConfig::default())
    }

    /// Opens `path` and loads it with `config`.
    ///
    /// # Errors
    /// Returns [`StationError::Open`] when the file cannot be opened, and
    /// otherwise the errors of [`StationMap::from_reader_with`].
    pub fn from_path_with(
        path: impl AsRef<Path>,
        config: StationMapConfig,
    ) -> Result<Self, StationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StationError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader_with(BufReader::new(file), config)
    }

    /// Parses `name,id,latitude,longitude` records from `reader`, adds each
    /// station as a node and joins every pair of distinct stations with an
    /// edge weighted by [`great_circle_miles`].
    ///
    /// Blank lines are skipped and do not count towards the station limit.
    /// A repeated station name keeps the first record.
    ///
    /// # Errors
    /// Returns [`StationError::Read`], [`StationError::MalformedRecord`] or
    /// [`StationError::InvalidCoordinate`] for the first bad line, and
    /// [`StationError::Graph`] if the graph rejects a connection.
    #[instrument(
        name = "stations.load",
        level = "debug",
        skip(reader),
        fields(limit = config.station_limit.map(NonZeroUsize::get)),
        err,
    )]
    pub fn from_reader_with(
        reader: impl BufRead,
        config: StationMapConfig,
    ) -> Result<Self, StationError> {
        let stations = read_stations(reader, config.station_limit)?;
        let mut graph = Graph::with_capacity(stations.len(), pair_count(stations.len()));
        for station in stations {
            let name = station.name().to_owned();
            let before = graph.node_count();
            let id = graph.add_node(station);
            if graph.node_count() == before {
                debug!(station = %name, %id, "duplicate station name; keeping first record");
            }
        }

        connect_all_pairs(&mut graph)?;
        debug!(
            stations = graph.node_count(),
            connections = graph.edge_count(),
            "station map built"
        );
        Ok(Self { graph, config })
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<Station> {
        &self.graph
    }

    /// Consumes the map and returns its graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<Station> {
        self.graph
    }

    /// Number of distinct stations loaded.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Configuration the map was loaded with.
    #[must_use]
    pub fn config(&self) -> StationMapConfig {
        self.config
    }
}

fn read_stations(
    reader: impl BufRead,
    limit: Option<NonZeroUsize>,
) -> Result<Vec<Station>, StationError> {
    let mut stations = Vec::new();
    let mut lines = reader.lines().enumerate();
    loop {
        if limit.is_some_and(|limit| stations.len() >= limit.get()) {
            trace!(limit = ?limit, "station limit reached");
            break;
        }
        let Some((index, line)) = lines.next() else {
            break;
        };
        let line_number = index.saturating_add(1);
        let line = line.map_err(|source| StationError::Read {
            line: line_number,
            source,
        })?;
        if let Some(station) = parse_record(line_number, &line)? {
            stations.push(station);
        }
    }
    Ok(stations)
}

fn parse_record(line: usize, raw: &str) -> Result<Option<Station>, StationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StationError::MalformedRecord {
            line,
            found: fields.len(),
        });
    }
    let field = |index: usize| fields.get(index).copied().unwrap_or_default();
    let latitude = parse_coordinate(line, "latitude", field(LATITUDE_FIELD))?;
    let longitude = parse_coordinate(line, "longitude", field(LONGITUDE_FIELD))?;
    Ok(Some(Station::new(field(NAME_FIELD), latitude, longitude)))
}

fn parse_coordinate(line: usize, field: &'static str, value: &str) -> Result<f64, StationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| StationError::InvalidCoordinate {
            line,
            field,
            value: value.to_owned(),
        })
}

fn connect_all_pairs(graph: &mut Graph<Station>) -> Result<(), StationError> {
    let stations: Vec<Station> = graph.nodes().cloned().collect();
    for (left, from) in stations.iter().enumerate() {
        for (offset, to) in stations.iter().skip(left.saturating_add(1)).enumerate() {
            let right = left.saturating_add(1).saturating_add(offset);
            graph.add_edge_by_id(
                NodeId::new(left),
                NodeId::new(right),
                great_circle_miles(from, to),
            )?;
        }
    }
    Ok(())
}

fn pair_count(nodes: usize) -> usize {
    nodes.saturating_mul(nodes.saturating_sub(1)) / 2
}
