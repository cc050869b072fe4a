//! Command implementations and argument parsing for the railspan CLI.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use railspan_core::{Graph, GraphError};
use railspan_providers_stations::{Station, StationError, StationMap, StationMapBuilder};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::highlight::{EdgeHighlighter, HighlightedEdge, RecordingHighlighter};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "railspan",
    about = "Walk the minimum spanning tree of a rail station network."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load stations and report their minimum spanning tree.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Station records, one `name,id,latitude,longitude` per line.
    pub path: PathBuf,

    /// Read at most this many station records.
    #[arg(long)]
    pub limit: Option<NonZeroUsize>,

    /// Milliseconds to wait between spanning tree edges.
    #[arg(long = "pause-ms", default_value_t = 0)]
    pub pause_ms: u64,

    /// Print every spanning tree edge before the summary.
    #[arg(long = "show-edges")]
    pub show_edges: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the station map failed.
    #[error(transparent)]
    Stations(#[from] StationError),
    /// Computing the spanning tree failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Stations(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Distinct stations loaded.
    pub stations: usize,
    /// Spanning tree edges in the order they were produced.
    pub edges: Vec<HighlightedEdge>,
    /// Sum of the edge lengths in miles.
    pub total_miles: f64,
    /// Trees in the resulting spanning forest; 1 for a connected network.
    pub components: usize,
    /// Whether [`render_summary`] lists each edge.
    pub show_edges: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the stations cannot be loaded or the network is
/// empty.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use railspan_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A,1,0.0,0.0\nB,2,0.0,1.0\nC,3,0.0,3.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         limit: None,
///         pause_ms: 0,
///         show_edges: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.stations, 3);
/// assert_eq!(summary.edges.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, limit = field::Empty, pause_ms = command.pause_ms),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        limit,
        pause_ms,
        show_edges,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    if let Some(limit) = limit {
        span.record("limit", limit.get());
    }

    let map = load_station_map(&path, limit)?;
    let mut highlighter = RecordingHighlighter::default();
    let components = walk_spanning_tree(
        map.graph(),
        Duration::from_millis(pause_ms),
        &mut highlighter,
    )?;
    let edges = highlighter.into_edges();
    let total_miles: f64 = edges.iter().map(|edge| edge.miles).sum();

    info!(
        stations = map.station_count(),
        edges = edges.len(),
        total_miles,
        components,
        "spanning tree complete"
    );
    Ok(ExecutionSummary {
        stations: map.station_count(),
        edges,
        total_miles,
        components,
        show_edges,
    })
}

#[instrument(name = "cli.load_stations", err, fields(path = %path.display()))]
pub(super) fn load_station_map(
    path: &Path,
    limit: Option<NonZeroUsize>,
) -> Result<StationMap, CliError> {
    let builder = match limit {
        Some(limit) => StationMapBuilder::new().with_station_limit(limit),
        None => StationMapBuilder::new(),
    };
    Ok(builder.load_path(path)?)
}

/// Pulls spanning tree edges one at a time, waiting `pause` between them,
/// and returns the number of trees in the resulting forest.
pub(super) fn walk_spanning_tree(
    graph: &Graph<Station>,
    pause: Duration,
    highlighter: &mut impl EdgeHighlighter,
) -> Result<usize, GraphError> {
    let mut tree = graph.get_kruskal_iterator()?;
    for (index, edge) in tree.by_ref().enumerate() {
        if index > 0 && !pause.is_zero() {
            thread::sleep(pause);
        }
        highlighter.highlight(&edge);
    }
    Ok(tree.component_count())
}

/// Renders `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use railspan_cli::cli::{ExecutionSummary, HighlightedEdge, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     stations: 2,
///     edges: vec![HighlightedEdge { from: "A".into(), to: "B".into(), miles: 1.5 }],
///     total_miles: 1.5,
///     components: 1,
///     show_edges: false,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "The minimum spanning tree has 1 edges and is 1.50 miles long.\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if summary.show_edges {
        for edge in &summary.edges {
            writeln!(writer, "{}\t{}\t{:.2}", edge.from, edge.to, edge.miles)?;
        }
    }
    writeln!(
        writer,
        "The minimum spanning tree has {} edges and is {:.2} miles long.",
        summary.edges.len(),
        summary.total_miles,
    )?;
    if summary.components > 1 {
        writeln!(
            writer,
            "The stations are not all connected: the result is a spanning forest of {} trees.",
            summary.components,
        )?;
    }
    Ok(())
}
