//! Command-line interface for walking a station network's minimum spanning
//! tree one connection at a time.

mod commands;
mod highlight;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
pub use highlight::{EdgeHighlighter, HighlightedEdge, RecordingHighlighter};
