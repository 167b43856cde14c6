use std::path::PathBuf;

use clap::Parser;

use crate::export::model::ExportFormat;

/// Generate a dependency diagram for a TypeScript/JavaScript project.
///
/// depflow scans the project tree, extracts import/require relationships
/// between files, and writes a Mermaid (or DOT) graph description to stdout
/// for an external viewer. External packages never appear in the diagram;
/// diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(name = "depflow", version, about, long_about = None)]
pub struct Cli {
    /// Path to the project root directory to scan.
    pub path: PathBuf,

    /// Output format for the diagram.
    #[arg(long, value_enum, default_value_t = ExportFormat::Mermaid)]
    pub format: ExportFormat,

    /// Glob patterns to exclude from the scan, beyond .gitignore and the
    /// conventional non-source directories (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Log each discovered file and per-specifier resolution outcome to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a scan summary to stderr after the diagram.
    #[arg(long)]
    pub stats: bool,

    /// With --stats, emit the summary as JSON instead of human-readable text.
    #[arg(long, requires = "stats")]
    pub json: bool,
}
