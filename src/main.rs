mod cli;
mod error;
mod export;
mod graph;
mod output;
mod parser;
mod resolver;
mod walker;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use error::ScanError;
use graph::DependencyGraph;
use output::{ScanStats, print_summary};
use parser::{ImportKind, ImportScanner, LexicalScanner, RawImport};
use walker::walk_project;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings are visible by default; -v raises to debug. RUST_LOG still
    // wins when set, and logging never touches stdout.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let start = Instant::now();
    let mut stats = ScanStats::default();

    // Canonicalize up front so resolution probing and relative labels share
    // one absolute root, whatever form the user passed.
    let root = cli
        .path
        .canonicalize()
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| ScanError::RootNotFound(cli.path.clone()))?;

    let files = walk_project(&root, &cli.exclude)?;
    stats.files_scanned = files.len();

    // Read and scan each file. Unreadable files are skipped with a warning;
    // the rest of the project still produces a diagram.
    let scanner = LexicalScanner;
    let mut scan_results: Vec<(PathBuf, Vec<RawImport>)> = Vec::with_capacity(files.len());
    for file in files {
        let text = match std::fs::read_to_string(&file) {
            Ok(t) => t,
            Err(source) => {
                let err = ScanError::FileRead { path: file, source };
                log::warn!("{err}; skipping");
                stats.files_skipped += 1;
                continue;
            }
        };

        let imports = scanner.scan(&text);
        for import in &imports {
            stats.imports_found += 1;
            match import.kind {
                ImportKind::Esm => stats.esm_imports += 1,
                ImportKind::ReExport => stats.reexport_imports += 1,
                ImportKind::Cjs => stats.cjs_imports += 1,
                ImportKind::Dynamic => stats.dynamic_imports += 1,
            }
        }
        scan_results.push((file, imports));
    }

    let mut graph = DependencyGraph::new();
    let resolve_stats = resolver::resolve_all(&mut graph, &root, &scan_results);

    stats.resolved_imports = resolve_stats.resolved;
    stats.external_imports = resolve_stats.external;
    stats.unresolved_imports = resolve_stats.not_found;
    stats.self_imports_dropped = resolve_stats.self_imports;
    stats.duplicate_edges_dropped = resolve_stats.duplicates;
    stats.nodes = graph.node_count();
    stats.edges = graph.edge_count();
    stats.elapsed_secs = start.elapsed().as_secs_f64();

    let content = export::export_graph(&graph, cli.format);
    print!("{content}");

    if cli.stats {
        print_summary(&stats, cli.json);
    }

    Ok(())
}
