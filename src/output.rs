use serde::Serialize;

/// Aggregate statistics produced by a scan run.
#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    /// Source files discovered by the walker.
    pub files_scanned: usize,
    /// Files skipped due to read errors.
    pub files_skipped: usize,
    pub imports_found: usize,
    /// Number of ESM static imports (`import ... from`).
    pub esm_imports: usize,
    /// Number of re-exports (`export ... from`).
    pub reexport_imports: usize,
    /// Number of CommonJS require imports (`require(...)`).
    pub cjs_imports: usize,
    /// Number of dynamic imports (`import(...)`).
    pub dynamic_imports: usize,
    /// Imports resolved to a local project file.
    pub resolved_imports: usize,
    /// Imports classified as external packages (excluded from the diagram).
    pub external_imports: usize,
    /// Relative or alias imports with no matching file on disk.
    pub unresolved_imports: usize,
    /// Resolved imports discarded as self-imports.
    pub self_imports_dropped: usize,
    /// Resolved imports collapsed into an existing edge.
    pub duplicate_edges_dropped: usize,
    /// Nodes in the emitted graph.
    pub nodes: usize,
    /// Edges in the emitted graph.
    pub edges: usize,
    /// Wall-clock time for the run in seconds.
    pub elapsed_secs: f64,
}

/// Print a run summary to stderr.
///
/// stdout carries exactly the diagram text, so the summary goes to the
/// error stream like every other diagnostic.
///
/// - `json = true`: emit a pretty-printed JSON object.
/// - `json = false`: emit a cargo-style human-readable summary.
pub fn print_summary(stats: &ScanStats, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => eprintln!("{s}"),
            Err(e) => eprintln!("error serialising stats: {e}"),
        }
        return;
    }

    eprintln!(
        "Scanned {} files in {:.2}s",
        stats.files_scanned, stats.elapsed_secs
    );
    eprintln!(
        "  {} imports ({} esm, {} re-export, {} cjs, {} dynamic)",
        stats.imports_found,
        stats.esm_imports,
        stats.reexport_imports,
        stats.cjs_imports,
        stats.dynamic_imports,
    );
    eprintln!(
        "  Resolved {} imports ({} external, {} unresolved)",
        stats.resolved_imports, stats.external_imports, stats.unresolved_imports,
    );
    eprintln!(
        "  Emitted {} nodes, {} edges ({} duplicates, {} self-imports dropped)",
        stats.nodes, stats.edges, stats.duplicate_edges_dropped, stats.self_imports_dropped,
    );

    if stats.files_skipped > 0 {
        eprintln!("  {} files skipped (read errors)", stats.files_skipped);
    }
}
