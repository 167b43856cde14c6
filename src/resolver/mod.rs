pub mod file_resolver;

pub use file_resolver::{ResolutionOutcome, resolve_specifier};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::graph::{DependencyGraph, EdgeOutcome};
use crate::parser::RawImport;

/// Statistics collected during the resolution pass.
#[derive(Debug, Default)]
pub struct ResolveStats {
    /// Imports resolved to a local project file (before edge dedup).
    pub resolved: usize,
    /// Imports classified as external packages and dropped.
    pub external: usize,
    /// Relative or alias imports with no matching file; dropped silently.
    pub not_found: usize,
    /// Resolved imports discarded because source and target were the same file.
    pub self_imports: usize,
    /// Resolved imports collapsed into an already-recorded edge.
    pub duplicates: usize,
}

/// Run the resolution pass over every scanned file, accumulating edges.
///
/// For each extracted import, [`resolve_specifier`] classifies the specifier
/// and resolved targets are offered to the graph, which rejects self-edges
/// and duplicate (from, to) pairs. `scan_results` is ordered (walker order),
/// so edge accumulation (and therefore emission order) is deterministic.
///
/// A target that resolves on disk but was not scanned (it sits under an
/// excluded or ignored directory) gets no edge: the diagram only wires files
/// the walker admitted.
///
/// Unresolvable specifiers are expected (external packages are the common
/// case) and logged at debug level only, never warned about.
pub fn resolve_all(
    graph: &mut DependencyGraph,
    project_root: &Path,
    scan_results: &[(PathBuf, Vec<RawImport>)],
) -> ResolveStats {
    let mut stats = ResolveStats::default();

    let scanned: HashSet<&Path> = scan_results.iter().map(|(path, _)| path.as_path()).collect();

    for (file_path, imports) in scan_results {
        let from_rel = match project_relative(file_path, project_root) {
            Some(rel) => rel,
            None => continue,
        };

        for import in imports {
            match resolve_specifier(project_root, file_path, &import.specifier) {
                ResolutionOutcome::Resolved(target) => {
                    stats.resolved += 1;
                    if !scanned.contains(target.as_path()) {
                        log::debug!(
                            "{from_rel}: '{}' -> {} (not scanned, skipping edge)",
                            import.specifier,
                            target.display()
                        );
                        continue;
                    }
                    let to_rel = match project_relative(&target, project_root) {
                        Some(rel) => rel,
                        None => continue,
                    };
                    match graph.add_import(&from_rel, &to_rel, import.kind, &import.specifier) {
                        EdgeOutcome::Added => {
                            log::debug!("{from_rel}: '{}' -> {to_rel}", import.specifier);
                        }
                        EdgeOutcome::Duplicate => stats.duplicates += 1,
                        EdgeOutcome::SelfEdge => stats.self_imports += 1,
                    }
                }
                ResolutionOutcome::External => {
                    stats.external += 1;
                    log::debug!("{from_rel}: '{}' -> external", import.specifier);
                }
                ResolutionOutcome::NotFound => {
                    stats.not_found += 1;
                    log::debug!("{from_rel}: '{}' -> no matching file", import.specifier);
                }
            }
        }
    }

    stats
}

/// Convert an absolute path inside the project to its root-relative,
/// forward-slash form used for node labels and identifiers.
fn project_relative(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
