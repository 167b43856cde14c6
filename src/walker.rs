use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Source file extensions that depflow scans. The order doubles as the
/// resolver's probing precedence (TypeScript before JavaScript).
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Directories never scanned regardless of ignore rules: the dependency
/// cache plus conventional build-output directories.
const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", "coverage"];

/// Walk a project directory and collect source files.
///
/// Respects `.gitignore` rules, always excludes `node_modules` and the other
/// conventional non-source directories, and applies any additional glob
/// patterns from `exclude`. Version-control metadata directories are hidden
/// and therefore skipped by the standard filters.
///
/// The result is sorted by path: directory iteration order is
/// filesystem-dependent, and downstream discovery order must be stable for
/// re-runs on an unchanged project to produce byte-identical output.
pub fn walk_project(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(true)
        // Read .gitignore files even when the directory is not inside a git
        // repository, so exclusions work for standalone trees and fixtures.
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                log::warn!("walk: {err}");
                continue;
            }
        };

        let path = entry.path();

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        if path_contains_excluded_dir(path) {
            continue;
        }

        if is_excluded_by_patterns(path, exclude) {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SOURCE_EXTENSIONS.contains(&ext) {
            continue;
        }

        log::debug!("discovered {}", path.display());
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Returns true if any component of `path` is a hard-excluded directory name.
fn path_contains_excluded_dir(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| EXCLUDED_DIRS.contains(&s))
            .unwrap_or(false)
    })
}

/// Returns true if `path` matches any user-supplied exclusion pattern.
///
/// A pattern matches either the full path or any single path component, so
/// `--exclude generated` drops a whole directory while `--exclude '*.spec.ts'`
/// drops individual files.
fn is_excluded_by_patterns(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    for pattern in patterns {
        if let Ok(matched) = glob::Pattern::new(pattern)
            && matched.matches(&path_str)
        {
            return true;
        }
        for component in path.components() {
            if let Some(s) = component.as_os_str().to_str()
                && let Ok(matched) = glob::Pattern::new(pattern)
                && matched.matches(s)
            {
                return true;
            }
        }
    }

    false
}
