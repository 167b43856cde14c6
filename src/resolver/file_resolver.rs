use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::walker::SOURCE_EXTENSIONS;

/// The outcome of resolving a single import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Resolved to a source file inside the project tree (absolute path).
    Resolved(PathBuf),
    /// The specifier names a package outside the project (bare specifier).
    External,
    /// Relative or alias specifier with no matching file on disk.
    NotFound,
}

/// Resolve `specifier` as imported from `from_file`.
///
/// Relative specifiers (`./`, `../`) resolve against the importing file's
/// directory. `@/` specifiers resolve against `<root>/src`, the Vite and
/// Next.js convention, hard-coded rather than read from bundler
/// configuration. Everything else is a bare specifier and therefore
/// [`External`](ResolutionOutcome::External), even when a same-named project
/// file exists.
///
/// Joined paths are normalized lexically, never canonicalized (the target
/// may not exist on disk). A resolution escaping `project_root` is
/// [`NotFound`](ResolutionOutcome::NotFound): the diagram only covers files
/// inside the scanned tree.
///
/// `project_root` and `from_file` must be absolute; `from_file` may itself
/// be the resolution target (a literal self-import), which the graph
/// builder discards.
pub fn resolve_specifier(
    project_root: &Path,
    from_file: &Path,
    specifier: &str,
) -> ResolutionOutcome {
    let base = if specifier.starts_with('.') {
        match from_file.parent() {
            Some(dir) => dir.join(specifier),
            None => return ResolutionOutcome::NotFound,
        }
    } else if let Some(rest) = specifier.strip_prefix("@/") {
        project_root.join("src").join(rest)
    } else {
        return ResolutionOutcome::External;
    };

    let candidate = base.clean();
    if !candidate.starts_with(project_root) {
        return ResolutionOutcome::NotFound;
    }

    match probe_candidates(&candidate) {
        Some(path) => ResolutionOutcome::Resolved(path),
        None => ResolutionOutcome::NotFound,
    }
}

/// Probe the candidate ladder for `base`, in fixed precedence order:
///
/// 1. the exact path, when it is a file with a recognized source extension;
/// 2. `<base>.<ext>` for each recognized extension, in declaration order;
/// 3. `<base>/index.<ext>` for each recognized extension, in the same order.
///
/// First match wins: plain extensions strictly before index files.
fn probe_candidates(base: &Path) -> Option<PathBuf> {
    if base.is_file() && has_source_extension(base) {
        return Some(base.to_path_buf());
    }

    for ext in SOURCE_EXTENSIONS {
        let candidate = PathBuf::from(format!("{}.{}", base.display(), ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    for ext in SOURCE_EXTENSIONS {
        let candidate = base.join(format!("index.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

fn has_source_extension(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    SOURCE_EXTENSIONS.contains(&ext)
}
