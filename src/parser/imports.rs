//! Lexical import extraction.
//!
//! Imports are recognized by pattern matching on source text rather than by
//! parsing the language. This is a deliberate scope choice: it keeps the
//! scanner fast and dependency-light, at the cost of occasionally matching
//! import-like text inside block comments or template literals. Specifiers
//! that are not string literals (computed dynamic imports) never match and
//! are silently skipped.

use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// The kind of statement a specifier was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// ESM static import: `import { X } from './module'` or `import './module'`.
    Esm,
    /// Re-export: `export { X } from './module'` or `export * from './module'`.
    ReExport,
    /// CommonJS require: `const X = require('./module')`.
    Cjs,
    /// Dynamic import: `import('./module')`.
    Dynamic,
}

/// A single import statement's specifier, exactly as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImport {
    /// Kind of statement the specifier came from.
    pub kind: ImportKind,
    /// The raw module specifier string, e.g. `"react"` or `"./utils"`.
    pub specifier: String,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// ESM static imports, line-anchored: `import X from '<spec>'`,
/// `import { a, b } from '<spec>'`, `import '<spec>'`. Anchoring at the line
/// start means a `//`-commented import never matches.
const ESM_IMPORT_PATTERN: &str = r#"(?m)^\s*import\s+(?:[^;'"]*?\bfrom\s+)?["']([^"']+)["']"#;

/// Re-exports, line-anchored: `export { X } from '<spec>'`,
/// `export * from '<spec>'`.
const REEXPORT_PATTERN: &str = r#"(?m)^\s*export\s+[^;'"]*?\bfrom\s+["']([^"']+)["']"#;

/// Dynamic `import('<spec>')` calls, anywhere in the text.
const DYNAMIC_IMPORT_PATTERN: &str = r#"\bimport\s*\(\s*["']([^"']+)["']\s*\)"#;

/// CommonJS `require('<spec>')` calls, anywhere in the text.
const REQUIRE_PATTERN: &str = r#"\brequire\s*\(\s*["']([^"']+)["']\s*\)"#;

// ---------------------------------------------------------------------------
// Pattern cache
// ---------------------------------------------------------------------------

static ESM_IMPORT_RE: OnceLock<Regex> = OnceLock::new();
static REEXPORT_RE: OnceLock<Regex> = OnceLock::new();
static DYNAMIC_IMPORT_RE: OnceLock<Regex> = OnceLock::new();
static REQUIRE_RE: OnceLock<Regex> = OnceLock::new();

fn esm_import_re() -> &'static Regex {
    ESM_IMPORT_RE.get_or_init(|| Regex::new(ESM_IMPORT_PATTERN).expect("invalid ESM pattern"))
}

fn reexport_re() -> &'static Regex {
    REEXPORT_RE.get_or_init(|| Regex::new(REEXPORT_PATTERN).expect("invalid re-export pattern"))
}

fn dynamic_import_re() -> &'static Regex {
    DYNAMIC_IMPORT_RE
        .get_or_init(|| Regex::new(DYNAMIC_IMPORT_PATTERN).expect("invalid dynamic pattern"))
}

fn require_re() -> &'static Regex {
    REQUIRE_RE.get_or_init(|| Regex::new(REQUIRE_PATTERN).expect("invalid require pattern"))
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract every recognized import specifier from `source`.
///
/// All four statement forms are scanned independently and the matches are
/// merged by byte offset, so the result is in source order across forms.
/// Duplicates are preserved; deduplication happens at the edge level, not
/// here.
pub fn extract_imports(source: &str) -> Vec<RawImport> {
    let mut found: Vec<(usize, RawImport)> = Vec::new();

    let scanners = [
        (esm_import_re(), ImportKind::Esm),
        (reexport_re(), ImportKind::ReExport),
        (dynamic_import_re(), ImportKind::Dynamic),
        (require_re(), ImportKind::Cjs),
    ];

    for (re, kind) in scanners {
        for caps in re.captures_iter(source) {
            let spec = match caps.get(1) {
                Some(m) if !m.as_str().is_empty() => m,
                _ => continue,
            };
            found.push((
                spec.start(),
                RawImport {
                    kind,
                    specifier: spec.as_str().to_owned(),
                },
            ));
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, import)| import).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
