use crate::parser::ImportKind;

/// A directed file -> file dependency: the source file imports the target.
///
/// Repeated imports between the same pair of files collapse to one edge;
/// the stored kind and specifier come from the first statement discovered.
#[derive(Debug, Clone)]
pub struct ImportEdge {
    /// Kind of the import statement that produced this edge.
    pub kind: ImportKind,
    /// The raw specifier of that statement, as written in source.
    pub specifier: String,
}
