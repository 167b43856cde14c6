pub mod edge;
pub mod node;

use std::collections::HashMap;

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};

use crate::parser::ImportKind;
use edge::ImportEdge;
use node::FileNode;

/// Result of offering an edge to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// The edge was new and has been stored.
    Added,
    /// An edge for the same ordered (from, to) pair already exists.
    Duplicate,
    /// Source and target are the same file; self-edges are never stored.
    SelfEdge,
}

/// The in-memory dependency graph: a directed petgraph `StableGraph` with a
/// path index for O(1) node lookup.
///
/// Nodes and edges are never removed, so iteration reproduces insertion
/// order exactly. Combined with the walker's sorted file list this makes
/// emission deterministic: re-running on an unchanged project yields
/// byte-identical output.
pub struct DependencyGraph {
    pub graph: StableGraph<FileNode, ImportEdge, Directed>,
    /// Maps relative paths to their node indices.
    path_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty dependency graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            path_index: HashMap::new(),
        }
    }

    /// Intern the node for `path`, creating it on first encounter. The same
    /// path always maps to the same index, and thus the same identifier.
    fn intern_file(&mut self, path: &str) -> NodeIndex {
        if let Some(&existing) = self.path_index.get(path) {
            return existing;
        }
        let idx = self.graph.add_node(FileNode::new(path.to_owned()));
        self.path_index.insert(path.to_owned(), idx);
        idx
    }

    /// Offer a (from, to) dependency to the graph.
    ///
    /// Self-edges are rejected before any node is interned, so a file whose
    /// only import is itself never appears in the output. Duplicate ordered
    /// pairs collapse to the first-recorded edge.
    pub fn add_import(
        &mut self,
        from: &str,
        to: &str,
        kind: ImportKind,
        specifier: &str,
    ) -> EdgeOutcome {
        if from == to {
            return EdgeOutcome::SelfEdge;
        }

        let from_idx = self.intern_file(from);
        let to_idx = self.intern_file(to);

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            return EdgeOutcome::Duplicate;
        }

        self.graph.add_edge(
            from_idx,
            to_idx,
            ImportEdge {
                kind,
                specifier: specifier.to_owned(),
            },
        );
        EdgeOutcome::Added
    }

    /// Number of file nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
