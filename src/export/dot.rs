use std::fmt::Write;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::DependencyGraph;
use crate::parser::ImportKind;

/// Escape a string for use inside a double-quoted DOT string.
fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// DOT edge style attributes for an import kind.
fn edge_style(kind: ImportKind) -> &'static str {
    match kind {
        ImportKind::Esm | ImportKind::Cjs => "style=solid",
        ImportKind::ReExport => "style=dashed",
        ImportKind::Dynamic => "style=dotted",
    }
}

/// Render the dependency graph as Graphviz DOT.
///
/// Node statements come first, then one edge statement per dependency, both
/// in first-discovered order. Edges are labelled with the specifier that
/// first produced them and styled by import kind.
pub fn render_dot(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    writeln!(out, "digraph dependencies {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    node [shape=box fontname=monospace];").unwrap();

    for idx in graph.graph.node_indices() {
        let node = &graph.graph[idx];
        writeln!(
            out,
            "    {} [label=\"{}\"];",
            node.id,
            escape_dot_string(&node.path)
        )
        .unwrap();
    }

    for edge in graph.graph.edge_references() {
        let from = &graph.graph[edge.source()];
        let to = &graph.graph[edge.target()];
        let dep = edge.weight();
        writeln!(
            out,
            "    {} -> {} [label=\"{}\" {}];",
            from.id,
            to.id,
            escape_dot_string(&dep.specifier),
            edge_style(dep.kind),
        )
        .unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}
