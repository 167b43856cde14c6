use std::fmt::Write;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::DependencyGraph;

/// Escape a string for safe use in Mermaid node labels (quotes and brackets
/// inside labels break the syntax).
fn escape_mermaid_label(s: &str) -> String {
    s.replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Render the dependency graph as a Mermaid left-to-right flowchart.
///
/// One line per edge, nodes declared inline with their path labels, in
/// first-discovered order. A graph with no edges renders as the direction
/// header alone.
pub fn render_mermaid(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    writeln!(out, "graph LR").unwrap();

    for edge in graph.graph.edge_references() {
        let from = &graph.graph[edge.source()];
        let to = &graph.graph[edge.target()];
        writeln!(
            out,
            "    {}[\"{}\"] --> {}[\"{}\"]",
            from.id,
            escape_mermaid_label(&from.path),
            to.id,
            escape_mermaid_label(&to.path),
        )
        .unwrap();
    }

    out
}
