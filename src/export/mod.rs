pub mod dot;
pub mod mermaid;
pub mod model;

use crate::graph::DependencyGraph;
use model::ExportFormat;

/// Mermaid renders poorly past this many edges; larger graphs get an
/// advisory warning on stderr. Output is still produced in full.
const MERMAID_EDGE_WARN_THRESHOLD: usize = 500;

/// Serialize the finalized graph in the requested format.
///
/// Emission is a pure read of the accumulated node and edge sets; the graph
/// is never mutated once export begins.
pub fn export_graph(graph: &DependencyGraph, format: ExportFormat) -> String {
    if format == ExportFormat::Mermaid && graph.edge_count() > MERMAID_EDGE_WARN_THRESHOLD {
        log::warn!(
            "large graph: {} edges may render poorly in Mermaid; consider --format dot",
            graph.edge_count()
        );
    }

    match format {
        ExportFormat::Mermaid => mermaid::render_mermaid(graph),
        ExportFormat::Dot => dot::render_dot(graph),
    }
}
