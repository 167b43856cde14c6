/// Output format for the emitted diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Mermaid flowchart text (default); the wire contract with downstream
    /// diagram viewers.
    #[default]
    Mermaid,
    /// Graphviz DOT. Renders better for large graphs and non-Mermaid tooling.
    Dot,
}
