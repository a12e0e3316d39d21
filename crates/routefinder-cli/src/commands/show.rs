use anyhow::Result;

use routefinder_lib::Graph;

use crate::output::{render_graph, OutputFormat};

/// Render the loaded graph: vertex list, adjacency matrix and edge weights.
pub fn handle_show_command(graph: &Graph, format: OutputFormat) -> Result<String> {
    render_graph(graph, format)
}
