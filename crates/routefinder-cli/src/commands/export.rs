//! Export command handler.

use std::path::Path;

use anyhow::{Context, Result};

use routefinder_lib::{save_graph_json, Graph};

/// Write `graph` as a JSON document.
///
/// With no `output` path the document is returned for printing instead.
pub fn handle_export_command(graph: &Graph, output: Option<&Path>) -> Result<String> {
    match output {
        Some(path) => {
            save_graph_json(graph, path)
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
            Ok(format!(
                "Exported {} vertices and {} edges to {}\n",
                graph.len(),
                graph.edge_count(),
                path.display()
            ))
        }
        None => Ok(format!("{}\n", graph.to_document().to_json_pretty()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routefinder_lib::{load_graph, Vertex, WeightMode};

    #[test]
    fn export_writes_loadable_document() {
        let mut graph = Graph::new();
        graph
            .connect(&Vertex::new("A", 0.0, 0.0), &Vertex::new("B", 3.0, 4.0))
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let message = handle_export_command(&graph, Some(&path)).unwrap();
        assert!(message.starts_with("Exported 2 vertices and 2 edges"));

        let restored = load_graph(&path, WeightMode::Weighted).unwrap();
        assert_eq!(restored.edge_weight("B", "A"), Some(5.0));
    }
}
