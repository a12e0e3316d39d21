use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::document::GraphDocument;
use crate::error::Result;
use crate::graph::Graph;
use crate::parser::{parse_graph, WeightMode};

/// On-disk representation of a graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Vertex list followed by an adjacency matrix.
    Text,
    /// [`GraphDocument`] encoded as JSON.
    Json,
}

impl GraphFormat {
    /// Guess the format from the file extension; anything but `.json` is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFormat::Json,
            _ => GraphFormat::Text,
        }
    }
}

/// Load a graph from `path`.
///
/// `mode` only applies to the text format; JSON documents always carry
/// explicit weights.
pub fn load_graph(path: &Path, mode: WeightMode) -> Result<Graph> {
    let format = GraphFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading graph file");

    let contents = fs::read_to_string(path)?;
    let graph = match format {
        GraphFormat::Text => parse_graph(&contents, mode)?,
        GraphFormat::Json => Graph::from_document(GraphDocument::from_json(&contents)?)?,
    };

    info!(
        path = %path.display(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Write `graph` to `path` as a JSON [`GraphDocument`].
pub fn save_graph_json(graph: &Graph, path: &Path) -> Result<()> {
    let json = graph.to_document().to_json_pretty()?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "wrote graph document");
    Ok(())
}
