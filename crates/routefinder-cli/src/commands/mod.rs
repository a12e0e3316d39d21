//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

pub mod export;
pub mod route;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use routefinder_lib::{load_graph, Graph, WeightMode};

/// Load the graph file named on the command line.
pub fn open_graph(path: &Path, mode: WeightMode) -> Result<Graph> {
    load_graph(path, mode).with_context(|| format!("failed to load graph from {}", path.display()))
}
