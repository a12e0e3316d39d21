//! Output formatting for graphs and routes.

use anyhow::Result;
use clap::ValueEnum;

use routefinder_lib::{Graph, RouteRenderMode, RouteSummary};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Names only.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Rich => RouteRenderMode::RichText,
            OutputFormat::Basic => RouteRenderMode::Basic,
            OutputFormat::Text | OutputFormat::Json => RouteRenderMode::PlainText,
        }
    }
}

/// Render a route summary.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(summary)?)),
        other => Ok(summary.render(other.render_mode())),
    }
}

/// Render a whole graph.
pub fn render_graph(graph: &Graph, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => format!("{}\n", graph.to_document().to_json_pretty()?),
        OutputFormat::Basic => graph
            .vertices()
            .map(|vertex| format!("{}\n", vertex.name))
            .collect(),
        OutputFormat::Text | OutputFormat::Rich => graph.to_string(),
    };
    Ok(text)
}
