//! Route command handler.

use anyhow::Result;

use routefinder_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm,
        }
    }
}

/// Plan the requested route on `graph` and render it.
pub fn handle_route_command(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<String> {
    let plan = plan_route(graph, &args.to_request())?;
    tracing::info!(
        algorithm = %plan.algorithm,
        hops = plan.hop_count(),
        cost = plan.cost,
        "planned route"
    );
    let summary = RouteSummary::from_plan(graph, &plan)?;
    render_route(&summary, format)
}
