//! Route planning facade.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (UCS, A*)
//! - [`RouteRequest`] - High-level route planning request by vertex name
//! - [`RoutePlan`] - Owned, serialisable route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! The search engine reports an unreachable goal as an empty path. At this
//! level that outcome becomes [`Error::RouteNotFound`] so callers can surface
//! it like any other failure.
//!
//! # Example
//!
//! ```
//! use routefinder_lib::{parse_graph, plan_route, RouteRequest, WeightMode};
//!
//! let graph = parse_graph("2\nA 0 0\nB 0 1\n0 4\n4 0\n", WeightMode::Weighted)?;
//! let plan = plan_route(&graph, &RouteRequest::ucs("A", "B"))?;
//! assert_eq!(plan.steps, vec!["A", "B"]);
//! assert_eq!(plan.cost, 4.0);
//! # Ok::<(), routefinder_lib::Error>(())
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, RoutePlanner, UcsPlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::search::admissibility_violations;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Uniform-Cost Search (cost only).
    #[default]
    Ucs,
    /// A* search (cost plus Euclidean estimate).
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Ucs => "ucs",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "ucs" => Ok(RouteAlgorithm::Ucs),
            "a-star" | "astar" | "a_star" | "a*" => Ok(RouteAlgorithm::AStar),
            other => Err(format!(
                "unknown algorithm '{other}'; expected 'ucs' or 'a-star'"
            )),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Uniform-Cost Search request.
    pub fn ucs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Ucs,
        }
    }

    /// A* request.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Sum of edge weights along the route.
    pub cost: f64,
    /// Sum of haversine hop lengths in kilometres.
    pub real_world_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a vertex name, suggesting close matches when it is unknown.
fn resolve_vertex(graph: &Graph, name: &str) -> Result<()> {
    if graph.contains_vertex(name) {
        return Ok(());
    }
    Err(Error::UnknownVertex {
        name: name.to_string(),
        suggestions: graph.fuzzy_vertex_matches(name, 3),
    })
}

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    resolve_vertex(graph, &request.start)?;
    resolve_vertex(graph, &request.goal)?;

    let planner = select_planner(request.algorithm);

    if cfg!(debug_assertions) && planner.requires_geometric_weights() {
        let violations = admissibility_violations(graph);
        if !violations.is_empty() {
            warn!(
                count = violations.len(),
                first = %format!("{} -> {}", violations[0].from, violations[0].to),
                "edges shorter than their straight-line distance; A* may return a suboptimal route"
            );
        }
    }

    let path = planner.find_path(graph, &request.start, &request.goal)?;
    if path.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps: path.names(),
        cost: path.cost(),
        real_world_km: path.real_world_cost(),
    })
}
