//! Route planning strategies.
//!
//! Each [`RouteAlgorithm`] maps to a [`RoutePlanner`] implementation so the
//! `plan_route` orchestrator never needs to know which heuristic is in use.

use crate::error::Result;
use crate::graph::Graph;
use crate::path::Path;
use crate::search::{EuclideanHeuristic, SearchEngine, ZeroHeuristic};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Run the search. An empty path means the goal is unreachable.
    fn find_path<'g>(&self, graph: &'g Graph, start: &str, goal: &str) -> Result<Path<'g>>;

    /// Whether the planner's optimality depends on edge weights being at
    /// least the straight-line distance between their endpoints.
    fn requires_geometric_weights(&self) -> bool {
        false
    }
}

/// Uniform-Cost Search planner: orders the frontier by accumulated cost.
pub type UcsPlanner = SearchEngine<ZeroHeuristic>;

/// A* planner guided by the Euclidean distance to the goal.
pub type AStarPlanner = SearchEngine<EuclideanHeuristic>;

impl RoutePlanner for UcsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Ucs
    }

    fn find_path<'g>(&self, graph: &'g Graph, start: &str, goal: &str) -> Result<Path<'g>> {
        self.search(graph, start, goal)
    }
}

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path<'g>(&self, graph: &'g Graph, start: &str, goal: &str) -> Result<Path<'g>> {
        self.search(graph, start, goal)
    }

    fn requires_geometric_weights(&self) -> bool {
        true
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Ucs => Box::new(SearchEngine::ucs()),
        RouteAlgorithm::AStar => Box::new(SearchEngine::a_star()),
    }
}
