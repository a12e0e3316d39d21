//! routefinder library entry points.
//!
//! This crate holds the weighted graph model, the path accumulator and the
//! best-first search engine that runs Uniform-Cost Search and A* under one
//! algorithm. It also exposes the collaborator-facing helpers (text parser,
//! JSON document, route planning facade and route summaries). Higher-level
//! consumers such as the CLI should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod document;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod parser;
pub mod path;
pub mod routing;
pub mod search;
pub mod vertex;

pub use document::{EdgeRecord, GraphDocument};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, SNAP_TOLERANCE_METERS};
pub use loader::{load_graph, save_graph_json, GraphFormat};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use parser::{parse_graph, WeightMode};
pub use path::Path;
pub use routing::{plan_route, select_planner, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
pub use search::{
    admissibility_violations, AdmissibilityViolation, EuclideanHeuristic, Heuristic,
    SearchEngine, SearchStats, ZeroHeuristic,
};
pub use vertex::{haversine_km, Vertex, EARTH_RADIUS_KM};
