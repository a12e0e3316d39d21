use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{RouteAlgorithm, RoutePlan};
use crate::vertex::Vertex;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Basic,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Weight of the edge used to reach this step. Absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Haversine length of the hop into this step, in metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meters: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
    pub cost: f64,
    pub real_world_km: f64,
    pub real_world_meters: f64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-hop weights and lengths.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<&Vertex> = None;
        for (index, name) in plan.steps.iter().enumerate() {
            let vertex = graph
                .vertex(name)
                .ok_or_else(|| Error::unknown_vertex(name.clone()))?;
            let (weight, meters) = match previous {
                Some(prev) => (
                    graph.edge_weight(&prev.name, name),
                    Some(vertex.haversine_distance(prev) * 1000.0),
                ),
                None => (None, None),
            };
            steps.push(RouteStep {
                index,
                name: name.clone(),
                weight,
                meters,
            });
            previous = Some(vertex);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            steps,
            cost: plan.cost,
            real_world_km: plan.real_world_km,
            real_world_meters: plan.real_world_km * 1000.0,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, algorithm: {})",
            self.start, self.goal, self.hops, self.algorithm
        );
        for step in &self.steps {
            match (step.weight, step.meters) {
                (Some(weight), Some(meters)) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({:.2} / {:.2} m)",
                        step.index, step.name, weight, meters
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        let _ = writeln!(buffer, "Total cost: {:.2}", self.cost);
        let _ = writeln!(buffer, "Real distance: {:.2} m", self.real_world_meters);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} -> {}_ ({} hops, algorithm: `{}`)",
            self.start, self.goal, self.hops, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.name);
        }
        let _ = writeln!(
            buffer,
            "\ncost `{:.2}`, real distance `{:.2} m`",
            self.cost, self.real_world_meters
        );
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let last = self.steps.len().saturating_sub(1);
        for (position, step) in self.steps.iter().enumerate() {
            let marker = if position == 0 {
                '+'
            } else if position == last {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{marker} {}", step.name);
        }
        buffer
    }
}
