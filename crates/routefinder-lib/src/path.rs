use std::fmt;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::search::Heuristic;
use crate::vertex::Vertex;

/// Candidate route through a [`Graph`] towards a fixed goal.
///
/// A path tracks three quantities as vertices are appended:
/// - `cost`: the sum of edge weights (the search currency),
/// - `heuristic_distance`: the heuristic estimate from the tail to the goal,
///   replaced on every append,
/// - `real_world_cost`: the sum of haversine hop lengths in kilometres, kept
///   for reporting only.
///
/// Vertices are borrowed from the graph. Branching a path is a plain
/// [`Clone`]: the copy owns its own sequence and never affects the original.
#[derive(Debug, Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    goal: &'g Vertex,
    sequence: Vec<&'g Vertex>,
    cost: f64,
    heuristic_distance: f64,
    real_world_cost: f64,
}

impl<'g> Path<'g> {
    /// Empty path. Returned by the search engine when the goal is unreachable.
    pub fn new(graph: &'g Graph, goal: &'g Vertex) -> Self {
        Self {
            graph,
            goal,
            sequence: Vec::new(),
            cost: 0.0,
            heuristic_distance: 0.0,
            real_world_cost: 0.0,
        }
    }

    /// Extend the path by one vertex.
    ///
    /// The first vertex is only recorded. Every later vertex must be a
    /// neighbour of the current tail; its edge weight is added to `cost`, its
    /// haversine hop to `real_world_cost`, and `heuristic_distance` becomes
    /// `heuristic.estimate(vertex, goal)`.
    pub fn append<H>(&mut self, vertex: &Vertex, heuristic: &H) -> Result<()>
    where
        H: Heuristic + ?Sized,
    {
        let stored = self
            .graph
            .vertex(&vertex.name)
            .ok_or_else(|| Error::unknown_vertex(vertex.name.clone()))?;

        if let Some(last) = self.last_vertex() {
            let weight = self
                .graph
                .edge_weight(&last.name, &stored.name)
                .ok_or_else(|| Error::MissingEdge {
                    from: last.name.clone(),
                    to: stored.name.clone(),
                })?;
            self.cost += weight;
            self.real_world_cost += stored.haversine_distance(last);
            self.heuristic_distance = heuristic.estimate(stored, self.goal);
        }

        self.sequence.push(stored);
        Ok(())
    }

    /// Independent copy used when the search fans out to several neighbours.
    pub fn branch(&self) -> Self {
        self.clone()
    }

    /// Frontier ordering key: `cost + heuristic_distance`.
    pub fn priority_key(&self) -> f64 {
        self.cost + self.heuristic_distance
    }

    pub fn sequence(&self) -> &[&'g Vertex] {
        &self.sequence
    }

    /// Vertex names from start to tail.
    pub fn names(&self) -> Vec<String> {
        self.sequence.iter().map(|v| v.name.clone()).collect()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn heuristic_distance(&self) -> f64 {
        self.heuristic_distance
    }

    /// Sum of haversine hop lengths in kilometres.
    pub fn real_world_cost(&self) -> f64 {
        self.real_world_cost
    }

    pub fn last_vertex(&self) -> Option<&'g Vertex> {
        self.sequence.last().copied()
    }

    pub fn goal(&self) -> &'g Vertex {
        self.goal
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// `true` for the "not found" result of a search.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// `true` when the tail is the goal.
    pub fn reaches_goal(&self) -> bool {
        self.last_vertex().is_some_and(|last| last.is_same(self.goal))
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sequence.iter().map(|v| v.name.as_str()).collect();
        f.write_str(&names.join(" - "))
    }
}
