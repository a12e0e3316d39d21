use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::vertex::{haversine_km, Vertex};

/// Radius within which a map click selects an existing vertex instead of
/// creating a new one.
pub const SNAP_TOLERANCE_METERS: f64 = 10.0;

/// Directed, weighted edge stored in the adjacency list of its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct Node {
    vertex: Vertex,
    edges: Vec<Edge>,
}

/// Weighted directed graph keyed by vertex name.
///
/// Vertices keep their insertion order, and so does each adjacency list.
/// Undirected graphs are modelled by inserting both directions.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<String, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `vertex` with an empty adjacency list.
    ///
    /// Returns `false` and leaves the graph untouched when a vertex with the
    /// same name already exists.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.nodes.contains_key(&vertex.name) {
            return false;
        }
        self.nodes.insert(
            vertex.name.clone(),
            Node {
                vertex,
                edges: Vec::new(),
            },
        );
        true
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Missing endpoints are inserted first. An endpoint whose name is
    /// already present is reused as stored. When `weight` is `None` the
    /// Euclidean distance between the stored endpoints is used. Returns
    /// `Ok(false)` when the edge already exists; its weight is not updated.
    pub fn add_edge(&mut self, from: &Vertex, to: &Vertex, weight: Option<f64>) -> Result<bool> {
        if let Some(weight) = weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight {
                    from: from.name.clone(),
                    to: to.name.clone(),
                    weight,
                });
            }
        }

        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if self.contains_edge(&from.name, &to.name) {
            return Ok(false);
        }

        let weight = match weight {
            Some(weight) => weight,
            None => self.nodes[&from.name]
                .vertex
                .euclidean_distance(&self.nodes[&to.name].vertex),
        };

        if let Some(node) = self.nodes.get_mut(&from.name) {
            node.edges.push(Edge {
                target: to.name.clone(),
                weight,
            });
        }
        Ok(true)
    }

    /// Add `a -> b` and `b -> a` with default weights.
    ///
    /// Returns `true` if either direction was new.
    pub fn connect(&mut self, a: &Vertex, b: &Vertex) -> Result<bool> {
        let forward = self.add_edge(a, b, None)?;
        let backward = self.add_edge(b, a, None)?;
        Ok(forward || backward)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.nodes.values().map(|node| &node.vertex)
    }

    /// Lookup a vertex by its case-sensitive name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.nodes.get(name).map(|node| &node.vertex)
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Outgoing edges of `name`; empty when the vertex is unknown.
    pub fn neighbours(&self, name: &str) -> &[Edge] {
        self.nodes
            .get(name)
            .map(|node| node.edges.as_slice())
            .unwrap_or(&[])
    }

    /// Outgoing edges of `vertex` resolved to the stored neighbour vertices.
    pub fn adjacent(&self, vertex: &Vertex) -> Vec<(&Vertex, f64)> {
        self.neighbours(&vertex.name)
            .iter()
            .filter_map(|edge| self.vertex(&edge.target).map(|target| (target, edge.weight)))
            .collect()
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.neighbours(from).iter().any(|edge| edge.target == to)
    }

    /// Weight of `from -> to`, or `None` when there is no such edge.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Remove `from -> to` if present. The reverse direction is untouched.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(node) = self.nodes.get_mut(from) else {
            return false;
        };
        let before = node.edges.len();
        node.edges.retain(|edge| edge.target != to);
        node.edges.len() != before
    }

    /// Remove `name`, its adjacency list and every edge pointing at it.
    pub fn remove_vertex(&mut self, name: &str) -> bool {
        if !self.nodes.contains_key(name) {
            return false;
        }
        for node in self.nodes.values_mut() {
            node.edges.retain(|edge| edge.target != name);
        }
        self.nodes.shift_remove(name);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }

    /// Vertex names similar to `name`, best match first.
    pub fn fuzzy_vertex_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.8;

        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Closest vertex within `tolerance_m` metres of `(lat, lng)`, measured
    /// with the haversine distance.
    pub fn vertex_near(&self, lat: f64, lng: f64, tolerance_m: f64) -> Option<&Vertex> {
        self.vertices()
            .map(|vertex| (vertex, haversine_km(vertex.x, vertex.y, lat, lng) * 1000.0))
            .filter(|(_, meters)| *meters <= tolerance_m)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(vertex, _)| vertex)
    }

    /// Insert a vertex at `(lat, lng)` named after the next free ordinal.
    ///
    /// Returns `None` when an existing vertex lies within
    /// [`SNAP_TOLERANCE_METERS`]; the click selects that vertex instead.
    pub fn add_drawn_vertex(&mut self, lat: f64, lng: f64) -> Option<String> {
        if self.vertex_near(lat, lng, SNAP_TOLERANCE_METERS).is_some() {
            return None;
        }

        let mut ordinal = self.len() + 1;
        while self.contains_vertex(&ordinal.to_string()) {
            ordinal += 1;
        }
        let name = ordinal.to_string();
        self.add_vertex(Vertex::new(name.clone(), lat, lng));
        Some(name)
    }
}

impl fmt::Display for Graph {
    /// Debug serialization: vertex count, `name x y` lines, the dense 0/1
    /// adjacency matrix and a listing of every edge with its weight and
    /// haversine length in metres.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.len())?;
        for vertex in self.vertices() {
            writeln!(f, "{} {} {}", vertex.name, vertex.x, vertex.y)?;
        }

        for node in self.nodes.values() {
            let row = self
                .nodes
                .keys()
                .map(|name| {
                    if node.edges.iter().any(|edge| &edge.target == name) {
                        "1"
                    } else {
                        "0"
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{row}")?;
        }

        for node in self.nodes.values() {
            for edge in &node.edges {
                let Some(target) = self.vertex(&edge.target) else {
                    continue;
                };
                writeln!(
                    f,
                    "{} -> {}: {:.2} / {:.2} m",
                    node.vertex.name,
                    edge.target,
                    edge.weight,
                    node.vertex.haversine_distance(target) * 1000.0
                )?;
            }
        }
        Ok(())
    }
}
