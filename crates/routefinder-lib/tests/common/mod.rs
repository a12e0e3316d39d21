//! Common test utilities and fixture helpers.
//!
//! Builders for the small graphs used across integration tests, plus a
//! brute-force enumerator of simple paths used as an optimality oracle.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routefinder_lib::{Graph, Vertex};

/// Path to fixtures directory shared with the CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Add both directions of an edge.
#[allow(dead_code)]
pub fn undirected(graph: &mut Graph, a: &Vertex, b: &Vertex, weight: Option<f64>) {
    graph.add_edge(a, b, weight).expect("valid weight");
    graph.add_edge(b, a, weight).expect("valid weight");
}

/// A(0,0) B(2,0) C(2,2) D(0,2): square sides of weight 2 plus a diagonal A-C of weight 3.
#[allow(dead_code)]
pub fn square_with_diagonal() -> Graph {
    let a = Vertex::new("A", 0.0, 0.0);
    let b = Vertex::new("B", 2.0, 0.0);
    let c = Vertex::new("C", 2.0, 2.0);
    let d = Vertex::new("D", 0.0, 2.0);

    let mut graph = Graph::new();
    undirected(&mut graph, &a, &b, Some(2.0));
    undirected(&mut graph, &b, &c, Some(2.0));
    undirected(&mut graph, &c, &d, Some(2.0));
    undirected(&mut graph, &d, &a, Some(2.0));
    undirected(&mut graph, &a, &c, Some(3.0));
    graph
}

/// Random directed graph on `n` vertices named `v0..v{n-1}`.
///
/// With `geometric` set, every weight is at least the Euclidean distance
/// between its endpoints so A* with the straight-line heuristic stays
/// admissible. Otherwise weights are small integers, zero included.
#[allow(dead_code)]
pub fn random_graph(seed: u64, n: usize, density: f64, geometric: bool) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices: Vec<Vertex> = (0..n)
        .map(|i| {
            Vertex::new(
                format!("v{i}"),
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..10.0),
            )
        })
        .collect();

    let mut graph = Graph::new();
    for vertex in &vertices {
        graph.add_vertex(vertex.clone());
    }
    for from in &vertices {
        for to in &vertices {
            if from == to || !rng.random_bool(density) {
                continue;
            }
            let weight = if geometric {
                from.euclidean_distance(to) * rng.random_range(1.0..2.0)
            } else {
                f64::from(rng.random_range(0..10u8))
            };
            graph.add_edge(from, to, Some(weight)).expect("valid weight");
        }
    }
    graph
}

/// Cheapest simple path cost from `start` to `goal`, by exhaustive search.
#[allow(dead_code)]
pub fn brute_force_cost(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: &str,
        goal: &str,
        cost: f64,
        visited: &mut Vec<String>,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for edge in graph.neighbours(current) {
            if visited.iter().any(|name| name == &edge.target) {
                continue;
            }
            visited.push(edge.target.clone());
            walk(graph, &edge.target, goal, cost + edge.weight, visited, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(graph, start, goal, 0.0, &mut visited, &mut best);
    best
}
