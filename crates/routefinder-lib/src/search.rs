//! Unified best-first search.
//!
//! Uniform-Cost Search and A* are the same algorithm with a different
//! [`Heuristic`]: UCS plugs in [`ZeroHeuristic`], A* plugs in
//! [`EuclideanHeuristic`]. The frontier is a min-heap of [`Path`] values
//! ordered by [`Path::priority_key`], with ties popped in push order.
//!
//! Vertices are marked visited when a path ending there is popped, not when
//! it is pushed. Several frontier entries may therefore end at the same
//! vertex; the first one popped wins and later ones are discarded on pop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::Path;
use crate::vertex::Vertex;

/// Estimate of the remaining cost from a vertex to the goal.
///
/// A* only returns optimal routes when the estimate never exceeds the true
/// remaining cost. Any `Fn(&Vertex, &Vertex) -> f64` closure is a heuristic.
pub trait Heuristic {
    fn estimate(&self, from: &Vertex, goal: &Vertex) -> f64;
}

/// Constant zero estimate, turning the engine into Uniform-Cost Search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &Vertex, _goal: &Vertex) -> f64 {
        0.0
    }
}

/// Straight-line distance to the goal, used by A*.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, from: &Vertex, goal: &Vertex) -> f64 {
        from.euclidean_distance(goal)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Vertex, &Vertex) -> f64,
{
    fn estimate(&self, from: &Vertex, goal: &Vertex) -> f64 {
        self(from, goal)
    }
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths taken off the frontier.
    pub popped: usize,
    /// Popped paths whose tail was expanded.
    pub expanded: usize,
    /// Popped paths dropped because their tail was already visited.
    pub discarded: usize,
    /// Paths pushed onto the frontier, the seed included.
    pub pushed: usize,
}

/// Best-first search engine parameterised by its heuristic.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<H = ZeroHeuristic> {
    heuristic: H,
}

impl SearchEngine<ZeroHeuristic> {
    /// Uniform-Cost Search.
    pub fn ucs() -> Self {
        Self::new(ZeroHeuristic)
    }
}

impl SearchEngine<EuclideanHeuristic> {
    /// A* with the Euclidean heuristic.
    pub fn a_star() -> Self {
        Self::new(EuclideanHeuristic)
    }
}

impl<H: Heuristic> SearchEngine<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Search `graph` for the cheapest route from `start` to `goal`.
    ///
    /// Returns the winning path, or an empty path when `goal` cannot be
    /// reached. Names missing from the graph are reported as
    /// [`Error::UnknownVertex`].
    pub fn search<'g>(&self, graph: &'g Graph, start: &str, goal: &str) -> Result<Path<'g>> {
        self.search_with_stats(graph, start, goal)
            .map(|(path, _)| path)
    }

    /// Same as [`SearchEngine::search`], also returning the search counters.
    pub fn search_with_stats<'g>(
        &self,
        graph: &'g Graph,
        start: &str,
        goal: &str,
    ) -> Result<(Path<'g>, SearchStats)> {
        let start_vertex = graph
            .vertex(start)
            .ok_or_else(|| Error::unknown_vertex(start))?;
        let goal_vertex = graph
            .vertex(goal)
            .ok_or_else(|| Error::unknown_vertex(goal))?;

        let mut stats = SearchStats::default();
        let mut seed = Path::new(graph, goal_vertex);
        seed.append(start_vertex, &self.heuristic)?;

        if start_vertex.is_same(goal_vertex) {
            return Ok((seed, stats));
        }

        let mut frontier = Frontier::default();
        let mut visited: HashSet<&'g str> = HashSet::new();
        frontier.push(seed);
        stats.pushed += 1;

        while let Some(current) = frontier.pop() {
            stats.popped += 1;
            let Some(tail) = current.last_vertex() else {
                continue;
            };

            if tail.is_same(goal_vertex) {
                debug!(
                    start,
                    goal,
                    cost = current.cost(),
                    hops = current.len() - 1,
                    popped = stats.popped,
                    expanded = stats.expanded,
                    pushed = stats.pushed,
                    "route found"
                );
                return Ok((current, stats));
            }

            if !visited.insert(tail.name.as_str()) {
                stats.discarded += 1;
                continue;
            }
            stats.expanded += 1;

            for edge in graph.neighbours(&tail.name) {
                if visited.contains(edge.target.as_str()) {
                    continue;
                }
                let Some(next) = graph.vertex(&edge.target) else {
                    continue;
                };
                let mut branch = current.branch();
                branch.append(next, &self.heuristic)?;
                frontier.push(branch);
                stats.pushed += 1;
            }
        }

        debug!(
            start,
            goal,
            popped = stats.popped,
            expanded = stats.expanded,
            "frontier exhausted without reaching goal"
        );
        Ok((Path::new(graph, goal_vertex), stats))
    }
}

/// Edge whose weight is below the straight-line distance between its
/// endpoints, which lets the Euclidean heuristic overestimate.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissibilityViolation {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub straight_line: f64,
}

/// List every edge that breaks the Euclidean heuristic's lower bound.
///
/// An empty result means A* with [`EuclideanHeuristic`] is admissible (and
/// consistent) on `graph`.
pub fn admissibility_violations(graph: &Graph) -> Vec<AdmissibilityViolation> {
    const TOLERANCE: f64 = 1e-9;

    let mut violations = Vec::new();
    for vertex in graph.vertices() {
        for (target, weight) in graph.adjacent(vertex) {
            let straight_line = vertex.euclidean_distance(target);
            if weight + TOLERANCE < straight_line {
                violations.push(AdmissibilityViolation {
                    from: vertex.name.clone(),
                    to: target.name.clone(),
                    weight,
                    straight_line,
                });
            }
        }
    }
    violations
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct FrontierEntry<'g> {
    key: FloatOrd,
    sequence: u64,
    path: Path<'g>,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry<'_> {}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by key, FIFO on ties.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
struct Frontier<'g> {
    heap: BinaryHeap<FrontierEntry<'g>>,
    next_sequence: u64,
}

impl<'g> Frontier<'g> {
    fn push(&mut self, path: Path<'g>) {
        let entry = FrontierEntry {
            key: FloatOrd(path.priority_key()),
            sequence: self.next_sequence,
            path,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<Path<'g>> {
        self.heap.pop().map(|entry| entry.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(name: &str, x: f64, y: f64) -> Vertex {
        Vertex::new(name, x, y)
    }

    #[test]
    fn frontier_pops_lowest_key_then_fifo() {
        let mut graph = Graph::new();
        let a = v("A", 0.0, 0.0);
        graph.add_edge(&a, &v("B", 1.0, 0.0), Some(1.0)).unwrap();
        graph.add_edge(&a, &v("C", 2.0, 0.0), Some(1.0)).unwrap();
        graph.add_edge(&a, &v("D", 3.0, 0.0), Some(0.5)).unwrap();
        let goal = graph.vertex("D").unwrap();

        let mut frontier = Frontier::default();
        for target in ["B", "C", "D"] {
            let mut path = Path::new(&graph, goal);
            path.append(graph.vertex("A").unwrap(), &ZeroHeuristic)
                .unwrap();
            path.append(graph.vertex(target).unwrap(), &ZeroHeuristic)
                .unwrap();
            frontier.push(path);
        }

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|path| path.last_vertex().unwrap().name.clone())
            .collect();
        assert_eq!(order, vec!["D", "B", "C"]);
    }

    #[test]
    fn closures_are_heuristics() {
        let doubled = |from: &Vertex, goal: &Vertex| 2.0 * from.euclidean_distance(goal);
        let a = v("A", 0.0, 0.0);
        let b = v("B", 3.0, 4.0);
        assert_eq!(doubled.estimate(&a, &b), 10.0);
        assert_eq!(ZeroHeuristic.estimate(&a, &b), 0.0);
        assert_eq!(EuclideanHeuristic.estimate(&a, &b), 5.0);
    }

    #[test]
    fn stats_count_discarded_duplicates() {
        // A reaches C directly (3) and via B (1 + 1); the direct entry is
        // popped after C was visited through B and gets discarded.
        let mut graph = Graph::new();
        let a = v("A", 0.0, 0.0);
        let b = v("B", 1.0, 0.0);
        let c = v("C", 2.0, 0.0);
        let d = v("D", 3.0, 0.0);
        graph.add_edge(&a, &b, Some(1.0)).unwrap();
        graph.add_edge(&a, &c, Some(3.0)).unwrap();
        graph.add_edge(&b, &c, Some(1.0)).unwrap();
        graph.add_edge(&c, &d, Some(5.0)).unwrap();

        let (path, stats) = SearchEngine::ucs()
            .search_with_stats(&graph, "A", "D")
            .unwrap();
        assert_eq!(path.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(path.cost(), 7.0);
        assert_eq!(stats.discarded, 1);
        assert_eq!(stats.expanded, 3);
    }

    #[test]
    fn admissibility_flags_short_explicit_edges() {
        let mut graph = Graph::new();
        let a = v("A", 0.0, 0.0);
        let b = v("B", 3.0, 4.0);
        graph.add_edge(&a, &b, Some(1.0)).unwrap();
        graph.add_edge(&b, &a, None).unwrap();

        let violations = admissibility_violations(&graph);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].from, "A");
        assert_eq!(violations[0].to, "B");
        assert_eq!(violations[0].straight_line, 5.0);
    }
}
