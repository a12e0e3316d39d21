//! Serialised adjacency form of a [`Graph`].
//!
//! The document lists vertices in insertion order followed by every directed
//! edge with its stored weight, so a round trip preserves both.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::vertex::Vertex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Graph {
    /// Snapshot the graph as a [`GraphDocument`].
    pub fn to_document(&self) -> GraphDocument {
        let vertices: Vec<Vertex> = self.vertices().cloned().collect();
        let edges = self
            .vertices()
            .flat_map(|vertex| {
                self.neighbours(&vertex.name).iter().map(|edge| EdgeRecord {
                    from: vertex.name.clone(),
                    to: edge.target.clone(),
                    weight: edge.weight,
                })
            })
            .collect();
        GraphDocument { vertices, edges }
    }

    /// Rebuild a graph from a document.
    ///
    /// Edges may only reference declared vertices; repeated edges keep the
    /// first weight.
    pub fn from_document(document: GraphDocument) -> Result<Graph> {
        let mut graph = Graph::new();
        for vertex in document.vertices {
            let name = vertex.name.clone();
            if !graph.add_vertex(vertex) {
                return Err(Error::DuplicateVertex { name });
            }
        }

        for edge in document.edges {
            let from = graph
                .vertex(&edge.from)
                .cloned()
                .ok_or_else(|| Error::unknown_vertex(edge.from.clone()))?;
            let to = graph
                .vertex(&edge.to)
                .cloned()
                .ok_or_else(|| Error::unknown_vertex(edge.to.clone()))?;
            graph.add_edge(&from, &to, Some(edge.weight))?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_preserves_order_and_weights() {
        let mut graph = Graph::new();
        let b = Vertex::new("B", 1.0, 0.0);
        let a = Vertex::new("A", 0.0, 0.0);
        graph.add_vertex(b.clone());
        graph.add_edge(&a, &b, Some(7.5)).unwrap();
        graph.add_edge(&b, &a, None).unwrap();

        let json = graph.to_document().to_json_pretty().unwrap();
        let restored = Graph::from_document(GraphDocument::from_json(&json).unwrap()).unwrap();

        let names: Vec<_> = restored.vertices().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(restored.edge_weight("A", "B"), Some(7.5));
        assert_eq!(restored.edge_weight("B", "A"), Some(1.0));
    }

    #[test]
    fn edges_without_declared_vertices_are_rejected() {
        let document = GraphDocument {
            vertices: vec![Vertex::new("A", 0.0, 0.0)],
            edges: vec![EdgeRecord {
                from: "A".into(),
                to: "B".into(),
                weight: 1.0,
            }],
        };
        let err = Graph::from_document(document).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex { ref name, .. } if name == "B"));
    }

    #[test]
    fn duplicate_vertices_are_rejected() {
        let document = GraphDocument {
            vertices: vec![Vertex::new("A", 0.0, 0.0), Vertex::new("A", 1.0, 1.0)],
            edges: Vec::new(),
        };
        assert!(matches!(
            Graph::from_document(document),
            Err(Error::DuplicateVertex { .. })
        ));
    }

    #[test]
    fn missing_edges_field_defaults_to_empty() {
        let document =
            GraphDocument::from_json(r#"{"vertices":[{"name":"A","x":1.5,"y":-2.0}]}"#).unwrap();
        let graph = Graph::from_document(document).unwrap();
        assert_eq!(graph.vertex("A").map(|v| (v.x, v.y)), Some((1.5, -2.0)));
    }
}
