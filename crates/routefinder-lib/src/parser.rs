//! Parser for the plain-text graph format.
//!
//! ```text
//! <N>
//! <name_1> <x_1> <y_1>
//! ...
//! <name_N> <x_N> <y_N>
//! <row_1>        N numbers; column j of row i is the weight of edge i -> j
//! ...
//! <row_N>
//! ```
//!
//! A matrix value of zero (or less) means "no edge".

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::vertex::Vertex;

/// How positive matrix values are turned into edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightMode {
    /// Matrix values are explicit edge weights.
    #[default]
    Weighted,
    /// Matrix values only mark presence; weights default to the Euclidean
    /// distance between the endpoints.
    Unweighted,
}

/// Parse the text format into a [`Graph`].
///
/// The whole input is validated before the graph is returned; any problem is
/// reported with its 1-based line number.
pub fn parse_graph(input: &str, mode: WeightMode) -> Result<Graph> {
    let lines: Vec<&str> = input.lines().map(|line| line.trim_end_matches('\r')).collect();
    let line_at = |index: usize| lines.get(index).copied().unwrap_or("");

    let count_text = line_at(0).trim();
    if count_text.is_empty() {
        return Err(Error::parse(1, "missing vertex count"));
    }
    let count: usize = count_text
        .parse()
        .map_err(|_| Error::parse(1, format!("invalid vertex count '{count_text}'")))?;

    let mut graph = Graph::new();
    let mut vertices = Vec::with_capacity(count.min(lines.len()));
    for index in 1..=count {
        let line_no = index + 1;
        let vertex = parse_vertex(line_at(index), line_no)?;
        if !graph.add_vertex(vertex.clone()) {
            return Err(Error::DuplicateVertex { name: vertex.name });
        }
        vertices.push(vertex);
    }

    for (row, from) in vertices.iter().enumerate() {
        let line_index = count + 1 + row;
        let line_no = line_index + 1;
        if line_index >= lines.len() {
            return Err(Error::parse(line_no, format!("missing matrix row for {}", from.name)));
        }
        let values = parse_row(line_at(line_index), count, line_no)?;

        for (column, value) in values.into_iter().enumerate() {
            if value <= 0.0 {
                continue;
            }
            let weight = match mode {
                WeightMode::Weighted => Some(value),
                WeightMode::Unweighted => None,
            };
            graph.add_edge(from, &vertices[column], weight)?;
        }
    }

    debug!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        ?mode,
        "parsed text graph"
    );
    Ok(graph)
}

fn parse_vertex(line: &str, line_no: usize) -> Result<Vertex> {
    let mut tokens = line.split_whitespace();
    let name = tokens
        .next()
        .ok_or_else(|| Error::parse(line_no, "missing vertex definition"))?;
    let x = parse_number(tokens.next(), line_no, &format!("x coordinate of {name}"))?;
    let y = parse_number(tokens.next(), line_no, &format!("y coordinate of {name}"))?;
    if let Some(extra) = tokens.next() {
        return Err(Error::parse(
            line_no,
            format!("unexpected token '{extra}' after coordinates of {name}"),
        ));
    }
    Ok(Vertex::new(name, x, y))
}

fn parse_row(line: &str, count: usize, line_no: usize) -> Result<Vec<f64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != count {
        return Err(Error::parse(
            line_no,
            format!("expected {count} matrix values, found {}", tokens.len()),
        ));
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(column, token)| {
            parse_number(Some(token), line_no, &format!("matrix value in column {}", column + 1))
        })
        .collect()
}

fn parse_number(token: Option<&str>, line_no: usize, what: &str) -> Result<f64> {
    let token = token.ok_or_else(|| Error::parse(line_no, format!("missing {what}")))?;
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::parse(
            line_no,
            format!("{what} is not a number: '{token}'"),
        )),
    }
}
