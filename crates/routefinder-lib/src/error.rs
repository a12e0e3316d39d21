use thiserror::Error;

/// Convenient result alias for the routefinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a vertex name could not be found in the graph.
    #[error("unknown vertex: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a path is extended to a vertex that is not adjacent to its tail.
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    /// Raised when an explicit edge weight is negative or not finite.
    #[error("invalid weight {weight} for edge {from} -> {to}; weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a graph source declares the same vertex name twice.
    #[error("duplicate vertex name {name}")]
    DuplicateVertex { name: String },

    /// Raised when the text graph format is malformed.
    #[error("invalid graph input at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Raised when no route could be found between two vertices.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any vertices.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON encoding and decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Unknown vertex without any name suggestions.
    pub(crate) fn unknown_vertex(name: impl Into<String>) -> Self {
        Error::UnknownVertex {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
