use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Orientation a graph was constructed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Directed => write!(f, "directed"),
            Direction::Undirected => write!(f, "undirected"),
        }
    }
}

/// Errors raised by precondition checks of graph operations.
///
/// All checks happen before any computation starts: an operation either fails with one of these
/// or returns a complete result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A referenced vertex does not exist
    #[error("vertex `{0}` does not exist")]
    VertexNotFound(String),

    /// The algorithm is not defined for the graph's orientation
    #[error("{algorithm} is only defined on {required} graphs")]
    InvalidConfiguration {
        algorithm: &'static str,
        required: Direction,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
