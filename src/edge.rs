use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::Node;

/// Identifier of an edge. Unique within a graph.
pub type EdgeId = String;

/// Edge weights are plain reals; the store does not validate their sign.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Weight used if a caller does not provide one
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Owned snapshot of an edge as exposed to callers.
///
/// Endpoints are given by their labels; holding an `Edge` does not borrow the graph.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub origin: String,
    pub destination: String,
    pub weight: Weight,
    pub label: Option<String>,
    pub directed: bool,
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// Returns the endpoint opposite to `u` if `u` is an endpoint of this edge
    pub fn opposite(&self, u: &str) -> Option<&str> {
        if self.origin == u {
            Some(&self.destination)
        } else if self.destination == u {
            Some(&self.origin)
        } else {
            None
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(
            f,
            "{}: {}{arrow}{} ({})",
            self.id, self.origin, self.destination, self.weight
        )?;
        if let Some(label) = &self.label {
            write!(f, " [{label}]")?;
        }
        Ok(())
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Entry of the adjacency index: a single hop to `node` via edge `edge`.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
    pub edge: EdgeId,
}

/// Owned, label-based version of a [`Neighbor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledNeighbor {
    pub label: String,
    pub weight: Weight,
    pub edge: EdgeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(directed: bool) -> Edge {
        Edge {
            id: "a1".into(),
            origin: "A".into(),
            destination: "B".into(),
            weight: 2.5,
            label: Some("road".into()),
            directed,
        }
    }

    #[test]
    fn display() {
        assert_eq!(edge(false).to_string(), "a1: A--B (2.5) [road]");
        assert_eq!(format!("{:?}", edge(true)), "a1: A->B (2.5) [road]");
    }

    #[test]
    fn opposite() {
        let e = edge(false);
        assert_eq!(e.opposite("A"), Some("B"));
        assert_eq!(e.opposite("B"), Some("A"));
        assert_eq!(e.opposite("C"), None);
        assert!(!e.is_loop());
    }
}
