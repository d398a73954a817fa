//! # Matrix Views
//!
//! Dense projections of a [`Graph`]. Rows (and for adjacency matrices, columns) follow the
//! vertex labels in sorted order; incidence matrix columns follow the sorted edge ids.
//! Both are owned snapshots and stay valid (but stale) after the graph is mutated.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::*;

/// Square 0/1-matrix with a `1` at `[i][j]` iff some edge leads from `vertices[i]` to `vertices[j]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    pub vertices: Vec<String>,
    pub matrix: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Returns the entry for the pair `(u, v)` if both labels are rows of the matrix
    pub fn get(&self, u: &str, v: &str) -> Option<u8> {
        let i = self.position(u)?;
        let j = self.position(v)?;
        Some(self.matrix[i][j])
    }

    /// Returns *true* if the matrix equals its transpose
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| (0..i).all(|j| self.matrix[i][j] == self.matrix[j][i]))
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.vertices
            .binary_search_by(|x| x.as_str().cmp(label))
            .ok()
    }
}

/// `|V| x |E|`-matrix. For each edge, its origin row holds `+1` and its destination row holds
/// `+1` (undirected) or `-1` (directed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceMatrix {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeId>,
    pub matrix: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    /// Returns the entry for a vertex and an edge id if both are part of the matrix
    pub fn get(&self, vertex: &str, edge: &str) -> Option<i8> {
        let i = self
            .vertices
            .binary_search_by(|x| x.as_str().cmp(vertex))
            .ok()?;
        let j = self.edges.binary_search_by(|x| x.as_str().cmp(edge)).ok()?;
        Some(self.matrix[i][j])
    }
}

impl Graph {
    /// Returns the vertices sorted by label and the row assigned to each node
    fn sorted_rows(&self) -> (Vec<String>, Vec<usize>) {
        let nodes = self
            .vertices()
            .sorted_by(|&u, &v| self.label_of(u).cmp(self.label_of(v)))
            .collect_vec();

        let mut row_of = vec![usize::MAX; self.len()];
        for (i, &u) in nodes.iter().enumerate() {
            row_of[u as usize] = i;
        }

        (self.labels_of(nodes), row_of)
    }

    /// Computes the adjacency matrix. Parallel edges collapse into a single `1`.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [("B", "A", 1.0), ("B", "A", 2.0)]);
    /// let adj = g.adjacency_matrix();
    ///
    /// assert_eq!(adj.vertices, vec!["A", "B"]);
    /// assert_eq!(adj.matrix, vec![vec![0, 0], vec![1, 0]]);
    /// ```
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let (vertices, row_of) = self.sorted_rows();
        let mut matrix = vec![vec![0u8; vertices.len()]; vertices.len()];

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                matrix[row_of[u as usize]][row_of[v as usize]] = 1;
            }
        }

        AdjacencyMatrix { vertices, matrix }
    }

    /// Computes the incidence matrix.
    ///
    /// A directed self-loop ends up as `-1` as the destination entry is written last.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [("A", "B", 1.0)]);
    /// let inc = g.incidence_matrix();
    ///
    /// assert_eq!(inc.edges, vec!["a1"]);
    /// assert_eq!(inc.matrix, vec![vec![1], vec![-1]]);
    /// ```
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        let (vertices, row_of) = self.sorted_rows();
        let mut edges = Vec::with_capacity(self.number_of_edges() as usize);
        let mut matrix = vec![vec![0i8; self.number_of_edges() as usize]; vertices.len()];

        let head = if self.is_directed() { -1 } else { 1 };
        for (j, (id, origin, destination)) in self.edge_endpoints().enumerate() {
            edges.push(id.to_string());
            matrix[row_of[origin as usize]][j] = 1;
            matrix[row_of[destination as usize]][j] = head;
        }

        IncidenceMatrix {
            vertices,
            edges,
            matrix,
        }
    }
}
