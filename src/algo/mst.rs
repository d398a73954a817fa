/*!
# Minimum Spanning Trees

Prim's algorithm on undirected graphs. The tree grows from a start vertex by repeatedly taking the
lightest edge crossing the cut between tree vertices and the remaining vertices.

Among several crossing edges of minimum weight, the first one encountered wins, where tree
vertices are scanned in insertion order and each adjacency list in stored order.
On disconnected graphs the result spans the component of the start vertex only.
*/

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::*;

/// Result of [`MinimumSpanningTree::prim`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// Vertices covered by the tree
    pub vertices: BTreeSet<String>,
    /// Ids of the selected edges in the order they were taken
    pub edges: Vec<EdgeId>,
    /// Sum of the weights of all selected edges
    pub total_weight: Weight,
}

impl SpanningTree {
    /// Returns *true* if the tree covers all vertices of `graph`
    pub fn is_spanning<G: GraphNodeOrder>(&self, graph: &G) -> bool {
        self.vertices.len() == graph.number_of_nodes() as usize
    }
}

pub trait MinimumSpanningTree: LabeledGraph {
    /// Computes a minimum spanning tree with Prim's algorithm, starting at `start` or at the
    /// first inserted vertex if `start` is `None`.
    ///
    /// Fails if the graph is directed or if `start` does not exist.
    /// An empty graph yields an empty tree.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);
    /// let mst = g.prim(None).unwrap();
    ///
    /// assert_eq!(mst.edges, vec!["a1", "a2"]);
    /// assert_eq!(mst.total_weight, 3.0);
    /// assert!(mst.is_spanning(&g));
    /// ```
    fn prim(&self, start: Option<&str>) -> Result<SpanningTree> {
        self.require_direction("Prim", Direction::Undirected)?;

        let start = match start {
            Some(label) => Some(self.try_node_of(label)?),
            None => self.vertices().next(),
        };
        let Some(start) = start else {
            return Ok(SpanningTree::default());
        };

        let mut in_tree = NodeBitSet::new(self.len() as Node);
        in_tree.set_bit(start);

        let mut edges = Vec::new();
        let mut total_weight = 0.0;
        let mut missing = self.number_of_nodes() - 1;

        while missing > 0 {
            let mut best: Option<&Neighbor> = None;
            for u in self.vertices().filter(|&u| in_tree.get_bit(u)) {
                for nb in self.adjacency_of(u) {
                    if !in_tree.get_bit(nb.node) && best.is_none_or(|b| nb.weight < b.weight) {
                        best = Some(nb);
                    }
                }
            }

            // no crossing edge left: the graph is disconnected
            let Some(best) = best else {
                break;
            };

            trace!(
                edge = best.edge.as_str(),
                weight = best.weight,
                "prim selects edge"
            );
            in_tree.set_bit(best.node);
            edges.push(best.edge.clone());
            total_weight += best.weight;
            missing -= 1;
        }

        let tree = SpanningTree {
            vertices: self
                .vertices()
                .filter(|&u| in_tree.get_bit(u))
                .map(|u| self.label_of(u).to_string())
                .collect(),
            edges,
            total_weight,
        };

        debug!(
            start = self.label_of(start),
            edges = tree.edges.len(),
            total_weight,
            spanning = missing == 0,
            "prim finished"
        );
        Ok(tree)
    }
}

impl<G> MinimumSpanningTree for G where G: LabeledGraph {}
