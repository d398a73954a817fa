/*!
Breadth- and depth-first traversals with edge classification.

Both traversals start at a single seed and record
- the **parent** of every vertex (the vertex it was first discovered from),
- the **order** in which vertices were visited, and
- every directed pair `(v, w)` **explored** while scanning adjacency lists.

A pair is a *tree edge* if it discovered `w`, and a *non-tree edge* (back-, forward- or cross-edge)
otherwise. Parallel edges are explored once.

The depth-first search uses an explicit stack of `(node, next adjacency position)` frames, which
reproduces the visiting order and parents of the recursive formulation exactly.
*/

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::*;

/// Classification of an explored pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// The pair discovered its second vertex
    Tree,
    /// The second vertex was already discovered when the pair was examined
    NonTree,
}

/// Result of a [`Traversal`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// Parent of each vertex of the graph; `None` for the start and all unreached vertices
    pub parent: BTreeMap<String, Option<String>>,
    /// Vertices in the order they were visited
    pub order: Vec<String>,
    /// All directed pairs examined during the walk
    pub explored: BTreeSet<(String, String)>,
}

impl TraversalResult {
    /// Returns the `(parent, child)` pairs of the traversal tree
    pub fn tree_edges(&self) -> Vec<(String, String)> {
        self.parent
            .iter()
            .filter_map(|(child, p)| p.as_ref().map(|p| (p.clone(), child.clone())))
            .collect()
    }

    /// Returns all explored pairs that did not discover a vertex
    pub fn non_tree_edges(&self) -> Vec<(String, String)> {
        self.explored
            .iter()
            .filter(|(v, w)| !self.is_tree_pair(v, w))
            .cloned()
            .collect()
    }

    /// Classifies the pair `(v, w)` or returns `None` if it was never explored
    pub fn edge_kind(&self, v: &str, w: &str) -> Option<EdgeKind> {
        if !self.explored.contains(&(v.to_string(), w.to_string())) {
            return None;
        }

        Some(if self.is_tree_pair(v, w) {
            EdgeKind::Tree
        } else {
            EdgeKind::NonTree
        })
    }

    /// Returns *true* if `label` was reached from the start
    pub fn reached(&self, label: &str) -> bool {
        self.order.iter().any(|x| x == label)
    }

    fn is_tree_pair(&self, v: &str, w: &str) -> bool {
        matches!(self.parent.get(w), Some(Some(p)) if p == v)
    }
}

/// Bookkeeping shared by both traversals
struct Walk<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    parent: Vec<Option<Node>>,
    order: Vec<Node>,
    explored: FxHashSet<(Node, Node)>,
}

impl<'a, G> Walk<'a, G>
where
    G: LabeledGraph,
{
    fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.len() as Node);
        visited.set_bit(start);

        Self {
            graph,
            visited,
            parent: vec![None; graph.len()],
            order: Vec::with_capacity(graph.len()),
            explored: FxHashSet::default(),
        }
    }

    /// Records the pair `(v, w)` as explored and returns *true* if it discovered `w`
    fn examine(&mut self, v: Node, w: Node) -> bool {
        self.explored.insert((v, w));
        if self.visited.set_bit(w) {
            return false;
        }

        self.parent[w as usize] = Some(v);
        true
    }

    fn into_result(self) -> TraversalResult {
        let graph = self.graph;
        TraversalResult {
            parent: graph
                .vertices()
                .map(|u| {
                    (
                        graph.label_of(u).to_string(),
                        self.parent[u as usize].map(|p| graph.label_of(p).to_string()),
                    )
                })
                .collect(),
            order: graph.labels_of(self.order.iter().copied()),
            explored: self
                .explored
                .iter()
                .map(|&(v, w)| (graph.label_of(v).to_string(), graph.label_of(w).to_string()))
                .collect(),
        }
    }
}

/// Provides breadth- and depth-first traversals on labeled graphs
pub trait Traversal: LabeledGraph {
    /// Traverses all vertices reachable from `start` in breadth-first order.
    /// Fails if `start` does not exist.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(false, [("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0)]);
    /// let bfs = g.bfs("A").unwrap();
    ///
    /// assert_eq!(bfs.order, vec!["A", "B", "C", "D"]);
    /// assert_eq!(bfs.parent["D"].as_deref(), Some("B"));
    /// ```
    fn bfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.try_node_of(start)?;
        let mut walk = Walk::new(self, start);
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            walk.order.push(v);
            for w in self.neighbors_of(v) {
                if walk.examine(v, w) {
                    queue.push_back(w);
                }
            }
        }

        debug!(
            start = self.label_of(start),
            visited = walk.order.len(),
            explored = walk.explored.len(),
            "bfs finished"
        );
        Ok(walk.into_result())
    }

    /// Traverses all vertices reachable from `start` in depth-first order, following adjacency
    /// lists in their stored order. Fails if `start` does not exist.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(false, [("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0)]);
    /// let dfs = g.dfs("A").unwrap();
    ///
    /// assert_eq!(dfs.order, vec!["A", "B", "D", "C"]);
    /// assert_eq!(dfs.edge_kind("B", "A"), Some(EdgeKind::NonTree));
    /// ```
    fn dfs(&self, start: &str) -> Result<TraversalResult> {
        let start = self.try_node_of(start)?;
        let mut walk = Walk::new(self, start);
        walk.order.push(start);

        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (v, pos) = *frame;
            frame.1 += 1;

            match self.adjacency_of(v).get(pos) {
                Some(nb) => {
                    let w = nb.node;
                    if walk.examine(v, w) {
                        walk.order.push(w);
                        stack.push((w, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            start = self.label_of(start),
            visited = walk.order.len(),
            explored = walk.explored.len(),
            "dfs finished"
        );
        Ok(walk.into_result())
    }
}

impl<G> Traversal for G where G: LabeledGraph {}
