/*!
# Graph Operations

Capability traits every graph representation provides. Algorithms in [`crate::algo`] are written
against these traits (most of them via the [`LabeledGraph`] shorthand) and implemented as
extension traits on the graph itself.

Algorithms work on dense [`Node`] indices; [`GraphLabels`] translates between indices and the
labels callers use.
*/

use fxhash::FxHashSet;

use crate::*;

/// Provides information about the orientation of a graph
pub trait GraphType {
    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns the orientation of the graph
    fn direction(&self) -> Direction {
        Direction::from_directed(self.is_directed())
    }

    /// Fails with [`GraphError::InvalidConfiguration`] unless the graph has the `required`
    /// orientation
    fn require_direction(&self, algorithm: &'static str, required: Direction) -> Result<()> {
        if self.direction() == required {
            Ok(())
        } else {
            Err(GraphError::InvalidConfiguration {
                algorithm,
                required,
            })
        }
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of (live) nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns an upper bound on all live node indices.
    /// Use this to size `Vec`s and [`NodeBitSet`]s indexed by [`Node`].
    fn len(&self) -> usize;

    /// Returns an iterator over all live nodes in insertion order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the adjacency entries of `u` in insertion order.
    /// For directed graphs these are the out-going arcs.
    /// ** Panics if `u` is not a live node **
    fn adjacency_of(&self, u: Node) -> &[Neighbor];

    /// Returns an iterator over the (out-)neighbors of `u`,
    /// including repetitions for parallel edges
    /// ** Panics if `u` is not a live node **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency_of(u).iter().map(|n| n.node)
    }

    /// Computes for every node the list of nodes with an adjacency entry pointing to it.
    /// Entries appear in the order of `self.vertices()`.
    fn in_neighborhoods(&self) -> Vec<Vec<Node>> {
        let mut in_nbs = vec![Vec::new(); self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_nbs[v as usize].push(u);
            }
        }
        in_nbs
    }

    /// Computes for every node the set of distinct nodes it shares an edge with, ignoring
    /// orientation and self-loops
    fn symmetric_neighborhoods(&self) -> Vec<FxHashSet<Node>> {
        let mut nbs = vec![FxHashSet::default(); self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u).filter(|&v| v != u) {
                nbs[u as usize].insert(v);
                nbs[v as usize].insert(u);
            }
        }
        nbs
    }
}

/// Translation between internal [`Node`] indices and the labels known to callers
pub trait GraphLabels: GraphNodeOrder {
    /// Returns the label of `u`
    /// ** Panics if `u` is not a live node **
    fn label_of(&self, u: Node) -> &str;

    /// Returns the node carrying `label` if it exists
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Returns the coordinate attached to `u` if any
    /// ** Panics if `u` is not a live node **
    fn coordinate_of(&self, u: Node) -> Option<Coordinate>;

    /// Returns the node carrying `label` or fails with [`GraphError::VertexNotFound`]
    fn try_node_of(&self, label: &str) -> Result<Node> {
        self.node_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    /// Maps a sequence of nodes to owned labels
    fn labels_of<I>(&self, nodes: I) -> Vec<String>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.label_of(u).to_string())
            .collect()
    }
}

/// Shorthand for everything the algorithms in [`crate::algo`] require
pub trait LabeledGraph: AdjacencyList + GraphLabels + GraphEdgeOrder + GraphType {}

impl<G> LabeledGraph for G where G: AdjacencyList + GraphLabels + GraphEdgeOrder + GraphType {}
