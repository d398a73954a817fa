use std::collections::BTreeMap;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{ops::*, *};

/// Storage of a single vertex: its label, optional coordinate, and adjacency list
#[derive(Debug, Clone)]
struct VertexSlot {
    label: String,
    coordinate: Option<Coordinate>,
    adjacency: Vec<Neighbor>,
}

/// Authoritative record of an edge; endpoints are stored as node indices
#[derive(Debug, Clone)]
struct StoredEdge {
    origin: Node,
    destination: Node,
    weight: Weight,
    label: Option<String>,
}

/// A mutable labeled graph with weighted (multi-)edges.
///
/// Vertices live in an arena of slots indexed by [`Node`]; a hash map translates labels into
/// slots. Edges are stored once in an edge map ordered by their [`EdgeId`], while each vertex slot
/// keeps the derived adjacency list of `(neighbor, weight, edge id)` entries. Both are only ever
/// modified together by the methods of this struct.
///
/// Removed vertices leave empty slots. Once these outnumber the live vertices, the arena is
/// compacted (keeping the insertion order), so [`GraphNodeOrder::len`] never exceeds twice the
/// number of live vertices.
///
/// The orientation is fixed on construction. In an undirected graph an edge `{u, v}` is listed in
/// the adjacency lists of both `u` and `v`; in a directed graph only in the list of its origin.
///
/// # Examples
/// ```
/// use graphstudio::prelude::*;
///
/// let mut g = Graph::undirected();
/// let ab = g.add_edge("A", "B", 1.0);
/// g.add_edge("B", "C", 2.0);
///
/// assert_eq!(ab, "a1");
/// assert_eq!(g.number_of_nodes(), 3);
/// assert!(g.remove_vertex("B"));
/// assert_eq!(g.number_of_edges(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    slots: Vec<Option<VertexSlot>>,
    index: FxHashMap<String, Node>,
    edges: BTreeMap<EdgeId, StoredEdge>,
    edge_counter: u64,
}

impl Default for Graph {
    /// Empty undirected graph
    fn default() -> Self {
        Self::new(false)
    }
}

impl Graph {
    /// Creates an empty graph with the given orientation
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            slots: Vec::new(),
            index: FxHashMap::default(),
            edges: BTreeMap::new(),
            edge_counter: 0,
        }
    }

    /// Shorthand for `Graph::new(true)`
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Shorthand for `Graph::new(false)`
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a graph from a list of weighted edges `(origin, destination, weight)`.
    /// Ids are assigned automatically in iteration order.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::prelude::*;
    ///
    /// let g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "A", 3.0)]);
    /// assert_eq!(g.number_of_edges(), 2);
    /// assert!(g.is_directed());
    /// ```
    pub fn from_edges<I, S>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Weight)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new(directed);
        for (u, v, w) in edges {
            graph.add_edge(u.as_ref(), v.as_ref(), w);
        }
        graph
    }

    /// Adds a vertex if no vertex with this label exists.
    /// Returns *true* if the vertex was newly created.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        if self.index.contains_key(label) {
            return false;
        }
        self.insert_vertex(label);
        true
    }

    /// Returns the node of `label`, creating the vertex if necessary
    fn ensure_vertex(&mut self, label: &str) -> Node {
        match self.index.get(label) {
            Some(&u) => u,
            None => self.insert_vertex(label),
        }
    }

    fn insert_vertex(&mut self, label: &str) -> Node {
        assert!(self.slots.len() < INVALID_NODE as usize);

        let u = self.slots.len() as Node;
        self.slots.push(Some(VertexSlot {
            label: label.to_string(),
            coordinate: None,
            adjacency: Vec::new(),
        }));
        self.index.insert(label.to_string(), u);
        trace!(label, node = u, "vertex added");
        u
    }

    /// Adds an edge with an automatically assigned id and returns that id.
    /// Missing endpoints are created.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) -> EdgeId {
        self.add_edge_with(u, v, weight, None, None)
    }

    /// Adds an edge `u -> v` (or `u -- v` in an undirected graph) and returns its id.
    ///
    /// - Missing endpoints are created.
    /// - If `id` is `None`, the next free id of the form `a{k}` is assigned.
    /// - If an edge with the given `id` already exists, it is replaced.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::prelude::*;
    ///
    /// let mut g = Graph::directed();
    /// let id = g.add_edge_with("A", "B", 4.0, Some("ab"), Some("highway"));
    /// assert_eq!(id, "ab");
    ///
    /// let edge = g.edge("ab").unwrap();
    /// assert_eq!(edge.label.as_deref(), Some("highway"));
    /// assert!(edge.directed);
    /// ```
    pub fn add_edge_with(
        &mut self,
        u: &str,
        v: &str,
        weight: Weight,
        id: Option<&str>,
        label: Option<&str>,
    ) -> EdgeId {
        let id = match id {
            Some(id) => {
                if self.remove_edge(id) {
                    debug!(id, "replacing existing edge");
                }
                id.to_string()
            }
            None => self.next_edge_id(),
        };

        let origin = self.ensure_vertex(u);
        let destination = self.ensure_vertex(v);

        self.slot_mut(origin).adjacency.push(Neighbor {
            node: destination,
            weight,
            edge: id.clone(),
        });
        if !self.directed {
            self.slot_mut(destination).adjacency.push(Neighbor {
                node: origin,
                weight,
                edge: id.clone(),
            });
        }

        self.edges.insert(
            id.clone(),
            StoredEdge {
                origin,
                destination,
                weight,
                label: label.map(str::to_string),
            },
        );

        trace!(id = id.as_str(), u, v, weight, "edge added");
        id
    }

    /// Returns the next automatic id not used by any edge
    fn next_edge_id(&mut self) -> EdgeId {
        loop {
            self.edge_counter += 1;
            let id = format!("a{}", self.edge_counter);
            if !self.edges.contains_key(&id) {
                return id;
            }
        }
    }

    /// Removes the edge with the given id and its adjacency entries.
    /// Returns *false* if no such edge exists.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let Some(edge) = self.edges.remove(id) else {
            return false;
        };

        self.slot_mut(edge.origin)
            .adjacency
            .retain(|nb| nb.edge != id);
        if !self.directed && edge.destination != edge.origin {
            self.slot_mut(edge.destination)
                .adjacency
                .retain(|nb| nb.edge != id);
        }

        trace!(id, "edge removed");
        true
    }

    /// Removes a vertex together with all incident edges (incoming and outgoing).
    /// Returns *false* if no such vertex exists.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(&u) = self.index.get(label) else {
            return false;
        };

        // in directed graphs, incoming arcs are only visible in the edge map
        let incident = self
            .edges
            .iter()
            .filter(|(_, e)| e.origin == u || e.destination == u)
            .map(|(id, _)| id.clone())
            .collect_vec();

        for id in &incident {
            self.remove_edge(id);
        }

        self.slots[u as usize] = None;
        self.index.remove(label);

        debug!(label, removed_edges = incident.len(), "vertex removed");
        self.compact_if_sparse();
        true
    }

    /// Moves all live slots to the front of the arena if removed slots outnumber them,
    /// renumbering nodes in adjacency lists, edge records and the label index
    fn compact_if_sparse(&mut self) {
        let live = self.index.len();
        if self.slots.len() - live <= live {
            return;
        }

        let mut mapping = vec![INVALID_NODE; self.slots.len()];
        let old_slots = std::mem::take(&mut self.slots);
        for (u, slot) in old_slots.into_iter().enumerate() {
            if let Some(slot) = slot {
                mapping[u] = self.slots.len() as Node;
                self.slots.push(Some(slot));
            }
        }

        for slot in self.slots.iter_mut().flatten() {
            for nb in &mut slot.adjacency {
                nb.node = mapping[nb.node as usize];
            }
        }
        for edge in self.edges.values_mut() {
            edge.origin = mapping[edge.origin as usize];
            edge.destination = mapping[edge.destination as usize];
        }
        for u in self.index.values_mut() {
            *u = mapping[*u as usize];
        }

        debug!(
            before = mapping.len(),
            after = self.slots.len(),
            "compacted vertex arena"
        );
    }

    /// Attaches a coordinate to a vertex, overwriting a previous one
    pub fn set_coordinate(&mut self, label: &str, coordinate: Coordinate) -> Result<()> {
        let u = self.try_node_of(label)?;
        self.slot_mut(u).coordinate = Some(coordinate);
        Ok(())
    }

    /// Returns the coordinate of a vertex if the vertex exists and has one
    pub fn coordinate(&self, label: &str) -> Option<Coordinate> {
        self.node_of(label).and_then(|u| self.coordinate_of(u))
    }

    /// Returns *true* if a vertex with this label exists
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns *true* if an edge with this id exists
    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Iterates over all vertex labels in insertion order
    pub fn vertex_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().flatten().map(|slot| slot.label.as_str())
    }

    /// Returns an owned snapshot of the edge with the given id
    pub fn edge(&self, id: &str) -> Option<Edge> {
        self.edges
            .get_key_value(id)
            .map(|(id, e)| self.materialize(id, e))
    }

    /// Iterates over owned snapshots of all edges, ordered by id
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(id, e)| self.materialize(id, e))
    }

    /// Iterates over all edge ids in sorted order
    pub fn edge_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.keys().map(String::as_str)
    }

    /// Iterates over `(id, origin, destination)` of all edges, ordered by id
    pub(crate) fn edge_endpoints(&self) -> impl Iterator<Item = (&str, Node, Node)> + '_ {
        self.edges
            .iter()
            .map(|(id, e)| (id.as_str(), e.origin, e.destination))
    }

    /// Returns the adjacency list of a vertex with neighbors given by label
    pub fn neighbors(&self, label: &str) -> Result<Vec<LabeledNeighbor>> {
        let u = self.try_node_of(label)?;
        Ok(self
            .adjacency_of(u)
            .iter()
            .map(|nb| LabeledNeighbor {
                label: self.label_of(nb.node).to_string(),
                weight: nb.weight,
                edge: nb.edge.clone(),
            })
            .collect())
    }

    fn materialize(&self, id: &str, edge: &StoredEdge) -> Edge {
        Edge {
            id: id.to_string(),
            origin: self.label_of(edge.origin).to_string(),
            destination: self.label_of(edge.destination).to_string(),
            weight: edge.weight,
            label: edge.label.clone(),
            directed: self.directed,
        }
    }

    fn slot(&self, u: Node) -> &VertexSlot {
        self.slots[u as usize]
            .as_ref()
            .unwrap_or_else(|| panic!("node {u} was removed"))
    }

    fn slot_mut(&mut self, u: Node) -> &mut VertexSlot {
        self.slots[u as usize]
            .as_mut()
            .unwrap_or_else(|| panic!("node {u} was removed"))
    }
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.index.len() as NumNodes
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(u, slot)| slot.as_ref().map(|_| u as Node))
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn adjacency_of(&self, u: Node) -> &[Neighbor] {
        &self.slot(u).adjacency
    }
}

impl GraphLabels for Graph {
    fn label_of(&self, u: Node) -> &str {
        &self.slot(u).label
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    fn coordinate_of(&self, u: Node) -> Option<Coordinate> {
        self.slot(u).coordinate
    }
}
