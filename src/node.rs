/*!
# Node Representation

Vertices are identified by their label towards callers. Internally, every vertex is assigned a
dense `Node = u32` index on insertion which is used by all algorithms for bookkeeping
(`Vec`-indexed parent arrays, [`NodeBitSet`] markers, ...). Removing a vertex leaves a hole that
is skipped by all iterators; once holes outnumber live vertices the graph compacts its storage, so
indices are only stable between mutations.
*/

use serde::{Deserialize, Serialize};
use stream_bitset::bitset::BitSetImpl;

/// Internal dense index of a vertex
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// A 2D geographic coordinate attached to a vertex.
/// Only used by heuristics of the [`AStar`](crate::algo::AStar) search.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// L1-distance between two coordinates
    pub fn manhattan_distance(&self, other: &Coordinate) -> f64 {
        (self.lat - other.lat).abs() + (self.long - other.long).abs()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, long): (f64, f64)) -> Self {
        Self { lat, long }
    }
}
