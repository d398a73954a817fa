/*!
# Graph Representation

[`Graph`] is the single storage backend of this crate: a labeled, weighted multigraph that is
either directed or undirected. Its matrix projections live in [`matrix`].
*/

use crate::{ops::*, *};

mod graph;
pub mod matrix;

pub use graph::*;
pub use matrix::{AdjacencyMatrix, IncidenceMatrix};
