/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate, built on top of the traits in
[`crate::ops`]. All algorithms are re-exported at the top level of this module, so you can simply
do:
```rust
use graphstudio::algo::*;
```
and gain access to traversals, spanning trees, strong connectivity, A*-search, coloring and
planarity bounds.

Algorithms are provided as extension traits implemented for every
[`LabeledGraph`](crate::ops::LabeledGraph). They take and return vertex labels; results are owned
snapshots that stay valid when the graph changes afterwards.
*/

mod astar;
mod coloring;
mod connectivity;
mod mst;
mod planarity;
mod traversal;

use crate::prelude::*;

pub use astar::*;
pub use coloring::*;
pub use connectivity::*;
pub use mst::*;
pub use planarity::*;
pub use traversal::*;
