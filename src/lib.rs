/*!
`graphstudio` is a small graph engine for **labeled**, **weighted** graphs that are either
directed or undirected, together with a fixed suite of classical algorithms.

# Representation

Callers identify vertices by string labels and edges by string ids. Internally, the
[`Graph`](crate::repr::Graph) stores vertices in an arena of slots indexed by dense
[`Node`]s (`u32`), edges in a map `id -> record`, and keeps a derived adjacency list of
`(neighbor, weight, edge id)` entries per vertex. Indices never escape: all algorithm results are
owned, label-based snapshots that stay valid after further mutations of the graph.

Vertices can optionally carry a [`Coordinate`] used by heuristics of the A*-search.

### Directed vs Undirected

The orientation is fixed when the graph is constructed:

- In an **undirected** graph, an edge `{u, v}` is listed in the adjacency lists of both endpoints.
- In a **directed** graph, the edge `u -> v` is only listed in the adjacency list of `u`.

# Usage

There are *3* submodules you probably want to interact with:
- [`prelude`] includes the graph, its matrix views, and all basic graph operation traits,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as
  BFS/DFS (`graph.bfs("A")`), Prim, Roy's SCC algorithm, A*, Welsh-Powell and a planarity test,
- [`io`] includes the importer for rows of a city/distance table and a CSV reader for them.

In most use-cases, `use graphstudio::{prelude::*, algo::*};` suffices for your needs.

```
use graphstudio::{prelude::*, algo::*};

let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]);

let mst = g.prim(Some("A")).unwrap();
assert_eq!(mst.edges, vec!["a1", "a2"]);
assert_eq!(mst.total_weight, 3.0);

let bfs = g.bfs("A").unwrap();
assert_eq!(bfs.order, vec!["A", "B", "C"]);
```

Errors of precondition checks (unknown vertices, wrong orientation) are reported as
[`GraphError`]. Nothing in this crate installs a `tracing` subscriber; algorithms emit `debug`
and `trace` events that a host application may collect.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `graphstudio::prelude` includes definitions for nodes, edges, errors, all basic graph operation
/// traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
