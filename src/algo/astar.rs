/*!
# A*-Search

Shortest paths between two vertices guided by a [`Heuristic`] over vertex coordinates.

The search is configured via the [`AStar`] builder; the default heuristic is the
[`Manhattan`] distance between a vertex's coordinate and the goal's coordinate, falling back to
`0` whenever one of them is missing (which turns the search into Dijkstra's algorithm).

The frontier is ordered by `f = g + h`, then by `g`, then by label, so that ties are broken
deterministically.
*/

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::*;

/// Estimates the remaining distance from a vertex to the goal based on their coordinates.
///
/// Implemented for any `Fn(Option<Coordinate>, Option<Coordinate>) -> f64`.
pub trait Heuristic {
    /// Returns the estimate for a vertex at `from` if the goal is at `goal`
    fn estimate(&self, from: Option<Coordinate>, goal: Option<Coordinate>) -> f64;
}

/// `|Δlat| + |Δlong|`, or `0` if a coordinate is missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Option<Coordinate>, goal: Option<Coordinate>) -> f64 {
        match (from, goal) {
            (Some(from), Some(goal)) => from.manhattan_distance(&goal),
            _ => 0.0,
        }
    }
}

/// Constant `0`; turns A* into Dijkstra's algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _: Option<Coordinate>, _: Option<Coordinate>) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(Option<Coordinate>, Option<Coordinate>) -> f64,
{
    fn estimate(&self, from: Option<Coordinate>, goal: Option<Coordinate>) -> f64 {
        self(from, goal)
    }
}

/// Result of an A*-search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Labels from start to goal (both included); empty if the goal is unreachable
    pub path: Vec<String>,
    /// Total weight of the path; infinite if the goal is unreachable
    pub cost: Weight,
}

impl ShortestPath {
    /// The outcome of a search whose frontier ran empty
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: Weight::INFINITY,
        }
    }

    /// Returns *true* if a path was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Entry of the frontier. Ordered such that the `BinaryHeap` pops the minimum.
struct FrontierEntry<'a> {
    f: f64,
    g: f64,
    label: &'a str,
    node: Node,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.label.cmp(self.label))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

/// Configurable A*-search.
///
/// # Examples
/// ```
/// use graphstudio::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(false, [("A", "B", 2.0), ("B", "C", 2.0), ("A", "C", 5.0)]);
///
/// let res = AStar::new()
///     .heuristic(ZeroHeuristic)
///     .search(&g, "A", "C")
///     .unwrap();
/// assert_eq!(res.path, vec!["A", "B", "C"]);
/// assert_eq!(res.cost, 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H = Manhattan> {
    heuristic: H,
}

impl AStar {
    /// Creates a search using the [`Manhattan`] heuristic
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> AStar<H>
where
    H: Heuristic,
{
    /// Replaces the heuristic
    pub fn heuristic<H2: Heuristic>(self, heuristic: H2) -> AStar<H2> {
        AStar { heuristic }
    }

    /// Searches for a shortest path from `start` to `goal`.
    ///
    /// Fails if either vertex does not exist. If the goal cannot be reached,
    /// [`ShortestPath::unreachable`] is returned.
    pub fn search<G>(&self, graph: &G, start: &str, goal: &str) -> Result<ShortestPath>
    where
        G: LabeledGraph,
    {
        let start = graph.try_node_of(start)?;
        let goal = graph.try_node_of(goal)?;

        let goal_coordinate = graph.coordinate_of(goal);
        let h = |u: Node| {
            self.heuristic
                .estimate(graph.coordinate_of(u), goal_coordinate)
        };

        let mut best_g = vec![Weight::INFINITY; graph.len()];
        let mut parent: Vec<Option<Node>> = vec![None; graph.len()];
        let mut closed = NodeBitSet::new(graph.len() as Node);
        let mut frontier = BinaryHeap::new();

        best_g[start as usize] = 0.0;
        frontier.push(FrontierEntry {
            f: h(start),
            g: 0.0,
            label: graph.label_of(start),
            node: start,
        });

        let mut expanded = 0usize;
        while let Some(FrontierEntry { node: u, g, f, .. }) = frontier.pop() {
            if closed.get_bit(u) {
                continue;
            }

            if u == goal {
                let mut path = vec![goal];
                let mut x = goal;
                while let Some(p) = parent[x as usize] {
                    path.push(p);
                    x = p;
                }
                path.reverse();

                debug!(
                    start = graph.label_of(start),
                    goal = graph.label_of(goal),
                    cost = g,
                    expanded,
                    "a* reached goal"
                );
                return Ok(ShortestPath {
                    path: graph.labels_of(path),
                    cost: g,
                });
            }

            closed.set_bit(u);
            expanded += 1;
            trace!(node = graph.label_of(u), g, f, "a* expands");

            for nb in graph.adjacency_of(u) {
                let v = nb.node;
                if closed.get_bit(v) {
                    continue;
                }

                let tentative = g + nb.weight;
                if tentative < best_g[v as usize] {
                    best_g[v as usize] = tentative;
                    parent[v as usize] = Some(u);
                    frontier.push(FrontierEntry {
                        f: tentative + h(v),
                        g: tentative,
                        label: graph.label_of(v),
                        node: v,
                    });
                }
            }
        }

        debug!(
            start = graph.label_of(start),
            goal = graph.label_of(goal),
            expanded,
            "a* exhausted frontier"
        );
        Ok(ShortestPath::unreachable())
    }

    /// Computes the heuristic value of every vertex with respect to `goal`.
    /// Fails if `goal` does not exist.
    pub fn heuristic_table<G>(&self, graph: &G, goal: &str) -> Result<BTreeMap<String, f64>>
    where
        G: LabeledGraph,
    {
        let goal = graph.try_node_of(goal)?;
        let goal_coordinate = graph.coordinate_of(goal);

        Ok(graph
            .vertices()
            .map(|u| {
                (
                    graph.label_of(u).to_string(),
                    self.heuristic
                        .estimate(graph.coordinate_of(u), goal_coordinate),
                )
            })
            .collect())
    }
}

/// A*-search directly on graphs with default settings
pub trait ShortestPaths: LabeledGraph {
    /// Shortest path from `start` to `goal` using the [`Manhattan`] heuristic.
    /// See [`AStar::search`].
    fn a_star(&self, start: &str, goal: &str) -> Result<ShortestPath> {
        AStar::new().search(self, start, goal)
    }

    /// Shortest path from `start` to `goal` using a custom heuristic.
    /// See [`AStar::search`].
    fn a_star_with<H>(&self, start: &str, goal: &str, heuristic: H) -> Result<ShortestPath>
    where
        H: Heuristic,
    {
        AStar::new().heuristic(heuristic).search(self, start, goal)
    }

    /// [`Manhattan`] estimate of every vertex with respect to `goal`.
    /// See [`AStar::heuristic_table`].
    fn heuristic_table(&self, goal: &str) -> Result<BTreeMap<String, f64>> {
        AStar::new().heuristic_table(self, goal)
    }
}

impl<G> ShortestPaths for G where G: LabeledGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_with_coordinates() {
        let mut g = Graph::from_edges(
            false,
            [
                ("A", "B", 1.0),
                ("B", "D", 1.0),
                ("A", "C", 1.0),
                ("C", "D", 3.0),
            ],
        );
        let coordinates = [
            ("A", 0.0, 0.0),
            ("B", 1.0, 0.0),
            ("C", 0.0, 1.0),
            ("D", 2.0, 0.0),
        ];
        for (label, lat, long) in coordinates {
            g.set_coordinate(label, Coordinate::new(lat, long)).unwrap();
        }

        let res = g.a_star("A", "D").unwrap();
        assert_eq!(res.path, vec!["A", "B", "D"]);
        assert_eq!(res.cost, 2.0);
        assert!(res.is_reachable());

        let table = g.heuristic_table("D").unwrap();
        assert_eq!(table["A"], 2.0);
        assert_eq!(table["B"], 1.0);
        assert_eq!(table["C"], 3.0);
        assert_eq!(table["D"], 0.0);
    }

    #[test]
    fn missing_coordinates_degrade_to_zero() {
        let mut g = Graph::from_edges(false, [("A", "B", 1.0)]);
        g.set_coordinate("A", Coordinate::new(5.0, 5.0)).unwrap();

        let table = g.heuristic_table("B").unwrap();
        assert_eq!(table["A"], 0.0);
        assert_eq!(table["B"], 0.0);
        assert_eq!(Manhattan.estimate(Some(Coordinate::new(1.0, 1.0)), None), 0.0);
    }

    #[test]
    fn ties_broken_by_label() {
        // both routes cost 2; `B` sorts before `Z` although `Z` was inserted first
        let g = Graph::from_edges(
            false,
            [
                ("A", "Z", 1.0),
                ("A", "B", 1.0),
                ("Z", "D", 1.0),
                ("B", "D", 1.0),
            ],
        );
        let res = g.a_star("A", "D").unwrap();
        assert_eq!(res.path, vec!["A", "B", "D"]);
        assert_eq!(res.cost, 2.0);
    }

    #[test]
    fn start_equals_goal() {
        let g = Graph::from_edges(true, [("A", "B", 1.0)]);
        let res = g.a_star("A", "A").unwrap();
        assert_eq!(res.path, vec!["A"]);
        assert_eq!(res.cost, 0.0);
    }

    #[test]
    fn unreachable_goal() {
        let g = Graph::from_edges(true, [("A", "B", 1.0)]);
        let res = g.a_star("B", "A").unwrap();
        assert_eq!(res, ShortestPath::unreachable());
        assert!(!res.is_reachable());
        assert!(res.cost.is_infinite());
    }

    #[test]
    fn missing_vertices() {
        let g = Graph::from_edges(true, [("A", "B", 1.0)]);
        assert_eq!(g.a_star("X", "A"), Err(GraphError::VertexNotFound("X".into())));
        assert_eq!(g.a_star("A", "Y"), Err(GraphError::VertexNotFound("Y".into())));
        assert_eq!(
            g.heuristic_table("Y"),
            Err(GraphError::VertexNotFound("Y".into()))
        );
    }

    #[test]
    fn custom_heuristic() {
        let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0)]);
        let res = g
            .a_star_with("A", "C", |_: Option<Coordinate>, _: Option<Coordinate>| 0.5)
            .unwrap();
        assert_eq!(res.cost, 2.0);

        let table = AStar::new()
            .heuristic(|_: Option<Coordinate>, _: Option<Coordinate>| 7.0)
            .heuristic_table(&g, "C")
            .unwrap();
        assert!(table.values().all(|&h| h == 7.0));
    }

    #[test]
    fn matches_shortest_distances_without_coordinates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for directed in [false, true] {
            for _ in 0..20 {
                let g = random_graph(rng, 15, 30, directed);
                for _ in 0..5 {
                    let s = vertex_label(rng.random_range(0..15));
                    let t = vertex_label(rng.random_range(0..15));

                    let expected = shortest_distance(&g, &s, &t);
                    let res = g.a_star(&s, &t).unwrap();
                    assert_eq!(res.cost, expected);
                    assert_eq!(g.a_star_with(&s, &t, ZeroHeuristic).unwrap().cost, expected);

                    if res.is_reachable() {
                        assert_eq!(res.path.first(), Some(&s));
                        assert_eq!(res.path.last(), Some(&t));
                    }
                }
            }
        }
    }

    #[test]
    fn optimal_with_consistent_coordinates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for _ in 0..20 {
            let n = 15;
            let mut g = Graph::undirected();
            let coords: Vec<Coordinate> = (0..n)
                .map(|i| {
                    let c = Coordinate::new(
                        rng.random_range(0..10) as f64,
                        rng.random_range(0..10) as f64,
                    );
                    g.add_vertex(&vertex_label(i));
                    g.set_coordinate(&vertex_label(i), c).unwrap();
                    c
                })
                .collect();

            // weights never undercut the coordinate distance, so the heuristic is consistent
            for _ in 0..35 {
                let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                let w = coords[u].manhattan_distance(&coords[v]) + rng.random_range(0..5) as f64;
                g.add_edge(&vertex_label(u), &vertex_label(v), w);
            }

            let (s, t) = (vertex_label(0), vertex_label(n - 1));
            assert_eq!(g.a_star(&s, &t).unwrap().cost, shortest_distance(&g, &s, &t));
        }
    }
}
