/*!
# Strong Connectivity

Roy's algorithm for the strongly connected components of a directed graph. The component of a
vertex `v` is the set of vertices that are both reachable from `v` and reaching `v`; both searches
only walk through vertices not yet assigned to an earlier component.
*/

use std::collections::{BTreeSet, VecDeque};

use tracing::{debug, trace};

use super::*;

/// Computes all nodes reachable from `start` using only nodes marked in `allowed`.
/// The successors of a node are provided by `successors`; `n` bounds all node indices.
fn reachable_within<F, I>(
    n: Node,
    start: Node,
    allowed: &NodeBitSet,
    mut successors: F,
) -> NodeBitSet
where
    F: FnMut(Node) -> I,
    I: IntoIterator<Item = Node>,
{
    let mut reached = NodeBitSet::new(n);
    reached.set_bit(start);

    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for v in successors(u) {
            if allowed.get_bit(v) && !reached.set_bit(v) {
                queue.push_back(v);
            }
        }
    }

    reached
}

pub trait StrongConnectivity: LabeledGraph {
    /// Computes the strongly connected components of a directed graph with Roy's algorithm:
    /// starting at the first vertex not yet assigned to a component, its component is the
    /// intersection of the vertices it reaches and the vertices reaching it, both restricted to
    /// unassigned vertices.
    ///
    /// Components are returned in the order they were found; together they partition the vertex
    /// set. Fails if the graph is undirected.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "A", 1.0)]);
    /// g.add_vertex("C");
    ///
    /// let sccs = g.strongly_connected_components().unwrap();
    /// assert_eq!(sccs.len(), 2);
    /// assert!(sccs[0].contains("A") && sccs[0].contains("B"));
    /// assert!(sccs[1].contains("C"));
    /// ```
    fn strongly_connected_components(&self) -> Result<Vec<BTreeSet<String>>> {
        self.require_direction("Roy's algorithm", Direction::Directed)?;

        let n = self.len() as Node;
        let in_nbs = self.in_neighborhoods();
        let mut remaining = NodeBitSet::new(n);
        for u in self.vertices() {
            remaining.set_bit(u);
        }

        let mut components = Vec::new();
        for v in self.vertices() {
            if !remaining.get_bit(v) {
                continue;
            }

            let forward = reachable_within(n, v, &remaining, |u| self.neighbors_of(u));
            let backward =
                reachable_within(n, v, &remaining, |u| in_nbs[u as usize].iter().copied());

            let mut component = BTreeSet::new();
            for u in self.vertices() {
                if forward.get_bit(u) && backward.get_bit(u) {
                    remaining.clear_bit(u);
                    component.insert(self.label_of(u).to_string());
                }
            }

            trace!(seed = self.label_of(v), size = component.len(), "roy found component");
            components.push(component);
        }

        debug!(components = components.len(), "roy finished");
        Ok(components)
    }

    /// Returns *true* if every vertex reaches every other vertex.
    /// Fails if the graph is undirected.
    fn is_strongly_connected(&self) -> Result<bool> {
        Ok(self.strongly_connected_components()?.len() <= 1)
    }
}

impl<G> StrongConnectivity for G where G: LabeledGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn two_cycle_and_isolated() {
        let mut g = Graph::from_edges(true, [("A", "B", 1.0), ("B", "A", 1.0)]);
        g.add_vertex("C");

        let sccs = g.strongly_connected_components().unwrap();
        assert_eq!(sccs, vec![set(&["A", "B"]), set(&["C"])]);
        assert!(!g.is_strongly_connected().unwrap());
    }

    #[test]
    fn chain_of_cycles() {
        //  A <-> B -> C -> D -> C, E -> A
        let g = Graph::from_edges(
            true,
            [
                ("A", "B", 1.0),
                ("B", "A", 1.0),
                ("B", "C", 1.0),
                ("C", "D", 1.0),
                ("D", "C", 1.0),
                ("E", "A", 1.0),
            ],
        );

        let sccs = g.strongly_connected_components().unwrap();
        assert_eq!(
            sccs,
            vec![set(&["A", "B"]), set(&["C", "D"]), set(&["E"])]
        );
    }

    #[test]
    fn self_loops_and_empty() {
        let g = Graph::from_edges(true, [("A", "A", 1.0), ("A", "B", 1.0)]);
        assert_eq!(
            g.strongly_connected_components().unwrap(),
            vec![set(&["A"]), set(&["B"])]
        );

        assert!(Graph::directed().strongly_connected_components().unwrap().is_empty());
        assert!(Graph::directed().is_strongly_connected().unwrap());
    }

    #[test]
    fn requires_directed_graph() {
        let g = Graph::from_edges(false, [("A", "B", 1.0)]);
        assert_eq!(
            g.strongly_connected_components(),
            Err(GraphError::InvalidConfiguration {
                algorithm: "Roy's algorithm",
                required: Direction::Directed
            })
        );
    }

    #[test]
    fn random_partitions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..30 {
            let g = random_graph(rng, 15, 25, true);
            let sccs = g.strongly_connected_components().unwrap();

            // partition: every vertex appears exactly once
            let all = sccs.iter().flatten().cloned().collect_vec();
            assert_eq!(all.len(), g.number_of_nodes() as usize);
            assert_eq!(
                all.iter().cloned().collect::<BTreeSet<_>>(),
                g.vertex_labels().map(str::to_string).collect()
            );

            let reach: Vec<BTreeSet<String>> = g
                .vertex_labels()
                .map(|u| reachable_from(&g, u))
                .collect();
            let labels = g.vertex_labels().collect_vec();
            let component_of = |x: &str| sccs.iter().position(|c| c.contains(x)).unwrap();

            for (i, u) in labels.iter().enumerate() {
                for (j, v) in labels.iter().enumerate() {
                    let mutual = reach[i].contains(*v) && reach[j].contains(*u);
                    assert_eq!(mutual, component_of(u) == component_of(v));
                }
            }
        }
    }
}
