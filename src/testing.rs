//! Helpers shared by the test-modules of this crate

use std::collections::BTreeSet;

use fxhash::FxHashMap;
use rand::Rng;

use crate::prelude::*;

/// Label of the `i`-th vertex in graphs produced by [`random_graph`]
pub fn vertex_label(i: usize) -> String {
    format!("v{i}")
}

/// Creates a graph with vertices `v0..v{n-1}` (inserted in this order) and `m` random edges
/// with integral weights in `1..10`. Self-loops and parallel edges may occur.
pub fn random_graph<R: Rng>(rng: &mut R, n: usize, m: usize, directed: bool) -> Graph {
    let mut graph = Graph::new(directed);
    for i in 0..n {
        graph.add_vertex(&vertex_label(i));
    }

    for _ in 0..m {
        let u = vertex_label(rng.random_range(0..n));
        let v = vertex_label(rng.random_range(0..n));
        let w = rng.random_range(1..10) as Weight;
        graph.add_edge(&u, &v, w);
    }

    graph
}

/// Naive fixpoint over the edge list; returns all labels reachable from `start` (including itself)
pub fn reachable_from(graph: &Graph, start: &str) -> BTreeSet<String> {
    let mut reached = BTreeSet::from([start.to_string()]);
    loop {
        let before = reached.len();
        for e in graph.edges() {
            if reached.contains(&e.origin) {
                reached.insert(e.destination.clone());
            }
            if !e.directed && reached.contains(&e.destination) {
                reached.insert(e.origin.clone());
            }
        }
        if reached.len() == before {
            return reached;
        }
    }
}

/// Bellman-Ford style relaxation over the edge list; returns the length of a shortest path
/// or `f64::INFINITY` if `target` is not reachable
pub fn shortest_distance(graph: &Graph, source: &str, target: &str) -> f64 {
    let mut dist: FxHashMap<String, f64> = FxHashMap::default();
    dist.insert(source.to_string(), 0.0);

    for _ in 0..graph.number_of_nodes() {
        for e in graph.edges() {
            let mut relax = |from: &str, to: &str| {
                if let Some(&d) = dist.get(from) {
                    let entry = dist.entry(to.to_string()).or_insert(f64::INFINITY);
                    if d + e.weight < *entry {
                        *entry = d + e.weight;
                    }
                }
            };

            relax(&e.origin, &e.destination);
            if !e.directed {
                relax(&e.destination, &e.origin);
            }
        }
    }

    dist.get(target).copied().unwrap_or(f64::INFINITY)
}
