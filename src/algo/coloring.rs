/*!
# Greedy Coloring

The Welsh-Powell heuristic: vertices are colored greedily in order of descending degree. The
result is a proper coloring but not necessarily a minimum one.
*/

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::*;

/// Assignment of 1-based colors to vertex labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    pub colors: BTreeMap<String, u32>,
}

impl Coloring {
    /// Returns the color of `label` if it exists
    pub fn color_of(&self, label: &str) -> Option<u32> {
        self.colors.get(label).copied()
    }

    /// Number of distinct colors used
    pub fn number_of_colors(&self) -> u32 {
        self.colors.values().copied().max().unwrap_or(0)
    }

    /// Groups the vertices by color; the `i`-th class holds all vertices of color `i + 1`
    pub fn classes(&self) -> Vec<BTreeSet<String>> {
        let mut classes = vec![BTreeSet::new(); self.number_of_colors() as usize];
        for (label, &color) in &self.colors {
            classes[color as usize - 1].insert(label.clone());
        }
        classes
    }
}

pub trait GreedyColoring: LabeledGraph {
    /// Colors the vertices with the Welsh-Powell heuristic.
    ///
    /// Vertices are ordered by descending degree (ties keep insertion order). Each vertex not yet
    /// colored opens a new color, which is then handed to every remaining vertex in the same order
    /// that has no neighbor of this color. Orientation is ignored and self-loops do not count.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]);
    /// let coloring = g.welsh_powell();
    ///
    /// assert_eq!(coloring.number_of_colors(), 3);
    /// assert_ne!(coloring.color_of("A"), coloring.color_of("B"));
    /// ```
    fn welsh_powell(&self) -> Coloring {
        let nbs = self.symmetric_neighborhoods();
        let order = self
            .vertices()
            .sorted_by_key(|&u| std::cmp::Reverse(nbs[u as usize].len()))
            .collect_vec();

        let mut colors = vec![0u32; self.len()];
        let mut num_colors = 0;
        for &v in &order {
            if colors[v as usize] != 0 {
                continue;
            }

            num_colors += 1;
            colors[v as usize] = num_colors;

            for &w in &order {
                if colors[w as usize] == 0
                    && nbs[w as usize]
                        .iter()
                        .all(|&x| colors[x as usize] != num_colors)
                {
                    colors[w as usize] = num_colors;
                }
            }
        }

        debug!(
            vertices = order.len(),
            colors = num_colors,
            "welsh-powell finished"
        );

        Coloring {
            colors: order
                .into_iter()
                .map(|u| (self.label_of(u).to_string(), colors[u as usize]))
                .collect(),
        }
    }
}

impl<G> GreedyColoring for G where G: LabeledGraph {}
