/*!
# Planarity Bounds

Necessary conditions for planarity derived from Euler's formula. A simple planar graph with
`n >= 3` vertices has at most `3n - 6` edges, and at most `2n - 4` edges if it contains no
triangle. Violating a bound proves non-planarity; satisfying them proves nothing.
*/

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::*;

/// Outcome of [`PlanarityBounds::check_planarity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanarityVerdict {
    /// Fewer than three vertices
    TriviallyPlanar,
    /// More than `3n - 6` edges
    ExceedsEulerBound,
    /// Triangle-free with more than `2n - 4` edges
    ExceedsTriangleFreeBound,
    /// No bound violated
    PossiblyPlanar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarityReport {
    pub verdict: PlanarityVerdict,
    /// Human readable explanation; advisory only
    pub message: String,
}

impl PlanarityReport {
    /// Returns *false* only if a bound proves the graph non-planar
    pub fn is_possibly_planar(&self) -> bool {
        matches!(
            self.verdict,
            PlanarityVerdict::TriviallyPlanar | PlanarityVerdict::PossiblyPlanar
        )
    }
}

pub trait PlanarityBounds: LabeledGraph {
    /// Returns *true* if some three distinct vertices are pairwise adjacent (ignoring orientation)
    fn has_triangle(&self) -> bool {
        let nbs = self.symmetric_neighborhoods();
        self.vertices().any(|u| {
            nbs[u as usize].iter().any(|&v| {
                nbs[v as usize]
                    .iter()
                    .any(|&w| w != u && nbs[u as usize].contains(&w))
            })
        })
    }

    /// Tests the edge bounds every planar graph satisfies.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, algo::*};
    ///
    /// let labels = ["A", "B", "C", "D", "E"];
    /// let mut k5 = Graph::undirected();
    /// for (i, u) in labels.iter().enumerate() {
    ///     for v in &labels[i + 1..] {
    ///         k5.add_edge(u, v, 1.0);
    ///     }
    /// }
    ///
    /// let report = k5.check_planarity();
    /// assert_eq!(report.verdict, PlanarityVerdict::ExceedsEulerBound);
    /// assert!(!report.is_possibly_planar());
    /// ```
    fn check_planarity(&self) -> PlanarityReport {
        let n = self.number_of_nodes() as i64;
        let m = self.number_of_edges() as i64;

        let (verdict, message) = if n < 3 {
            (
                PlanarityVerdict::TriviallyPlanar,
                format!("a graph with {n} vertices is always planar"),
            )
        } else if m > 3 * n - 6 {
            (
                PlanarityVerdict::ExceedsEulerBound,
                format!(
                    "not planar: {m} edges exceed the Euler bound 3n - 6 = {}",
                    3 * n - 6
                ),
            )
        } else if !self.has_triangle() {
            if m > 2 * n - 4 {
                (
                    PlanarityVerdict::ExceedsTriangleFreeBound,
                    format!(
                        "not planar: triangle-free with {m} edges exceeding 2n - 4 = {}",
                        2 * n - 4
                    ),
                )
            } else {
                (
                    PlanarityVerdict::PossiblyPlanar,
                    format!(
                        "possibly planar: triangle-free with {m} <= 2n - 4 = {} edges",
                        2 * n - 4
                    ),
                )
            }
        } else {
            (
                PlanarityVerdict::PossiblyPlanar,
                format!("possibly planar: {m} <= 3n - 6 = {} edges", 3 * n - 6),
            )
        };

        debug!(n, m, ?verdict, "planarity bounds checked");
        PlanarityReport { verdict, message }
    }
}

impl<G> PlanarityBounds for G where G: LabeledGraph {}
