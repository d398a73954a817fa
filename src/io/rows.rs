//! # Import Rows
//!
//! A row of a distance table: two cities, the distance between them, and optionally the
//! coordinates of both cities. Importing a row adds both cities as vertices, attaches their
//! coordinates (the first coordinate seen for a city wins) and adds an edge between them.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    pub origin: String,
    pub destination: String,
    /// Defaults to [`DEFAULT_WEIGHT`] if absent
    pub weight: Option<Weight>,
    pub lat_origin: Option<f64>,
    pub long_origin: Option<f64>,
    pub lat_destination: Option<f64>,
    pub long_destination: Option<f64>,
}

impl ImportRow {
    /// Creates a row without weight and coordinates
    pub fn new<S: Into<String>, T: Into<String>>(origin: S, destination: T) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Sets the weight
    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the coordinate of the origin
    pub fn origin_at(mut self, coordinate: Coordinate) -> Self {
        self.lat_origin = Some(coordinate.lat);
        self.long_origin = Some(coordinate.long);
        self
    }

    /// Sets the coordinate of the destination
    pub fn destination_at(mut self, coordinate: Coordinate) -> Self {
        self.lat_destination = Some(coordinate.lat);
        self.long_destination = Some(coordinate.long);
        self
    }

    /// Coordinate of the origin if both components are present
    pub fn origin_coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat_origin?, self.long_origin?))
    }

    /// Coordinate of the destination if both components are present
    pub fn destination_coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat_destination?, self.long_destination?))
    }
}

impl Graph {
    /// Attaches `coordinate` to `label` unless the vertex already has one
    fn set_coordinate_once(&mut self, label: &str, coordinate: Option<Coordinate>) -> Result<()> {
        if let Some(coordinate) = coordinate {
            if self.coordinate(label).is_none() {
                self.set_coordinate(label, coordinate)?;
            }
        }
        Ok(())
    }

    /// Imports a single row and returns the id of the new edge.
    ///
    /// # Examples
    /// ```
    /// use graphstudio::{prelude::*, io::*};
    ///
    /// let mut g = Graph::undirected();
    /// g.import_row(&ImportRow::new("Recife", "Olinda").origin_at(Coordinate::new(-8.05, -34.9)))
    ///     .unwrap();
    ///
    /// assert_eq!(g.edge("a1").unwrap().weight, 1.0);
    /// assert!(g.coordinate("Recife").is_some());
    /// assert!(g.coordinate("Olinda").is_none());
    /// ```
    pub fn import_row(&mut self, row: &ImportRow) -> Result<EdgeId> {
        self.add_vertex(&row.origin);
        self.add_vertex(&row.destination);

        self.set_coordinate_once(&row.origin, row.origin_coordinate())?;
        self.set_coordinate_once(&row.destination, row.destination_coordinate())?;

        let id = self.add_edge(
            &row.origin,
            &row.destination,
            row.weight.unwrap_or(DEFAULT_WEIGHT),
        );
        trace!(
            id = id.as_str(),
            origin = row.origin.as_str(),
            destination = row.destination.as_str(),
            "imported row"
        );
        Ok(id)
    }

    /// Imports all rows in order and returns the ids of the new edges
    pub fn import_rows<'a, I>(&mut self, rows: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator<Item = &'a ImportRow>,
    {
        rows.into_iter().map(|row| self.import_row(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_coordinate_wins() {
        let rows = [
            ImportRow::new("A", "B")
                .weight(10.0)
                .origin_at(Coordinate::new(1.0, 2.0))
                .destination_at(Coordinate::new(3.0, 4.0)),
            ImportRow::new("B", "C")
                .origin_at(Coordinate::new(9.0, 9.0))
                .destination_at(Coordinate::new(5.0, 6.0)),
        ];

        let mut g = Graph::undirected();
        let ids = g.import_rows(&rows).unwrap();

        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(g.coordinate("A"), Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(g.coordinate("B"), Some(Coordinate::new(3.0, 4.0)));
        assert_eq!(g.coordinate("C"), Some(Coordinate::new(5.0, 6.0)));
        assert_eq!(g.edge("a1").unwrap().weight, 10.0);
        assert_eq!(g.edge("a2").unwrap().weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn partial_coordinates_are_skipped() {
        let row = ImportRow {
            lat_origin: Some(1.0),
            long_destination: Some(2.0),
            ..ImportRow::new("A", "B")
        };
        assert_eq!(row.origin_coordinate(), None);
        assert_eq!(row.destination_coordinate(), None);

        let mut g = Graph::directed();
        g.import_row(&row).unwrap();
        assert_eq!(g.coordinate("A"), None);
        assert_eq!(g.coordinate("B"), None);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn existing_coordinates_are_kept() {
        let mut g = Graph::undirected();
        g.add_vertex("A");
        g.set_coordinate("A", Coordinate::new(0.0, 0.0)).unwrap();

        g.import_row(&ImportRow::new("A", "A").origin_at(Coordinate::new(7.0, 7.0)))
            .unwrap();
        assert_eq!(g.coordinate("A"), Some(Coordinate::new(0.0, 0.0)));
        assert!(g.edge("a1").unwrap().is_loop());
    }
}
