/*!
# IO

Utilities for importing graphs from distance tables.

## Input Formats

- **Rows**: an [`ImportRow`] holds two cities, their distance, and optionally their coordinates.
  [`Graph::import_row`] adds it to an existing graph.
- **Csv**: delimited text with a header line, parsed into rows by the [`CsvReader`].

Exporting graphs is limited to the matrix views in [`crate::repr`].

## Traits

[`GraphReader`] is implemented by readers for a specific format and abstracts over reading
from any [`BufRead`] or directly from a file.
*/

mod csv;
mod rows;

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

use crate::prelude::*;

pub use csv::*;
pub use rows::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
