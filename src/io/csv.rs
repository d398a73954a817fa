//! # Csv
//!
//! Delimited text with a header line naming its columns, one [`ImportRow`] per record:
//! ```text
//! origem,destino,peso,lat_origem,long_origem,lat_destino,long_destino
//! Recife,Olinda,7.5,-8.05,-34.90,-8.01,-34.85
//! "Brasilia, DF",Goiania,209,-15.79,-47.88,-16.68,-49.25
//! ```
//! Columns may also be named in English (`origin`, `destination`, `weight`, `lat_origin`, ...).
//! Only origin and destination are required; unknown columns are ignored.
//! Fields may be quoted, records may be shorter than the header.

use std::io::{BufRead, ErrorKind, Result};

use ::csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::*;

/// Columns understood by the [`CsvReader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Origin,
    Destination,
    Weight,
    LatOrigin,
    LongOrigin,
    LatDestination,
    LongDestination,
}

impl Column {
    const COUNT: usize = 7;

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "origem" | "origin" => Column::Origin,
            "destino" | "destination" => Column::Destination,
            "peso" | "weight" => Column::Weight,
            "lat_origem" | "lat_origin" => Column::LatOrigin,
            "long_origem" | "long_origin" => Column::LongOrigin,
            "lat_destino" | "lat_destination" => Column::LatDestination,
            "long_destino" | "long_destination" => Column::LongDestination,
            _ => return None,
        })
    }
}

/// Converts errors of the csv parser; IO errors are passed through unchanged
fn csv_error(err: ::csv::Error) -> std::io::Error {
    match err.into_kind() {
        ::csv::ErrorKind::Io(err) => err,
        kind => io_error!(ErrorKind::InvalidData, format!("Malformed csv: {kind:?}")),
    }
}

/// Position of every known column within a record
#[derive(Debug, Clone, Default)]
struct ColumnLayout {
    positions: [Option<usize>; Column::COUNT],
}

impl ColumnLayout {
    fn try_from_headers(headers: &StringRecord) -> Result<Self> {
        let mut layout = Self::default();
        for (i, name) in headers.iter().enumerate() {
            let name = name.to_lowercase();
            match Column::from_name(&name) {
                Some(col) => layout.positions[col as usize] = Some(i),
                None => debug!(column = name.as_str(), "ignoring unknown column"),
            }
        }

        for required in [Column::Origin, Column::Destination] {
            raise_error_unless!(
                layout.positions[required as usize].is_some(),
                ErrorKind::InvalidData,
                format!("Header is missing the required column {required:?}.")
            );
        }

        Ok(layout)
    }

    /// Returns the non-empty field of `col` if present
    fn field<'a>(&self, record: &'a StringRecord, col: Column) -> Option<&'a str> {
        self.positions[col as usize]
            .and_then(|i| record.get(i))
            .filter(|f| !f.is_empty())
    }

    /// Parses the field of `col`; unparseable values are reported and treated as absent
    fn number(&self, record: &StringRecord, col: Column, line: u64) -> Option<f64> {
        let value = self.field(record, col)?;
        match value.parse() {
            Ok(x) => Some(x),
            Err(_) => {
                warn!(line, column = ?col, value, "ignoring unparseable number");
                None
            }
        }
    }

    fn try_parse_row(&self, record: &StringRecord) -> Result<ImportRow> {
        let line = record.position().map_or(0, |pos| pos.line());

        let origin = self.field(record, Column::Origin);
        let destination = self.field(record, Column::Destination);
        let (Some(origin), Some(destination)) = (origin, destination) else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Line {line} is missing its origin or destination.")
            ));
        };

        Ok(ImportRow {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight: self.number(record, Column::Weight, line),
            lat_origin: self.number(record, Column::LatOrigin, line),
            long_origin: self.number(record, Column::LongOrigin, line),
            lat_destination: self.number(record, Column::LatDestination, line),
            long_destination: self.number(record, Column::LongDestination, line),
        })
    }
}

/// A GraphReader for distance tables in delimited text
#[derive(Debug, Clone)]
pub struct CsvReader {
    /// Orientation of graphs built by this reader
    directed: bool,
    /// Separator between fields
    delimiter: u8,
}

impl Default for CsvReader {
    /// Undirected and comma separated
    fn default() -> Self {
        Self {
            directed: false,
            delimiter: b',',
        }
    }
}

impl CsvReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation of graphs built by this reader
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the orientation of graphs built by this reader
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Updates the field separator
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Updates the field separator
    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    /// Parses all rows without building a graph.
    ///
    /// # Errors
    /// Fails if the header lacks origin or destination, if a record lacks either value,
    /// if the input is not valid csv, or if reading fails.
    pub fn try_read_rows<R: BufRead>(&self, reader: R) -> Result<Vec<ImportRow>> {
        let mut records = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let layout = ColumnLayout::try_from_headers(records.headers().map_err(csv_error)?)?;

        let rows = records
            .records()
            .map(|record| layout.try_parse_row(&record.map_err(csv_error)?))
            .collect::<Result<Vec<_>>>()?;

        debug!(rows = rows.len(), "read csv rows");
        Ok(rows)
    }
}

impl GraphReader<Graph> for CsvReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let rows = self.try_read_rows(reader)?;

        let mut graph = Graph::new(self.directed);
        graph
            .import_rows(&rows)
            .map_err(|e| io_error!(ErrorKind::InvalidData, e))?;

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            directed = self.directed,
            "read graph from csv"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
origem,destino,peso,lat_origem,long_origem,lat_destino,long_destino
Recife,Olinda,7.5,-8.05,-34.90,-8.01,-34.85

 Recife , Caruaru ,130,-8.00,-35.00,-8.28,-35.97
Olinda,Caruaru,,x,-34.85,-8.28,-35.97
";

    #[test]
    fn read_portuguese_table() {
        let g = CsvReader::new().try_read_graph(TABLE.as_bytes()).unwrap();

        assert!(g.is_undirected());
        assert_eq!(
            g.vertex_labels().collect::<Vec<_>>(),
            vec!["Recife", "Olinda", "Caruaru"]
        );
        assert_eq!(g.number_of_edges(), 3);

        assert_eq!(g.edge("a1").unwrap().weight, 7.5);
        assert_eq!(g.edge("a2").unwrap().weight, 130.0);
        // empty weight falls back to the default
        assert_eq!(g.edge("a3").unwrap().weight, DEFAULT_WEIGHT);

        // first occurrence wins
        assert_eq!(g.coordinate("Recife"), Some(Coordinate::new(-8.05, -34.90)));
        assert_eq!(g.coordinate("Caruaru"), Some(Coordinate::new(-8.28, -35.97)));
    }

    #[test]
    fn unparseable_numbers_become_absent() {
        let rows = CsvReader::new().try_read_rows(TABLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].origin, "Recife");
        assert_eq!(rows[1].destination, "Caruaru");
        assert_eq!(rows[2].weight, None);
        assert_eq!(rows[2].lat_origin, None);
        assert_eq!(rows[2].long_origin, Some(-34.85));
        assert_eq!(rows[2].origin_coordinate(), None);
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let text = "origem,destino,peso\n\"Brasilia, DF\",Goiania,209\n";
        let rows = CsvReader::new().try_read_rows(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].origin, "Brasilia, DF");
        assert_eq!(rows[0].destination, "Goiania");
        assert_eq!(rows[0].weight, Some(209.0));

        let g = CsvReader::new().try_read_graph(text.as_bytes()).unwrap();
        assert!(g.contains_vertex("Brasilia, DF"));
    }

    #[test]
    fn short_records_are_accepted() {
        let text = "origem,destino,peso,lat_origem,long_origem\nA,B,4\nB,C\n";
        let rows = CsvReader::new().try_read_rows(text.as_bytes()).unwrap();

        assert_eq!(rows[0].weight, Some(4.0));
        assert_eq!(rows[0].lat_origin, None);
        assert_eq!(rows[1].weight, None);
    }

    #[test]
    fn english_header_and_delimiter() {
        let text = "weight;destination;origin;population\n2;B;A;100\n3;C;B;\n";
        let reader = CsvReader::new().delimiter(b';').directed(true);

        let g = reader.try_read_graph(text.as_bytes()).unwrap();
        assert!(g.is_directed());
        let e = g.edge("a1").unwrap();
        assert_eq!(
            (e.origin.as_str(), e.destination.as_str(), e.weight),
            ("A", "B", 2.0)
        );
        assert_eq!(g.edge("a2").unwrap().weight, 3.0);
        assert_eq!(g.coordinate("A"), None);

        let mut reader = CsvReader::new();
        reader.set_delimiter(b'\t');
        reader.set_directed(true);
        let g = reader
            .try_read_graph("ORIGIN\tDESTINATION\nA\tB\n".as_bytes())
            .unwrap();
        assert!(g.is_directed());
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn malformed_input() {
        let reader = CsvReader::new();

        let missing_column = reader.try_read_graph("origem,peso\nA,1\n".as_bytes());
        assert_eq!(missing_column.unwrap_err().kind(), ErrorKind::InvalidData);

        let missing_value = reader.try_read_rows("origem,destino\nA,B\nC,\n".as_bytes());
        assert_eq!(missing_value.unwrap_err().kind(), ErrorKind::InvalidData);

        let empty = reader.try_read_rows("".as_bytes());
        assert_eq!(empty.unwrap_err().kind(), ErrorKind::InvalidData);

        let header_only = reader.try_read_graph("origem,destino\n".as_bytes()).unwrap();
        assert!(header_only.is_empty());
    }
}
