//! Tab-delimited table scanning
//!
//! A [`TableReader`] owns the open file for the duration of one scan. The
//! first line is the header; [`TableReader::resolve_columns`] turns the
//! column names a filter needs into positions once, and every data row is
//! then checked against the header width before a filter sees it.
//!
//! Fields are split by the `csv` reader with quoting disabled: the title
//! datasets carry raw `"` inside names and never quote a field.

use crate::error::{Error, Result, SchemaError};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DELIMITER: u8 = b'\t';

/// Shape contract for one dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Name used in error messages and logs
    pub name: &'static str,
    /// Fixed field count the header must have, if the dataset defines one
    pub width: Option<usize>,
}

impl TableLayout {
    pub const TITLES: TableLayout = TableLayout { name: "titles", width: Some(9) };
    pub const PRINCIPALS: TableLayout = TableLayout { name: "principals", width: Some(6) };
    pub const RATINGS: TableLayout = TableLayout { name: "ratings", width: Some(3) };

    /// A layout that accepts any header width.
    pub const fn open(name: &'static str) -> Self {
        Self { name, width: None }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Positions of a fixed set of named columns within a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap<const N: usize> {
    positions: [usize; N],
}

impl<const N: usize> ColumnMap<N> {
    #[inline]
    pub fn positions(&self) -> [usize; N] {
        self.positions
    }

    /// Pick the mapped fields out of a row, in the order the names were requested.
    #[inline]
    pub fn project<'r>(&self, row: &'r Row) -> [&'r str; N] {
        std::array::from_fn(|i| row.field(self.positions[i]))
    }
}

/// One data line split on the delimiter
#[derive(Debug, Clone)]
pub struct Row {
    line: usize,
    record: StringRecord,
}

impl Row {
    /// 1-based line number in the source, counting the header
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.record.len()
    }

    /// Panics if `index >= self.width()`
    #[inline]
    pub fn field(&self, index: usize) -> &str {
        &self.record[index]
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.record.iter()
    }
}

/// Streams rows of one delimited file.
///
/// Yields `Err` for the first malformed row and nothing afterwards. Blank
/// lines are skipped but still counted in row line numbers.
pub struct TableReader<R = File> {
    layout: TableLayout,
    header: Vec<String>,
    reader: csv::Reader<R>,
    failed: bool,
}

impl TableReader<File> {
    pub fn open<P: AsRef<Path>>(path: P, layout: TableLayout) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, layout)
    }
}

impl<R: Read> TableReader<R> {
    /// Read and validate the header from an already-open source.
    pub fn from_reader(source: R, layout: TableLayout) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .quoting(false)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if header.is_empty() {
            return Err(Error::schema(layout.name, SchemaError::MissingHeader));
        }

        if let Some(expected) = layout.width {
            if header.len() != expected {
                return Err(Error::schema(
                    layout.name,
                    SchemaError::HeaderWidth {
                        expected,
                        actual: header.len(),
                    },
                ));
            }
        }

        Ok(Self {
            layout,
            header,
            reader,
            failed: false,
        })
    }

    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.header.len()
    }

    #[inline]
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Map each required column name to its header position.
    ///
    /// When a name appears more than once the first occurrence wins.
    pub fn resolve_columns<const N: usize>(&self, names: [&str; N]) -> Result<ColumnMap<N>> {
        let mut positions = [0usize; N];
        for (slot, name) in positions.iter_mut().zip(names) {
            *slot = self
                .header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| {
                    Error::schema(self.layout.name, SchemaError::MissingColumn(name.to_string()))
                })?;
        }
        Ok(ColumnMap { positions })
    }
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        }
        let line = record.position().map_or(0, |p| p.line() as usize);

        let row = Row { line, record };
        if row.width() != self.header.len() {
            self.failed = true;
            return Some(Err(Error::RowShape {
                table: self.layout.name.to_string(),
                line,
                expected: self.header.len(),
                actual: row.width(),
            }));
        }
        Some(Ok(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> Result<TableReader<Cursor<Vec<u8>>>> {
        TableReader::from_reader(Cursor::new(text.as_bytes().to_vec()), TableLayout::open("test"))
    }

    #[test]
    fn test_resolve_columns_in_requested_order() {
        let table = reader("a\tb\tc\n").unwrap();
        let columns = table.resolve_columns(["c", "a"]).unwrap();
        assert_eq!(columns.positions(), [2, 0]);
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let table = reader("a\tb\ta\n").unwrap();
        assert_eq!(table.resolve_columns(["a"]).unwrap().positions(), [0]);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let table = reader("a\tb\n").unwrap();
        let err = table.resolve_columns(["a", "z"]).unwrap_err();
        match err {
            Error::Schema { kind, .. } => assert_eq!(kind, SchemaError::MissingColumn("z".into())),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = reader("").err().unwrap();
        assert!(matches!(err, Error::Schema { kind: SchemaError::MissingHeader, .. }));
    }

    #[test]
    fn test_fixed_width_header() {
        let layout = TableLayout::open("fixed").with_width(3);
        let err = TableReader::from_reader(Cursor::new(b"a\tb\n".to_vec()), layout)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            Error::Schema { kind: SchemaError::HeaderWidth { expected: 3, actual: 2 }, .. }
        ));
    }

    #[test]
    fn test_rows_project_fields() {
        let table = reader("a\tb\tc\n1\t2\t3\nx\t\tz\n").unwrap();
        let columns = table.resolve_columns(["b", "c"]).unwrap();
        let rows: Vec<Row> = table.collect::<Result<_>>().unwrap();
        assert_eq!(columns.project(&rows[0]), ["2", "3"]);
        assert_eq!(columns.project(&rows[1]), ["", "z"]);
        assert_eq!(rows[1].line(), 3);
    }

    #[test]
    fn test_raw_quotes_are_literal() {
        let table = reader("a\tb\n\"Pauvre\" Pierrot\tx\"y\n").unwrap();
        let rows: Vec<Row> = table.collect::<Result<_>>().unwrap();
        assert_eq!(rows[0].fields().collect::<Vec<_>>(), ["\"Pauvre\" Pierrot", "x\"y"]);
    }

    #[test]
    fn test_short_row_stops_the_scan() {
        let mut table = reader("a\tb\n1\t2\n3\n4\t5\n").unwrap();
        assert!(table.next().unwrap().is_ok());
        let err = table.next().unwrap().unwrap_err();
        assert!(matches!(err, Error::RowShape { line: 3, expected: 2, actual: 1, .. }));
        assert!(table.next().is_none());
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = reader("a\tb\r\n1\t2\r\n").unwrap();
        assert_eq!(table.header(), ["a", "b"]);
        let rows: Vec<Row> = table.collect::<Result<_>>().unwrap();
        assert_eq!(rows[0].fields().collect::<Vec<_>>(), ["1", "2"]);
    }
}
