use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a whole table scan.
///
/// A scan either succeeds with every record it produced or fails with one of
/// these; records accumulated before the failure are dropped with the scan.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error in {table}: {kind}")]
    Schema {
        table: String,
        #[source]
        kind: SchemaError,
    },

    #[error("Row shape error in {table} at line {line}: expected {expected} fields, got {actual}")]
    RowShape {
        table: String,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV read error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn schema(table: &str, kind: SchemaError) -> Self {
        Error::Schema {
            table: table.to_string(),
            kind,
        }
    }

    /// Whether this failure came from the file's header rather than its rows or the disk.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }

    pub fn is_row_shape(&self) -> bool {
        matches!(self, Error::RowShape { .. })
    }
}

/// Header problems detected before any data row is read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("file has no header line")]
    MissingHeader,

    #[error("required column `{0}` not found")]
    MissingColumn(String),

    #[error("expected {expected} column headers, found {actual}")]
    HeaderWidth { expected: usize, actual: usize },
}
