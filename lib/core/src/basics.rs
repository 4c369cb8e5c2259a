//! Basics pass: which titles exist
//!
//! Keeps rows whose title type is allowed and normalizes the year and genre
//! fields. The keys it produces become the [`KeySetIndex`](crate::KeySetIndex)
//! that the principals and ratings passes join against.

use crate::coerce::{normalize_genres, year_or_zero};
use crate::error::Result;
use crate::filter::{AllowList, Filter};
use crate::record::TitleRecord;
use crate::table::{TableLayout, TableReader};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub const KEY_COLUMN: &str = "tconst";
pub const TITLE_TYPE_COLUMN: &str = "titleType";
pub const YEAR_COLUMN: &str = "startYear";
pub const GENRES_COLUMN: &str = "genres";

#[derive(Debug, Clone)]
pub struct BasicsFilter {
    title_types: AllowList,
    layout: TableLayout,
}

impl BasicsFilter {
    pub fn new(title_types: AllowList) -> Self {
        Self {
            title_types,
            layout: TableLayout::TITLES,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn title_types(&self) -> &AllowList {
        &self.title_types
    }

    /// Scan a basics file. Any schema or row-shape failure discards every record.
    pub fn filter<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TitleRecord>> {
        let started = Instant::now();
        let table = TableReader::open(path.as_ref(), self.layout)?;
        let titles = self.scan(table)?;
        info!(
            "Basics filtered: {} titles kept from {:?} ({:?})",
            titles.len(),
            path.as_ref(),
            started.elapsed()
        );
        Ok(titles)
    }

    pub fn scan<R: Read>(&self, table: TableReader<R>) -> Result<Vec<TitleRecord>> {
        let columns =
            table.resolve_columns([KEY_COLUMN, TITLE_TYPE_COLUMN, YEAR_COLUMN, GENRES_COLUMN])?;

        let mut titles = Vec::new();
        let mut scanned = 0usize;
        for row in table {
            let row = row?;
            scanned += 1;

            let [key, title_type, year, genres] = columns.project(&row);
            if !self.title_types.permits(title_type) {
                continue;
            }
            titles.push(TitleRecord {
                key: key.to_string(),
                release_year: year_or_zero(year),
                genre_tags: normalize_genres(genres),
            });
        }

        debug!("Basics scan: {} rows, {} kept", scanned, titles.len());
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SchemaError};
    use std::io::Cursor;

    const HEADER: &str = "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres";

    fn scan(body: &str) -> Result<Vec<TitleRecord>> {
        let text = format!("{HEADER}\n{body}");
        let table = TableReader::from_reader(Cursor::new(text.into_bytes()), TableLayout::TITLES)?;
        BasicsFilter::new(AllowList::default_title_types()).scan(table)
    }

    #[test]
    fn test_keeps_allowed_types_only() {
        let titles = scan(
            "tt0000001\tshort\tCarmencita\tCarmencita\t0\t1894\t\\N\t1\tDocumentary,Short\n\
             tt0000002\tmovie\tLe clown\tLe clown\t0\t\\N\t\\N\t5\tComedy,Drama\n",
        )
        .unwrap();
        assert_eq!(titles, vec![TitleRecord::new("tt0000002", 0, "comedy,drama")]);
    }

    #[test]
    fn test_missing_genres_become_empty() {
        let titles = scan("tt0000003\ttvMovie\tX\tX\t0\t1999\t\\N\t90\t\\N\n").unwrap();
        assert_eq!(titles, vec![TitleRecord::new("tt0000003", 1999, "")]);
    }

    #[test]
    fn test_bad_row_discards_everything() {
        let err = scan(
            "tt0000002\tmovie\tA\tA\t0\t2001\t\\N\t5\tDrama\n\
             tt0000004\tmovie\tB\tB\t0\t2002\n",
        )
        .unwrap_err();
        assert!(err.is_row_shape());
    }

    #[test]
    fn test_missing_genres_column() {
        let text = "tconst\ttitleType\tstartYear\n";
        let table = TableReader::from_reader(Cursor::new(text.as_bytes().to_vec()), TableLayout::open("titles"))
            .unwrap();
        let err = BasicsFilter::new(AllowList::default_title_types())
            .scan(table)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Schema { kind: SchemaError::MissingColumn(ref c), .. } if c == GENRES_COLUMN
        ));
    }
}
