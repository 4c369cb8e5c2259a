//! Ratings pass
//!
//! Unlike principals, nothing is synthesized for known keys that have no
//! rating row, and repeated keys in the file yield repeated records.

use crate::coerce::{rating_or_zero, votes_or_zero};
use crate::error::Result;
use crate::key_index::KeySetIndex;
use crate::record::RatingRecord;
use crate::table::{TableLayout, TableReader};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub const KEY_COLUMN: &str = "tconst";
pub const RATING_COLUMN: &str = "averageRating";
pub const VOTES_COLUMN: &str = "numVotes";

#[derive(Debug, Clone)]
pub struct RatingsExtractor {
    layout: TableLayout,
}

impl Default for RatingsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingsExtractor {
    pub fn new() -> Self {
        Self {
            layout: TableLayout::RATINGS,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn extract<P: AsRef<Path>>(
        &self,
        path: P,
        known_keys: &KeySetIndex,
    ) -> Result<Vec<RatingRecord>> {
        let started = Instant::now();
        let table = TableReader::open(path.as_ref(), self.layout)?;
        let ratings = self.scan(table, known_keys)?;
        info!(
            "Ratings extracted: {} records from {:?} ({:?})",
            ratings.len(),
            path.as_ref(),
            started.elapsed()
        );
        Ok(ratings)
    }

    pub fn scan<R: Read>(
        &self,
        table: TableReader<R>,
        known_keys: &KeySetIndex,
    ) -> Result<Vec<RatingRecord>> {
        let columns = table.resolve_columns([KEY_COLUMN, RATING_COLUMN, VOTES_COLUMN])?;

        let mut ratings = Vec::new();
        let mut scanned = 0usize;
        for row in table {
            let row = row?;
            scanned += 1;

            let [key, rating, votes] = columns.project(&row);
            if !known_keys.contains(key) {
                continue;
            }
            ratings.push(RatingRecord {
                key: key.to_string(),
                average_rating: rating_or_zero(rating),
                vote_count: votes_or_zero(votes),
            });
        }

        debug!("Ratings scan: {} rows, {} kept", scanned, ratings.len());
        Ok(ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(known: &[&str], body: &str) -> Result<Vec<RatingRecord>> {
        let text = format!("tconst\taverageRating\tnumVotes\n{body}");
        let table = TableReader::from_reader(Cursor::new(text.into_bytes()), TableLayout::RATINGS)?;
        let index: KeySetIndex = known.iter().copied().collect();
        RatingsExtractor::new().scan(table, &index)
    }

    #[test]
    fn test_rounds_and_coerces() {
        let out = scan(
            &["tt0000002", "tt0000003"],
            "tt0000002\t7.666\t120\ntt0000003\tN/A\t120\n",
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                RatingRecord::new("tt0000002", 7.7, 120),
                RatingRecord::new("tt0000003", 0.0, 120),
            ]
        );
    }

    #[test]
    fn test_unknown_keys_dropped_and_no_defaults() {
        let out = scan(&["tt1", "tt2"], "tt9\t5.0\t10\ntt1\t6.1\t\\N\n").unwrap();
        assert_eq!(out, vec![RatingRecord::new("tt1", 6.1, 0)]);
    }

    #[test]
    fn test_duplicate_keys_are_not_merged() {
        let out = scan(&["tt1"], "tt1\t6.0\t10\ntt1\t7.0\t20\n").unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], RatingRecord::new("tt1", 7.0, 20));
    }

    #[test]
    fn test_same_input_same_output() {
        let body = "tt1\t6.04\t10\ntt2\t8.95\t99\n";
        assert_eq!(scan(&["tt1", "tt2"], body).unwrap(), scan(&["tt1", "tt2"], body).unwrap());
    }

    #[test]
    fn test_missing_votes_column() {
        let text = "tconst\taverageRating\tvotes\n";
        let table =
            TableReader::from_reader(Cursor::new(text.as_bytes().to_vec()), TableLayout::RATINGS)
                .unwrap();
        let err = RatingsExtractor::new()
            .scan(table, &KeySetIndex::new())
            .unwrap_err();
        assert!(err.is_schema());
    }
}
