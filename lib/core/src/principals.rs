//! Principals pass: who is credited on each known title
//!
//! Every key in the index gets exactly one aggregate, including keys with no
//! matching credits. Keys the index does not know are dropped.

use crate::error::Result;
use crate::filter::{AllowList, Filter};
use crate::key_index::KeySetIndex;
use crate::record::ParticipantAggregate;
use crate::table::{TableLayout, TableReader};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub const KEY_COLUMN: &str = "tconst";
pub const PARTICIPANT_COLUMN: &str = "nconst";
pub const CATEGORY_COLUMN: &str = "category";

/// Separator between participant ids in an aggregate
pub const ID_SEPARATOR: &str = ",";

#[derive(Debug, Clone)]
pub struct PrincipalsAggregator {
    categories: AllowList,
    layout: TableLayout,
}

impl PrincipalsAggregator {
    pub fn new(categories: AllowList) -> Self {
        Self {
            categories,
            layout: TableLayout::PRINCIPALS,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn categories(&self) -> &AllowList {
        &self.categories
    }

    pub fn aggregate<P: AsRef<Path>>(
        &self,
        path: P,
        known_keys: &KeySetIndex,
    ) -> Result<Vec<ParticipantAggregate>> {
        let started = Instant::now();
        let table = TableReader::open(path.as_ref(), self.layout)?;
        let aggregates = self.scan(table, known_keys)?;
        info!(
            "Principals aggregated: {} titles from {:?} ({:?})",
            aggregates.len(),
            path.as_ref(),
            started.elapsed()
        );
        Ok(aggregates)
    }

    /// Aggregates come back in `known_keys` order.
    pub fn scan<R: Read>(
        &self,
        table: TableReader<R>,
        known_keys: &KeySetIndex,
    ) -> Result<Vec<ParticipantAggregate>> {
        let columns = table.resolve_columns([KEY_COLUMN, PARTICIPANT_COLUMN, CATEGORY_COLUMN])?;

        let mut credits: Vec<Vec<String>> = vec![Vec::new(); known_keys.len()];
        let mut scanned = 0usize;
        let mut matched = 0usize;
        for row in table {
            let row = row?;
            scanned += 1;

            let [key, participant, category] = columns.project(&row);
            if !self.categories.permits(category) {
                continue;
            }
            if let Some(slot) = known_keys.slot(key) {
                credits[slot].push(participant.to_string());
                matched += 1;
            }
        }
        debug!("Principals scan: {} rows, {} credits matched", scanned, matched);

        Ok(known_keys
            .iter()
            .zip(credits)
            .map(|(key, ids)| ParticipantAggregate::new(key, ids.join(ID_SEPARATOR)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SchemaError};
    use std::io::Cursor;

    const HEADER: &str = "tconst\tordering\tnconst\tcategory\tjob\tcharacters";

    fn scan(known: &[&str], body: &str) -> Result<Vec<ParticipantAggregate>> {
        let text = format!("{HEADER}\n{body}");
        let table =
            TableReader::from_reader(Cursor::new(text.into_bytes()), TableLayout::PRINCIPALS)?;
        let index: KeySetIndex = known.iter().copied().collect();
        PrincipalsAggregator::new(AllowList::default_categories()).scan(table, &index)
    }

    #[test]
    fn test_filters_by_category() {
        let out = scan(
            &["tt0000002"],
            "tt0000002\t1\tnm1\tactor\t\\N\t\\N\n\
             tt0000002\t2\tnm2\tcinematographer\t\\N\t\\N\n",
        )
        .unwrap();
        assert_eq!(out, vec![ParticipantAggregate::new("tt0000002", "nm1")]);
    }

    #[test]
    fn test_every_known_key_appears_once() {
        let out = scan(
            &["tt1", "tt2", "tt3"],
            "tt2\t1\tnm5\tdirector\t\\N\t\\N\n\
             tt9\t1\tnm6\tactor\t\\N\t\\N\n\
             tt2\t2\tnm5\twriter\t\\N\t\\N\n",
        )
        .unwrap();
        assert_eq!(
            out,
            vec![
                ParticipantAggregate::new("tt1", ""),
                ParticipantAggregate::new("tt2", "nm5,nm5"),
                ParticipantAggregate::new("tt3", ""),
            ]
        );
    }

    #[test]
    fn test_keeps_file_order() {
        let out = scan(
            &["tt1"],
            "tt1\t1\tnm3\tactress\t\\N\t\\N\n\
             tt1\t2\tnm1\tactor\t\\N\t\\N\n\
             tt1\t3\tnm2\twriter\t\\N\t\\N\n",
        )
        .unwrap();
        assert_eq!(out[0].participant_ids, "nm3,nm1,nm2");
    }

    #[test]
    fn test_bad_row_discards_everything() {
        let err = scan(
            &["tt1"],
            "tt1\t1\tnm3\tactress\t\\N\t\\N\n\
             tt1\t2\tnm1\tactor\n",
        )
        .unwrap_err();
        assert!(err.is_row_shape());
    }

    #[test]
    fn test_missing_category_column() {
        let text = "tconst\tordering\tnconst\tjob\tcharacters\ntt1\t1\tnm1\t\\N\t\\N\n";
        let table =
            TableReader::from_reader(Cursor::new(text.as_bytes().to_vec()), TableLayout::open("principals"))
                .unwrap();
        let index: KeySetIndex = ["tt1"].into_iter().collect();
        let err = PrincipalsAggregator::new(AllowList::default_categories())
            .scan(table, &index)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Schema { kind: SchemaError::MissingColumn(ref c), .. } if c == CATEGORY_COLUMN
        ));
    }
}
