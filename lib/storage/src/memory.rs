use crate::error::Result;
use crate::store::{StoredTitle, TitleStore};
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use titlex_core::{CatalogStats, ParticipantAggregate, RatingRecord, TitleRecord};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Inner {
    slots: AHashMap<String, usize>,
    rows: Vec<StoredTitle>,
}

impl Inner {
    fn row_mut(&mut self, key: &str) -> Option<&mut StoredTitle> {
        let slot = *self.slots.get(key)?;
        self.rows.get_mut(slot)
    }
}

/// In-process [`TitleStore`] keeping titles in insertion order.
///
/// Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }
}

impl TitleStore for MemoryStore {
    fn upsert_titles(&self, titles: &[TitleRecord]) -> Result<usize> {
        let mut inner = self.inner.write();
        for title in titles {
            match inner.row_mut(&title.key) {
                Some(row) => {
                    row.release_year = title.release_year;
                    row.genre_tags = title.genre_tags.clone();
                }
                None => {
                    let slot = inner.rows.len();
                    inner.slots.insert(title.key.clone(), slot);
                    inner.rows.push(StoredTitle::from_record(title));
                }
            }
        }
        debug!("Upserted {} titles, store holds {}", titles.len(), inner.rows.len());
        Ok(titles.len())
    }

    fn update_participants(&self, aggregates: &[ParticipantAggregate]) -> Result<usize> {
        let mut inner = self.inner.write();
        let mut applied = 0;
        for aggregate in aggregates {
            match inner.row_mut(&aggregate.key) {
                Some(row) => {
                    row.participant_ids = aggregate.participant_ids.clone();
                    applied += 1;
                }
                None => warn!("Skipping participants for unknown title {}", aggregate.key),
            }
        }
        Ok(applied)
    }

    fn update_ratings(&self, ratings: &[RatingRecord]) -> Result<usize> {
        let mut inner = self.inner.write();
        let mut applied = 0;
        for rating in ratings {
            match inner.row_mut(&rating.key) {
                Some(row) => {
                    row.average_rating = Some(rating.average_rating);
                    row.vote_count = Some(rating.vote_count);
                    applied += 1;
                }
                None => warn!("Skipping rating for unknown title {}", rating.key),
            }
        }
        Ok(applied)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.inner.read().rows.iter().map(|r| r.key.clone()).collect())
    }

    fn get(&self, key: &str) -> Result<Option<StoredTitle>> {
        let inner = self.inner.read();
        Ok(inner.slots.get(key).map(|&slot| inner.rows[slot].clone()))
    }

    fn titles(&self) -> Result<Vec<StoredTitle>> {
        Ok(self.inner.read().rows.clone())
    }

    fn stats(&self) -> Result<Option<CatalogStats>> {
        let inner = self.inner.read();
        Ok(CatalogStats::from_observations(inner.rows.iter().filter_map(|row| {
            Some((row.release_year, row.average_rating?, row.vote_count?))
        })))
    }
}
