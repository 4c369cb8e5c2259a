use crate::error::Result;
use serde::{Deserialize, Serialize};
use titlex_core::{CatalogStats, ParticipantAggregate, RatingRecord, TitleRecord};

/// A title as persisted, with whatever the dependent passes have filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTitle {
    pub key: String,
    pub release_year: u16,
    pub genre_tags: String,
    #[serde(default)]
    pub participant_ids: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u32>,
}

impl StoredTitle {
    pub fn from_record(record: &TitleRecord) -> Self {
        Self {
            key: record.key.clone(),
            release_year: record.release_year,
            genre_tags: record.genre_tags.clone(),
            participant_ids: String::new(),
            average_rating: None,
            vote_count: None,
        }
    }

    #[inline]
    pub fn is_rated(&self) -> bool {
        self.average_rating.is_some()
    }
}

/// Persistence contract for normalized titles.
///
/// Titles are inserted or updated by key. Participants and ratings only
/// update titles that already exist; rows for unknown keys are skipped and
/// not counted. Repeated writes for the same key overwrite each other.
pub trait TitleStore: Send + Sync {
    /// Insert or update year and genres; returns the number of records written.
    fn upsert_titles(&self, titles: &[TitleRecord]) -> Result<usize>;

    /// Returns the number of writes applied to existing titles.
    fn update_participants(&self, aggregates: &[ParticipantAggregate]) -> Result<usize>;

    /// Returns the number of writes applied to existing titles.
    fn update_ratings(&self, ratings: &[RatingRecord]) -> Result<usize>;

    fn keys(&self) -> Result<Vec<String>>;

    fn get(&self, key: &str) -> Result<Option<StoredTitle>>;

    fn titles(&self) -> Result<Vec<StoredTitle>>;

    /// Bounds over rated titles; `None` when nothing is rated yet
    fn stats(&self) -> Result<Option<CatalogStats>>;
}
