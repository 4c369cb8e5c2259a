use serde::{Deserialize, Serialize};

/// A kept title from the basics file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub key: String,
    /// `0` when the source year was missing or unparsable
    pub release_year: u16,
    /// Lowercase, whitespace-free, comma-separated; empty when unspecified
    pub genre_tags: String,
}

impl TitleRecord {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, release_year: u16, genre_tags: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            release_year,
            genre_tags: genre_tags.into(),
        }
    }

    #[inline]
    pub fn has_known_year(&self) -> bool {
        self.release_year != 0
    }
}

/// Credited participants of one known title, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAggregate {
    pub key: String,
    /// Comma-joined participant ids; duplicates are kept, empty when none matched
    pub participant_ids: String,
}

impl ParticipantAggregate {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, participant_ids: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            participant_ids: participant_ids.into(),
        }
    }

    /// Number of credited ids, counting duplicates
    pub fn len(&self) -> usize {
        if self.participant_ids.is_empty() {
            0
        } else {
            self.participant_ids.split(',').count()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participant_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub key: String,
    /// Rounded to one decimal place
    pub average_rating: f64,
    pub vote_count: u32,
}

impl RatingRecord {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, average_rating: f64, vote_count: u32) -> Self {
        Self {
            key: key.into(),
            average_rating,
            vote_count,
        }
    }
}
