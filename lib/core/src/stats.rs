use serde::{Deserialize, Serialize};

/// Bounds of the rated catalog, used to validate and scale filter ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub min_votes: u32,
    pub max_votes: u32,
    pub min_year: u16,
    pub max_year: u16,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl CatalogStats {
    fn seed(year: u16, rating: f64, votes: u32) -> Self {
        Self {
            min_votes: votes,
            max_votes: votes,
            min_year: year,
            max_year: year,
            min_rating: rating,
            max_rating: rating,
        }
    }

    fn observe(&mut self, year: u16, rating: f64, votes: u32) {
        self.min_votes = self.min_votes.min(votes);
        self.max_votes = self.max_votes.max(votes);
        self.min_year = self.min_year.min(year);
        self.max_year = self.max_year.max(year);
        self.min_rating = self.min_rating.min(rating);
        self.max_rating = self.max_rating.max(rating);
    }

    /// Fold `(release_year, average_rating, vote_count)` observations.
    ///
    /// Returns `None` for an empty input.
    pub fn from_observations<I>(observations: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u16, f64, u32)>,
    {
        let mut iter = observations.into_iter();
        let (year, rating, votes) = iter.next()?;
        let mut stats = Self::seed(year, rating, votes);
        for (year, rating, votes) in iter {
            stats.observe(year, rating, votes);
        }
        Some(stats)
    }
}
