//! Count-vector features for every stored title
//!
//! Genres and participants are vectorized against separate vocabularies so
//! the downstream scorer can weight them independently.

use crate::error::{Result, StorageError};
use crate::store::{StoredTitle, TitleStore};
use ahash::AHashMap;
use rayon::prelude::*;
use serde::Serialize;
use titlex_similarity::{tokens_from_field, CountVector, CountVectorizer, Vocabulary};
use tracing::info;

/// Feature vectors of one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFeatures {
    pub genres: CountVector,
    pub participants: CountVector,
}

/// Per-feature cosine similarity between two titles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSimilarity {
    pub genres: f64,
    pub participants: f64,
}

pub struct TitleCorpus {
    slots: AHashMap<String, usize>,
    genres: CountVectorizer,
    participants: CountVectorizer,
    features: Vec<TitleFeatures>,
}

impl TitleCorpus {
    pub fn build(titles: &[StoredTitle]) -> Self {
        let genre_docs: Vec<Vec<String>> =
            titles.iter().map(|t| tokens_from_field(&t.genre_tags)).collect();
        let participant_docs: Vec<Vec<String>> =
            titles.iter().map(|t| tokens_from_field(&t.participant_ids)).collect();

        let mut genres = CountVectorizer::new();
        genres.build_vocabulary(&genre_docs);
        let mut participants = CountVectorizer::new();
        participants.build_vocabulary(&participant_docs);

        // Vocabularies are frozen from here on; vectorizing is read-only.
        let features: Vec<TitleFeatures> = genre_docs
            .par_iter()
            .zip(participant_docs.par_iter())
            .map(|(g, p)| TitleFeatures {
                genres: genres.vectorize(g),
                participants: participants.vectorize(p),
            })
            .collect();

        let slots = titles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.key.clone(), i))
            .collect();

        info!(
            "Corpus built: {} titles, {} genre tokens, {} participant tokens",
            titles.len(),
            genres.vocabulary().len(),
            participants.vocabulary().len()
        );

        Self {
            slots,
            genres,
            participants,
            features,
        }
    }

    pub fn from_store<S: TitleStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self::build(&store.titles()?))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn genre_vocabulary(&self) -> &Vocabulary {
        self.genres.vocabulary()
    }

    pub fn participant_vocabulary(&self) -> &Vocabulary {
        self.participants.vocabulary()
    }

    pub fn features(&self, key: &str) -> Option<&TitleFeatures> {
        self.slots.get(key).map(|&i| &self.features[i])
    }

    /// Project an arbitrary title onto this corpus' vocabularies.
    pub fn vectorize(&self, title: &StoredTitle) -> TitleFeatures {
        TitleFeatures {
            genres: self.genres.vectorize(tokens_from_field(&title.genre_tags)),
            participants: self.participants.vectorize(tokens_from_field(&title.participant_ids)),
        }
    }

    pub fn similarity(&self, a: &str, b: &str) -> Result<FeatureSimilarity> {
        let fa = self.features(a).ok_or_else(|| StorageError::UnknownKey(a.to_string()))?;
        let fb = self.features(b).ok_or_else(|| StorageError::UnknownKey(b.to_string()))?;
        Ok(FeatureSimilarity {
            genres: fa.genres.cosine_similarity(&fb.genres)?,
            participants: fa.participants.cosine_similarity(&fb.participants)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use titlex_core::{ParticipantAggregate, TitleRecord};

    fn store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .upsert_titles(&[
                TitleRecord::new("tt1", 1999, "comedy,drama"),
                TitleRecord::new("tt2", 2001, "comedy"),
                TitleRecord::new("tt3", 2010, "horror"),
            ])
            .unwrap();
        store
            .update_participants(&[
                ParticipantAggregate::new("tt1", "nm1,nm2"),
                ParticipantAggregate::new("tt2", "nm2"),
                ParticipantAggregate::new("tt3", ""),
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_vocabularies_in_first_appearance_order() {
        let corpus = TitleCorpus::from_store(&store()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.genre_vocabulary().tokens(), ["comedy", "drama", "horror"]);
        assert_eq!(corpus.participant_vocabulary().tokens(), ["nm1", "nm2"]);
        assert_eq!(corpus.features("tt1").unwrap().genres.as_slice(), [1, 1, 0]);
        assert!(corpus.features("tt3").unwrap().participants.is_zero());
    }

    #[test]
    fn test_similarity_per_feature() {
        let corpus = TitleCorpus::from_store(&store()).unwrap();
        let same = corpus.similarity("tt2", "tt2").unwrap();
        assert!((same.genres - 1.0).abs() < 1e-12);

        let disjoint = corpus.similarity("tt1", "tt3").unwrap();
        assert_eq!(disjoint.genres, 0.0);
        assert_eq!(disjoint.participants, 0.0);

        assert!(matches!(
            corpus.similarity("tt1", "tt404"),
            Err(StorageError::UnknownKey(k)) if k == "tt404"
        ));
    }

    #[test]
    fn test_vectorize_unseen_title() {
        let corpus = TitleCorpus::from_store(&store()).unwrap();
        let mut title = StoredTitle::from_record(&TitleRecord::new("tt9", 2020, "drama,western"));
        title.participant_ids = "nm2,nm7".into();
        let features = corpus.vectorize(&title);
        assert_eq!(features.genres.as_slice(), [0, 1, 0]);
        assert_eq!(features.participants.as_slice(), [0, 1]);
    }
}
