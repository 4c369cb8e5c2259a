//! Count vectorization
//!
//! A [`Vocabulary`] assigns each distinct token a dense index in order of
//! first appearance across a corpus. [`CountVectorizer::vectorize`] projects a
//! token document onto that vocabulary as per-token occurrence counts.
//!
//! Building takes `&mut self` and vectorizing takes `&self`, so a vectorizer
//! can be shared read-only across threads once its vocabulary is built.

use crate::distance::SimilarityError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Token → dense index, insertion-ordered. Empty tokens are never indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every distinct non-empty token of `corpus`, scanning documents in order.
    pub fn build<C, D, T>(corpus: C) -> Self
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut vocabulary = Self::new();
        for document in corpus {
            for token in document {
                vocabulary.insert(token.as_ref());
            }
        }
        vocabulary
    }

    /// Index `token` if it is new and non-empty; returns its index.
    pub fn insert(&mut self, token: &str) -> Option<usize> {
        if token.is_empty() {
            return None;
        }
        if let Some(&i) = self.index.get(token) {
            return Some(i);
        }
        let i = self.tokens.len();
        self.index.insert(token.to_string(), i);
        self.tokens.push(token.to_string());
        Some(i)
    }

    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token at `index`, the inverse of [`Vocabulary::get`]
    #[inline]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Restores a vocabulary from its token list, keeping every index as listed.
impl TryFrom<Vec<String>> for Vocabulary {
    type Error = SimilarityError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        let mut index = AHashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(SimilarityError::InvalidVocabulary(format!("empty token at index {i}")));
            }
            if index.insert(token.clone(), i).is_some() {
                return Err(SimilarityError::InvalidVocabulary(format!(
                    "duplicate token `{token}` at index {i}"
                )));
            }
        }
        Ok(Self { tokens, index })
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.tokens
    }
}

/// Per-token occurrence counts relative to one [`Vocabulary`].
///
/// Slots are `u8` and saturate at `u8::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountVector {
    counts: Vec<u8>,
}

impl CountVector {
    #[inline]
    #[must_use]
    pub fn new(counts: Vec<u8>) -> Self {
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self { counts: vec![0; len] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    /// Sum of all slots
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    #[inline]
    fn bump(&mut self, slot: usize) {
        self.counts[slot] = self.counts[slot].saturating_add(1);
    }
}

impl From<Vec<u8>> for CountVector {
    fn from(counts: Vec<u8>) -> Self {
        Self::new(counts)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    vocabulary: Vocabulary,
}

impl CountVectorizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Replace the vocabulary with one built from `corpus`.
    pub fn build_vocabulary<C, D, T>(&mut self, corpus: C)
    where
        C: IntoIterator<Item = D>,
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.vocabulary = Vocabulary::build(corpus);
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Count vocabulary tokens in `document`; unknown tokens are ignored.
    pub fn vectorize<D, T>(&self, document: D) -> CountVector
    where
        D: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut vector = CountVector::zeros(self.vocabulary.len());
        for token in document {
            if let Some(slot) = self.vocabulary.get(token.as_ref()) {
                vector.bump(slot);
            }
        }
        vector
    }
}
