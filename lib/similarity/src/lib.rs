//! # titlex Similarity
//!
//! Count-vector features for titles and cosine similarity between them.
//!
//! ## Features
//!
//! - **Vocabulary**: Dense token indices in order of first appearance
//! - **Count vectorization**: Fixed-length occurrence counts per document
//! - **Cosine scoring**: Pairwise and batched, computed in `f64`
//!
//! ## Example
//!
//! ```rust
//! use titlex_similarity::{CountVectorizer, tokens_from_field};
//!
//! let corpus = vec![tokens_from_field("comedy,drama"), tokens_from_field("comedy")];
//! let mut vectorizer = CountVectorizer::new();
//! vectorizer.build_vocabulary(&corpus);
//!
//! let a = vectorizer.vectorize(["comedy", "comedy", "drama"]);
//! let b = vectorizer.vectorize(tokens_from_field("comedy,drama"));
//! assert_eq!(a.as_slice(), [2, 1]);
//!
//! let score = a.cosine_similarity(&b).unwrap();
//! assert!(score > 0.9);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Documents  │────>│ Vocabulary  │────>│ Vectorizer  │
//! │  (tokens)   │     │ (token→idx) │     │ (doc→counts)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │   Cosine    │
//!                                         │  (a, b)→f64 │
//!                                         └─────────────┘
//! ```

pub mod document;
pub mod vectorizer;
pub mod distance;

pub use document::{tokens_from_field, document_from_fields};
pub use vectorizer::{Vocabulary, CountVector, CountVectorizer};
pub use distance::{cosine_similarity, score_against, SimilarityError, Result};
