//! # titlex
//!
//! Normalizes periodically published title catalogs (titles, credited
//! participants, ratings) into per-title records, and derives count-vector
//! features for scoring similarity between titles.
//!
//! ## Quick Start
//!
//! ### As a Binary
//!
//! ```bash
//! titlex --data-dir ./data/extracted load
//! titlex --data-dir ./data/extracted similar tt0133093 tt0234215
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use titlex::prelude::*;
//!
//! let store = MemoryStore::new();
//! let report = run_pipeline(&PipelineConfig::new("./data/extracted"), &store).unwrap();
//! println!("{} titles loaded", report.titles);
//!
//! let corpus = TitleCorpus::from_store(&store).unwrap();
//! let score = corpus.similarity("tt0133093", "tt0234215").unwrap();
//! println!("genres {:.3}, participants {:.3}", score.genres, score.participants);
//! ```
//!
//! ## Crate Structure
//!
//! - `titlex-core` - Table scanning, filters, key index, error taxonomy
//! - `titlex-similarity` - Vocabulary, count vectors, cosine similarity
//! - `titlex-storage` - Storage contract, in-memory store, two-phase pipeline

// Re-export core types
pub use titlex_core::{
    AllowList, BasicsFilter, CatalogStats, Error, KeySetIndex, ParticipantAggregate,
    PrincipalsAggregator, RatingRecord, RatingsExtractor, Result, SchemaError, TableLayout,
    TableReader, TitleRecord,
};

// Re-export similarity
pub use titlex_similarity::{
    cosine_similarity, score_against, tokens_from_field, CountVector, CountVectorizer,
    SimilarityError, Vocabulary,
};

// Re-export storage
pub use titlex_storage::{
    run_pipeline, FeatureSimilarity, MemoryStore, PipelineConfig, PipelineReport, StorageError,
    StoredTitle, TitleCorpus, TitleStore,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AllowList, BasicsFilter, KeySetIndex, PrincipalsAggregator, RatingsExtractor,
        TitleRecord, ParticipantAggregate, RatingRecord,
        CountVectorizer, CountVector, Vocabulary, cosine_similarity,
        MemoryStore, TitleStore, PipelineConfig, run_pipeline, TitleCorpus,
        Error, Result,
    };
}
