//! # titlex Core
//!
//! Streaming normalization of tab-delimited title catalogs.
//!
//! This crate provides the scanning and joining layer:
//!
//! - [`TableReader`] - Header-driven column resolution and fixed row width
//! - [`BasicsFilter`] - Titles of allowed types, with year and genre cleanup
//! - [`KeySetIndex`] - Keys from the basics pass, the closed world for joins
//! - [`PrincipalsAggregator`] - Allowed credits per known title
//! - [`RatingsExtractor`] - Ratings for known titles
//!
//! ## Example
//!
//! ```rust,no_run
//! use titlex_core::{AllowList, BasicsFilter, KeySetIndex, PrincipalsAggregator, RatingsExtractor};
//!
//! // Phase 1: which titles exist
//! let titles = BasicsFilter::new(AllowList::default_title_types())
//!     .filter("data/title.basics.tsv")
//!     .unwrap();
//! let index = KeySetIndex::from_records(&titles);
//!
//! // Phase 2: dependent files, joined against the index
//! let credits = PrincipalsAggregator::new(AllowList::default_categories())
//!     .aggregate("data/title.principals.tsv", &index)
//!     .unwrap();
//! let ratings = RatingsExtractor::new()
//!     .extract("data/title.ratings.tsv", &index)
//!     .unwrap();
//! ```

pub mod error;
pub mod record;
pub mod table;
pub mod coerce;
pub mod filter;
pub mod key_index;
pub mod basics;
pub mod principals;
pub mod ratings;
pub mod stats;

pub use error::{Error, Result, SchemaError};
pub use record::{TitleRecord, ParticipantAggregate, RatingRecord};
pub use table::{TableReader, TableLayout, ColumnMap, Row};
pub use filter::{Filter, AllowList};
pub use key_index::KeySetIndex;
pub use basics::BasicsFilter;
pub use principals::PrincipalsAggregator;
pub use ratings::RatingsExtractor;
pub use stats::CatalogStats;
