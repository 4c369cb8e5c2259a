//! Two-phase catalog load
//!
//! Phase 1 filters the basics file, upserts the titles and builds the key
//! index from every key the store now holds, so titles kept from earlier
//! runs are refreshed too. Phase 2 scans the principals and ratings files against
//! that index as two independent tasks, then writes their results update-only.
//! The first fatal error ends the run; nothing is retried or resumed.

use crate::error::{Result, StorageError};
use crate::store::TitleStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use titlex_core::{AllowList, BasicsFilter, KeySetIndex, PrincipalsAggregator, RatingsExtractor};
use tracing::info;

pub const BASICS_FILE: &str = "title.basics.tsv";
pub const PRINCIPALS_FILE: &str = "title.principals.tsv";
pub const RATINGS_FILE: &str = "title.ratings.tsv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding the extracted dataset files
    pub data_dir: PathBuf,
    #[serde(default = "default_basics_file")]
    pub basics_file: String,
    #[serde(default = "default_principals_file")]
    pub principals_file: String,
    #[serde(default = "default_ratings_file")]
    pub ratings_file: String,
    #[serde(default = "AllowList::default_title_types")]
    pub title_types: AllowList,
    #[serde(default = "AllowList::default_categories")]
    pub categories: AllowList,
}

fn default_basics_file() -> String {
    BASICS_FILE.to_string()
}

fn default_principals_file() -> String {
    PRINCIPALS_FILE.to_string()
}

fn default_ratings_file() -> String {
    RATINGS_FILE.to_string()
}

impl PipelineConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            basics_file: default_basics_file(),
            principals_file: default_principals_file(),
            ratings_file: default_ratings_file(),
            title_types: AllowList::default_title_types(),
            categories: AllowList::default_categories(),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title_types.is_empty() {
            return Err(StorageError::Config("title_types must not be empty".into()));
        }
        if self.categories.is_empty() {
            return Err(StorageError::Config("categories must not be empty".into()));
        }
        Ok(())
    }

    pub fn basics_path(&self) -> PathBuf {
        self.data_dir.join(&self.basics_file)
    }

    pub fn principals_path(&self) -> PathBuf {
        self.data_dir.join(&self.principals_file)
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(&self.ratings_file)
    }
}

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Titles accepted from this run's basics file
    pub titles: usize,
    /// Keys the dependent files were joined against
    pub indexed_keys: usize,
    pub participants_updated: usize,
    pub ratings_updated: usize,
    pub elapsed: Duration,
}

pub fn run_pipeline<S: TitleStore + ?Sized>(config: &PipelineConfig, store: &S) -> Result<PipelineReport> {
    config.validate()?;
    let started = Instant::now();

    info!("Filtering basics data...");
    let titles = BasicsFilter::new(config.title_types.clone()).filter(config.basics_path())?;
    let stage = Instant::now();
    store.upsert_titles(&titles)?;
    info!("Basics data inserted: {} titles ({:?})", titles.len(), stage.elapsed());

    let title_count = titles.len();
    drop(titles);
    let index: KeySetIndex = store.keys()?.into_iter().collect();
    if index.is_empty() {
        return Err(StorageError::EmptyCatalog);
    }

    info!("Filtering principals and ratings data...");
    let principals = PrincipalsAggregator::new(config.categories.clone());
    let ratings = RatingsExtractor::new();
    let (credits, rated) = rayon::join(
        || principals.aggregate(config.principals_path(), &index),
        || ratings.extract(config.ratings_path(), &index),
    );
    let credits = credits?;
    let rated = rated?;

    let stage = Instant::now();
    let participants_updated = store.update_participants(&credits)?;
    info!("Principals data inserted: {} titles ({:?})", participants_updated, stage.elapsed());

    let stage = Instant::now();
    let ratings_updated = store.update_ratings(&rated)?;
    info!("Ratings data inserted: {} records ({:?})", ratings_updated, stage.elapsed());

    let report = PipelineReport {
        titles: title_count,
        indexed_keys: index.len(),
        participants_updated,
        ratings_updated,
        elapsed: started.elapsed(),
    };
    info!("Filtering done! ({:?})", report.elapsed);
    Ok(report)
}
