pub mod error;
pub mod store;
pub mod memory;
pub mod pipeline;
pub mod corpus;

pub use error::{StorageError, Result};
pub use store::{StoredTitle, TitleStore};
pub use memory::MemoryStore;
pub use pipeline::{run_pipeline, PipelineConfig, PipelineReport};
pub use corpus::{TitleCorpus, TitleFeatures, FeatureSimilarity};
