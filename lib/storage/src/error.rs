use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Core(#[from] titlex_core::Error),

    #[error(transparent)]
    Similarity(#[from] titlex_similarity::SimilarityError),

    #[error("Title not found: {0}")]
    UnknownKey(String),

    #[error("No titles found after the basics pass")]
    EmptyCatalog,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
