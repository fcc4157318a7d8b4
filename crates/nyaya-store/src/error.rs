use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("corpus file not found: {0}")]
    CorpusNotFound(std::path::PathBuf),

    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate chunk id: {0}")]
    DuplicateId(String),

    #[error("corpus contains no chunks")]
    EmptyCorpus,
}
