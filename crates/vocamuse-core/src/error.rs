use vocamuse_types::ValidationError;

/// Failure of the underlying blob store. In-memory state stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage quota exceeded while writing '{0}'")]
    QuotaExceeded(String),
}

/// Errors from collection operations. None of them leave a collection modified.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No entry found for {0}")]
    NotFound(String),

    #[error("Import rejected: {0}")]
    ImportFormat(String),
}
