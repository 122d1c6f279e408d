use thiserror::Error;

/// Errors produced while persisting or restoring state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to determine a platform config directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The persisted blob could not be brought up to the current version.
    #[error("Migration error: {0}")]
    Migration(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
