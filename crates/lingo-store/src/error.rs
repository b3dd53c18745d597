use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed resource document {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported document format {found} in {path} (expected {expected})")]
    UnsupportedFormat {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("document {path} declares language `{found}`, expected `{expected}`")]
    LanguageMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("write task failed: {0}")]
    WriteTask(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
