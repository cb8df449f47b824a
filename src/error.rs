use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the navigation core
#[derive(Debug, Error)]
pub enum BiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, BiteError>;
