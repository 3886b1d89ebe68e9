// src/error.rs
use thiserror::Error;

/// Failures while reading the wallet dataset. All of them are non-fatal:
/// the loader logs and falls back to an empty table.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read wallet data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in wallet data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data format: expected an array, got {0}")]
    NotAnArray(&'static str),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("unknown page request: {0:?}")]
    Unknown(String),
}
