use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("cannot read input table {}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PreprocessError>;
