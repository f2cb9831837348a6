// --- File: src/error.rs ---

//! Errors raised while generating, configuring or iterating datasets.

use thiserror::Error;

/// All errors that can occur in this crate.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Noise must be a finite non-negative number, got {0}")]
    InvalidNoise(f64),

    #[error("Batch size must be positive")]
    InvalidBatchSize,

    #[error("Train split must lie in [0, 1], got {0}")]
    InvalidSplit(f64),

    #[error("Index {index} is out of bounds for a dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot iterate over the empty '{0}' pool")]
    EmptyDataset(String),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
