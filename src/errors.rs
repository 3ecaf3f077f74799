//! # Error Types Module
//!
//! Error types for span parsing, entity recognition and configuration loading.
//! Span-level errors never leave the aggregator; only recognizer failures reach
//! callers of the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decompose a span into magnitude and units
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("quantity text has no tokens")]
    Empty,
    #[error("invalid magnitude: {0:?}")]
    InvalidMagnitude(String),
}

/// Failure of the external entity recognizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecognizerError {
    #[error("entity recognizer failed: {0}")]
    Failed(String),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid unit table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors from the parallel pipeline entry point
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Recognizer(#[from] RecognizerError),
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("worker pool closed: {0}")]
    PoolClosed(#[from] tokio::sync::AcquireError),
}
