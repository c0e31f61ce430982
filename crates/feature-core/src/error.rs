//! Error types for the feature engineering pipeline.

use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Ingestion and persistence errors.
///
/// All of these are fatal: the computation aborts before any per-group
/// work begins.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Missing required column '{column}' in file {file}")]
    MissingColumn { file: String, column: String },

    #[error("No CSV files found in directory: {0}")]
    NoFiles(String),

    #[error("Input panel is empty")]
    EmptyPanel,

    #[error("Unparsable date value '{value}' in file {file}")]
    InvalidDate { file: String, value: String },

    #[error("Column '{0}' has no values to compute a fill mean from")]
    EmptyColumn(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Write error: {0}")]
    WriteError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-group computation and assembly errors.
///
/// These indicate an ingestion-layer defect and are promoted to a fatal
/// error for the whole run rather than being masked.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Input panel is empty")]
    EmptyPanel,

    #[error("Duplicate date {date} for ticker {ticker}")]
    DuplicateDate { ticker: String, date: chrono::NaiveDate },

    #[error("Feature series for ticker {ticker} has {actual} values, expected {expected}")]
    LengthMismatch {
        ticker: String,
        expected: usize,
        actual: usize,
    },

    #[error("No computed features for row ({ticker}, {date})")]
    MissingKey { ticker: String, date: chrono::NaiveDate },

    #[error("{count} computed feature rows matched no input row")]
    UnmatchedFeatures { count: usize },
}

/// Result type alias for pipeline operations.
pub type FeatureResult<T> = Result<T, FeatureError>;
