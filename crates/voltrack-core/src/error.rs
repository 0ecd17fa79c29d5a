use thiserror::Error;

/// Validation and ingestion errors exposed by `voltrack-core`.
///
/// Core numeric operations are total and clamp rather than fail; these
/// variants only surface at parse boundaries (timestamps, enums, JSON).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timestamp must be RFC3339 UTC or a calendar date: '{value}'")]
    UnparseableTimestamp { value: String },

    #[error("invalid volatility trend '{value}', expected one of increasing, decreasing, stable")]
    InvalidTrend { value: String },

    #[error("invalid signal filter '{value}', expected one of all, buy, sell, strong")]
    InvalidFilter { value: String },

    #[error("invalid unit convention '{value}', expected one of fraction-at-one, percent-at-one")]
    InvalidConvention { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
