// File: crates/chart-core/src/error.rs
// Summary: Error types for rendering, bar validation and provider decoding.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures surfaced by a render call or chart construction.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
}

/// OHLC invariant violations reported by `Bar::try_new`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarError {
    #[error("non-finite price in bar")]
    NonFinite,
    #[error("low {low} above min(open, close) {body_low}")]
    LowAboveBody { low: f64, body_low: f64 },
    #[error("high {high} below max(open, close) {body_high}")]
    HighBelowBody { high: f64, body_high: f64 },
}

/// Decoding failures at the provider boundary.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("bar {index} rejected: {source}")]
    InvalidBar {
        index: usize,
        #[source]
        source: BarError,
    },

    #[error("bar {index} is earlier than its predecessor")]
    NonChronological { index: usize },

    #[error("payload contains no bar chunks")]
    Empty,
}

/// Failures of the external bar-data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
