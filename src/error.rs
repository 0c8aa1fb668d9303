//! Typed errors for the link extraction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction runs.
///
/// Finding zero links is not an error; it surfaces as
/// [`RunOutcome::NoMatches`](crate::types::run::RunOutcome::NoMatches) on a
/// successful report.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No input text was provided
    #[error("no input text provided")]
    InputEmpty,

    /// Another run is already in flight
    #[error("an extraction run is already in progress")]
    Busy,

    /// Inference service unavailable or failed
    #[error("inference service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service response did not match the declared schema
    #[error("malformed service payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
