//! Predicate error types.
//!
//! These are hard errors that abort the operation that hit them. A target
//! that simply doesn't fit a workload is reported through
//! [`FailureReason`](crate::FailureReason) values, never through this type.

use thiserror::Error;

/// Errors that can occur during predicate evaluation and config-source handling.
#[derive(Debug, Error)]
pub enum PredicateError {
    #[error("unrecognized config source type, all source subfields were nil")]
    UnrecognizedConfigSource,

    #[error("config source parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A filter-specific failure with no more precise variant.
    #[error("{0}")]
    Filter(String),

    #[error("predicate {predicate} failed to evaluate: {source}")]
    Evaluation {
        predicate: String,
        #[source]
        source: Box<PredicateError>,
    },
}

pub type PredicateResult<T> = Result<T, PredicateError>;
