//! Track generation errors
//!
//! Every stage validates its own inputs and reports one of two kinds of
//! failure. Nothing is retried; a failed stage aborts the whole generation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// A tunable is out of range (segment count, width, step, spawn index)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A polyline handed between stages is malformed or too short
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
