//! Error types for the search subsystem.
//!
//! Fetch and evaluation errors are recovered inside a run and only logged.
//! Everything that reaches the caller is a [`SearchError`].

use crate::candidate::Candidate;
use seeker_core::{SeekerError, TargetId};
use thiserror::Error;

/// Boxed underlying cause carried by capability errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A source failed to return candidates.
#[derive(Debug, Error)]
#[error("fetch from {source_name} failed: {cause}")]
pub struct FetchError {
    /// Name of the failing source
    pub source_name: String,
    /// Underlying cause
    #[source]
    pub cause: BoxError,
}

impl FetchError {
    /// Create a fetch error for `source_name`.
    pub fn new(source_name: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            source_name: source_name.into(),
            cause: cause.into(),
        }
    }
}

/// The inventory policy could not decide whether a candidate is needed.
#[derive(Debug, Error)]
#[error("could not evaluate {candidate}: {cause}")]
pub struct EvaluationError {
    /// Description of the candidate being evaluated
    pub candidate: String,
    /// Underlying cause
    #[source]
    pub cause: BoxError,
}

impl EvaluationError {
    /// Create an evaluation error for `candidate`.
    pub fn new(candidate: &Candidate, cause: impl Into<BoxError>) -> Self {
        Self {
            candidate: candidate.to_string(),
            cause: cause.into(),
        }
    }
}

/// The download dispatcher could not enqueue a candidate.
#[derive(Debug, Error)]
#[error("could not dispatch {candidate}: {cause}")]
pub struct DispatchError {
    /// Description of the candidate being dispatched
    pub candidate: String,
    /// Underlying cause
    #[source]
    pub cause: BoxError,
}

impl DispatchError {
    /// Create a dispatch error for `candidate`.
    pub fn new(candidate: &Candidate, cause: impl Into<BoxError>) -> Self {
        Self {
            candidate: candidate.to_string(),
            cause: cause.into(),
        }
    }
}

/// Errors that abort a search run or a registry operation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The target ID does not resolve to an item
    #[error("target not found: {target_id}")]
    TargetNotFound {
        /// The ID that failed to resolve
        target_id: TargetId,
    },

    /// Dispatch failed after a candidate was accepted
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// No source with this name is registered
    #[error("unknown source: {name}")]
    UnknownSource {
        /// The requested source name
        name: String,
    },

    /// Core error (validation, configuration)
    #[error("core error: {0}")]
    Core(#[from] SeekerError),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
