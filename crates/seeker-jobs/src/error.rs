//! Error types for job execution.

use seeker_search::SearchError;
use thiserror::Error;

/// Errors surfaced by [`crate::Job::start`].
#[derive(Debug, Error)]
pub enum JobError {
    /// The search run failed (unknown target, dispatch failure)
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Result type for job operations.
pub type Result<T> = std::result::Result<T, JobError>;
