//! Capability traits consumed by a search run.
//!
//! The orchestrator only talks to collaborators through these traits. Real
//! adapters (indexer clients, the episode store, the download queue, a UI
//! notification channel) implement them outside this crate.

use crate::candidate::Candidate;
use crate::error::{DispatchError, EvaluationError, FetchError, Result};
use async_trait::async_trait;
use seeker_core::{TargetId, TargetItem};
use std::sync::Arc;

/// A named content source that can be searched for a target.
#[async_trait]
pub trait Source: Send + Sync {
    /// Stable name used in progress messages and logs.
    fn name(&self) -> &str;

    /// Fetch candidates for the target.
    ///
    /// # Errors
    /// Returns [`FetchError`] when the source cannot be reached or its
    /// response cannot be parsed.
    async fn fetch(&self, target: &TargetItem) -> std::result::Result<Vec<Candidate>, FetchError>;
}

/// Supplies the sources a run must query.
pub trait SourceRegistry: Send + Sync {
    /// Enabled sources, in a stable order.
    fn enabled_sources(&self) -> Vec<Arc<dyn Source>>;
}

/// Resolves target IDs to displayable items.
#[async_trait]
pub trait TargetResolver: Send + Sync {
    /// Look up the item for `id`.
    ///
    /// # Errors
    /// Returns [`crate::SearchError::TargetNotFound`] for unknown IDs.
    async fn resolve(&self, id: TargetId) -> Result<TargetItem>;
}

/// Decides whether a candidate is still wanted.
#[async_trait]
pub trait InventoryPolicy: Send + Sync {
    /// Returns `true` if the candidate should be downloaded.
    async fn is_needed(
        &self,
        candidate: &Candidate,
    ) -> std::result::Result<bool, EvaluationError>;
}

/// Commits a candidate to retrieval.
#[async_trait]
pub trait DownloadDispatcher: Send + Sync {
    /// Enqueue the candidate for download.
    async fn dispatch(&self, candidate: &Candidate) -> std::result::Result<(), DispatchError>;
}

/// Receives human-readable status updates.
///
/// Best-effort: implementations must not fail or block for long.
pub trait ProgressSink: Send + Sync {
    /// Replace the current status message.
    fn set_message(&self, message: &str);
}
