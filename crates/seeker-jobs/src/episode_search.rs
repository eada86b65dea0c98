//! On-demand search for a single episode.

use crate::error::Result;
use crate::job::Job;
use async_trait::async_trait;
use seeker_core::TargetId;
use seeker_search::{
    DownloadDispatcher, InventoryPolicy, ProgressSink, SearchOrchestrator, SearchReport,
    SourceRegistry, TargetResolver,
};
use std::sync::Arc;
use tracing::info;

/// Job name shown in job listings.
pub const EPISODE_SEARCH_JOB_NAME: &str = "Episode Search";

/// Resolves an episode and runs one search-and-acquire cycle for it.
///
/// All ranking, fetching and dispatch logic lives in [`SearchOrchestrator`];
/// this type only wires the collaborators together behind [`Job`].
pub struct EpisodeSearchJob {
    resolver: Arc<dyn TargetResolver>,
    sources: Arc<dyn SourceRegistry>,
    policy: Arc<dyn InventoryPolicy>,
    dispatcher: Arc<dyn DownloadDispatcher>,
    orchestrator: SearchOrchestrator,
}

impl EpisodeSearchJob {
    /// Create the job with a sequential orchestrator.
    #[must_use]
    pub fn new(
        resolver: Arc<dyn TargetResolver>,
        sources: Arc<dyn SourceRegistry>,
        policy: Arc<dyn InventoryPolicy>,
        dispatcher: Arc<dyn DownloadDispatcher>,
    ) -> Self {
        Self {
            resolver,
            sources,
            policy,
            dispatcher,
            orchestrator: SearchOrchestrator::new(),
        }
    }

    /// Replace the orchestrator, e.g. one built with
    /// [`SearchOrchestrator::from_config`].
    #[must_use]
    pub fn with_orchestrator(mut self, orchestrator: SearchOrchestrator) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    /// Run a search and return the full report.
    ///
    /// # Errors
    /// Returns [`seeker_search::SearchError::TargetNotFound`] if the episode
    /// does not resolve, or a dispatch error from the run.
    pub async fn search(
        &self,
        progress: &dyn ProgressSink,
        target_id: TargetId,
    ) -> Result<SearchReport> {
        let target = self.resolver.resolve(target_id).await?;
        let sources = self.sources.enabled_sources();

        info!(target = %target, sources = sources.len(), "starting episode search");

        let report = self
            .orchestrator
            .run(
                &target,
                progress,
                &sources,
                self.policy.as_ref(),
                self.dispatcher.as_ref(),
            )
            .await?;

        Ok(report)
    }
}

#[async_trait]
impl Job for EpisodeSearchJob {
    fn name(&self) -> &'static str {
        EPISODE_SEARCH_JOB_NAME
    }

    fn default_interval_secs(&self) -> u64 {
        0
    }

    async fn start(&self, progress: &dyn ProgressSink, target_id: TargetId) -> Result<()> {
        self.search(progress, target_id).await.map(|_| ())
    }
}
