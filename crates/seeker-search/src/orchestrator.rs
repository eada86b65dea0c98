//! Search orchestrator for one search-and-acquire run.
//!
//! This module provides the `SearchOrchestrator` which fans out over the
//! enabled sources, ranks the aggregated candidates, and dispatches the first
//! one the inventory policy still needs.

use crate::candidate::Candidate;
use crate::capabilities::{DownloadDispatcher, InventoryPolicy, ProgressSink, Source};
use crate::error::{FetchError, Result};
use crate::ranking::rank;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use seeker_core::{SearchConfig, TargetItem};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

/// Default number of sources fetched at once.
const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

/// Lifecycle of a single run. States only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Not started
    Idle,
    /// Querying sources
    Fetching,
    /// Walking ranked candidates
    Evaluating,
    /// A candidate was handed to the dispatcher (terminal)
    Dispatched,
    /// No candidate was accepted (terminal)
    Exhausted,
}

impl RunState {
    /// Whether `next` is a legal successor of this state.
    #[must_use]
    pub fn can_advance_to(self, next: RunState) -> bool {
        matches!(
            (self, next),
            (RunState::Idle, RunState::Fetching)
                | (RunState::Fetching, RunState::Evaluating)
                | (RunState::Evaluating, RunState::Dispatched | RunState::Exhausted)
        )
    }

    /// Whether the run has finished.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Dispatched | RunState::Exhausted)
    }

    fn advance(self, next: RunState) -> RunState {
        debug_assert!(
            self.can_advance_to(next),
            "illegal run transition {self:?} -> {next:?}"
        );
        debug!(from = ?self, to = ?next, "run state");
        next
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "candidate", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// This candidate was dispatched
    Dispatched(Candidate),
    /// Every candidate was rejected, failed evaluation, or none were found
    Exhausted,
}

/// Candidates collected from all sources.
#[derive(Debug, Clone, Default)]
pub struct FetchSummary {
    /// Aggregated candidates in source order, then per-source order
    pub candidates: Vec<Candidate>,
    /// Names of sources whose fetch failed
    pub failed_sources: Vec<String>,
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Correlates the report with the run's log span
    pub run_id: Uuid,
    /// Target that was searched for
    pub target: TargetItem,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: DateTime<Utc>,
    /// Number of candidates aggregated from all sources
    pub total_candidates: usize,
    /// Sources whose fetch failed
    pub failed_sources: Vec<String>,
    /// Candidates the inventory policy failed to evaluate
    pub evaluation_failures: usize,
    /// How the run ended
    pub outcome: SearchOutcome,
}

impl SearchReport {
    /// The dispatched candidate, if any.
    #[must_use]
    pub fn dispatched(&self) -> Option<&Candidate> {
        match &self.outcome {
            SearchOutcome::Dispatched(candidate) => Some(candidate),
            SearchOutcome::Exhausted => None,
        }
    }

    /// Terminal state the run ended in.
    #[must_use]
    pub fn final_state(&self) -> RunState {
        match self.outcome {
            SearchOutcome::Dispatched(_) => RunState::Dispatched,
            SearchOutcome::Exhausted => RunState::Exhausted,
        }
    }
}

struct Selection {
    outcome: SearchOutcome,
    evaluation_failures: usize,
}

/// Runs search-and-acquire cycles.
///
/// Holds no per-run state, so one orchestrator can serve concurrent runs for
/// different targets.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    /// Maximum sources fetched at the same time
    max_concurrent_fetches: usize,
}

impl Default for SearchOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchOrchestrator {
    /// Create an orchestrator that fetches sources one at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Create an orchestrator from the search configuration.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new().with_max_concurrent_fetches(config.max_concurrent_fetches)
    }

    /// Set the maximum number of concurrent fetches (at least 1).
    #[must_use]
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    /// Maximum number of concurrent fetches.
    #[must_use]
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    /// Execute one search-and-acquire run for `target`.
    ///
    /// Fetch and evaluation failures are logged and skipped. Running out of
    /// candidates is a normal outcome ([`SearchOutcome::Exhausted`]).
    ///
    /// # Errors
    /// Returns [`crate::SearchError::Dispatch`] if the dispatcher fails for
    /// the accepted candidate. The run stops there; no other candidate is tried.
    pub async fn run(
        &self,
        target: &TargetItem,
        progress: &dyn ProgressSink,
        sources: &[Arc<dyn Source>],
        policy: &dyn InventoryPolicy,
        dispatcher: &dyn DownloadDispatcher,
    ) -> Result<SearchReport> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "search_run",
            %run_id,
            target = %target,
            target_id = %target.id
        );

        async move {
            let started_at = Utc::now();
            let state = RunState::Idle.advance(RunState::Fetching);

            let summary = self.fetch_all(target, progress, sources).await;
            let total_candidates = summary.candidates.len();

            progress.set_message("Processing search results");
            debug!(
                total = total_candidates,
                failed_sources = summary.failed_sources.len(),
                "Finished searching all sources"
            );

            let state = state.advance(RunState::Evaluating);
            let selection = self
                .select(target, progress, rank(summary.candidates), policy, dispatcher)
                .await?;

            let report = SearchReport {
                run_id,
                target: target.clone(),
                started_at,
                finished_at: Utc::now(),
                total_candidates,
                failed_sources: summary.failed_sources,
                evaluation_failures: selection.evaluation_failures,
                outcome: selection.outcome,
            };
            state.advance(report.final_state());

            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Query every source and aggregate the candidates.
    ///
    /// Sources are fetched up to `max_concurrent_fetches` at a time, but
    /// results are aggregated in the order the sources were given, never in
    /// completion order. A failing source contributes nothing.
    pub async fn fetch_all(
        &self,
        target: &TargetItem,
        progress: &dyn ProgressSink,
        sources: &[Arc<dyn Source>],
    ) -> FetchSummary {
        let fetches: Vec<_> = sources
            .iter()
            .map(|source| fetch_one(target, progress, source))
            .collect();

        // `buffered` yields in input order regardless of which fetch finishes first.
        let mut results = stream::iter(fetches).buffered(self.max_concurrent_fetches);
        let mut summary = FetchSummary::default();

        while let Some((source, result)) = results.next().await {
            match result {
                Ok(candidates) => {
                    debug!(
                        source = %source.name(),
                        count = candidates.len(),
                        "source returned candidates"
                    );
                    summary.candidates.extend(candidates);
                }
                Err(e) => {
                    error!(
                        source = %source.name(),
                        error = %e,
                        "An error has occurred while fetching items from {}",
                        source.name()
                    );
                    summary.failed_sources.push(source.name().to_string());
                }
            }
        }

        summary
    }

    /// Rank `candidates` and dispatch the first one the policy needs.
    ///
    /// # Errors
    /// Returns [`crate::SearchError::Dispatch`] if dispatch fails.
    pub async fn process_results(
        &self,
        target: &TargetItem,
        progress: &dyn ProgressSink,
        candidates: Vec<Candidate>,
        policy: &dyn InventoryPolicy,
        dispatcher: &dyn DownloadDispatcher,
    ) -> Result<SearchOutcome> {
        let selection = self
            .select(target, progress, rank(candidates), policy, dispatcher)
            .await?;
        Ok(selection.outcome)
    }

    /// Walk `ranked` best-first; at most one dispatch.
    async fn select(
        &self,
        target: &TargetItem,
        progress: &dyn ProgressSink,
        ranked: Vec<Candidate>,
        policy: &dyn InventoryPolicy,
        dispatcher: &dyn DownloadDispatcher,
    ) -> Result<Selection> {
        let mut evaluation_failures = 0;

        for candidate in ranked {
            match policy.is_needed(&candidate).await {
                Ok(true) => {
                    if let Err(e) = dispatcher.dispatch(&candidate).await {
                        error!(candidate = %candidate, error = %e, "Failed to add to download queue");
                        return Err(e.into());
                    }

                    progress.set_message(&format!(
                        "{target} {} Added to download queue",
                        candidate.quality()
                    ));
                    info!(
                        candidate = %candidate,
                        quality = %candidate.quality(),
                        proper = candidate.is_proper(),
                        "Added to download queue"
                    );

                    return Ok(Selection {
                        outcome: SearchOutcome::Dispatched(candidate),
                        evaluation_failures,
                    });
                }
                Ok(false) => {
                    debug!(candidate = %candidate, "candidate not needed");
                }
                Err(e) => {
                    evaluation_failures += 1;
                    error!(
                        candidate = %candidate,
                        error = %e,
                        "An error has occurred while processing search result {}",
                        candidate
                    );
                }
            }
        }

        warn!("Unable to find {} in any of the sources", target);
        progress.set_message(&format!("Unable to find {target} in any of the sources"));

        Ok(Selection {
            outcome: SearchOutcome::Exhausted,
            evaluation_failures,
        })
    }
}

/// Fetch from one source, announcing it on the progress sink first.
async fn fetch_one<'a>(
    target: &'a TargetItem,
    progress: &'a dyn ProgressSink,
    source: &'a Arc<dyn Source>,
) -> (&'a Arc<dyn Source>, std::result::Result<Vec<Candidate>, FetchError>) {
    progress.set_message(&format!("Searching for {target} in {}", source.name()));
    let result = source.fetch(target).await;
    (source, result)
}
