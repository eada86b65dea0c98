//! Seeker Search - Source fan-out, ranking and single-dispatch selection.
//!
//! This crate runs one search-and-acquire cycle for a target item: it queries
//! every enabled source, aggregates the candidates they return, ranks them by
//! quality, and hands the first candidate the inventory policy still wants to
//! the download dispatcher.
//!
//! # Features
//!
//! - Per-source failure isolation during fetch
//! - Optional bounded concurrent fetching that keeps source order for ranking
//! - Deterministic, stable quality/proper ranking
//! - At most one dispatch per run, with per-candidate evaluation failure isolation
//!
//! # Example
//!
//! ```rust,ignore
//! use seeker_search::{ProgressNotification, SearchOrchestrator};
//!
//! let orchestrator = SearchOrchestrator::new().with_max_concurrent_fetches(3);
//! let progress = ProgressNotification::new("Episode Search");
//!
//! let report = orchestrator
//!     .run(&target, &progress, &registry.enabled_sources(), policy.as_ref(), dispatcher.as_ref())
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod candidate;
pub mod capabilities;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod progress;
pub mod ranking;
pub mod registry;

// Re-export commonly used types
pub use candidate::Candidate;
pub use capabilities::{
    DownloadDispatcher, InventoryPolicy, ProgressSink, Source, SourceRegistry, TargetResolver,
};
pub use error::{DispatchError, EvaluationError, FetchError, Result, SearchError};
pub use orchestrator::{FetchSummary, RunState, SearchOrchestrator, SearchOutcome, SearchReport};
pub use parser::{parse_release, ParsedRelease};
pub use progress::ProgressNotification;
pub use ranking::{compare_rank, rank};
pub use registry::InMemorySourceRegistry;
