//! Seeker Jobs - Uniform task surface over search runs.
//!
//! A host (job queue, UI "search now" button, API handler) starts work
//! through the [`Job`] trait without knowing which job it is running.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod episode_search;
pub mod error;
pub mod job;

pub use episode_search::EpisodeSearchJob;
pub use error::{JobError, Result};
pub use job::{Job, JobInfo};
