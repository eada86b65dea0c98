//! Job trait and descriptor.

use crate::error::Result;
use async_trait::async_trait;
use seeker_core::TargetId;
use seeker_search::ProgressSink;
use serde::{Deserialize, Serialize};

/// A unit of work a host can start by name.
#[async_trait]
pub trait Job: Send + Sync {
    /// Constant display name, unique among registered jobs.
    fn name(&self) -> &'static str;

    /// Recurrence interval in seconds; 0 means the job only runs on demand.
    fn default_interval_secs(&self) -> u64;

    /// True when the job never schedules itself.
    fn is_on_demand(&self) -> bool {
        self.default_interval_secs() == 0
    }

    /// Run the job once for `target_id`, reporting through `progress`.
    async fn start(&self, progress: &dyn ProgressSink, target_id: TargetId) -> Result<()>;
}

/// Serializable description of a job for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    /// Job display name
    pub name: String,
    /// Recurrence interval in seconds (0 for on demand)
    pub default_interval_secs: u64,
}

impl JobInfo {
    /// Describe `job`.
    #[must_use]
    pub fn of(job: &dyn Job) -> Self {
        Self {
            name: job.name().to_string(),
            default_interval_secs: job.default_interval_secs(),
        }
    }

    /// True when the described job only runs on demand.
    #[must_use]
    pub fn is_on_demand(&self) -> bool {
        self.default_interval_secs == 0
    }
}
