//! Caller-owned progress cell.

use crate::capabilities::ProgressSink;
use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
struct ProgressState {
    message: String,
    updated_at: Option<DateTime<Utc>>,
}

/// Progress notification for one running job.
///
/// Holds only the latest message; a UI polls [`ProgressNotification::current_message`]
/// while the job writes through [`ProgressSink`].
#[derive(Debug)]
pub struct ProgressNotification {
    title: String,
    state: RwLock<ProgressState>,
}

impl ProgressNotification {
    /// Create an empty notification with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: RwLock::new(ProgressState::default()),
        }
    }

    /// Title shown alongside the message.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Latest message, empty until the first update.
    #[must_use]
    pub fn current_message(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .message
            .clone()
    }

    /// When the message was last replaced.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .updated_at
    }
}

impl ProgressSink for ProgressNotification {
    fn set_message(&self, message: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.message = message.to_string();
        state.updated_at = Some(Utc::now());
    }
}
