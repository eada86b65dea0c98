//! Tracing subscriber setup for host binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to whoever embeds the crates.

use crate::config::LoggingConfig;
use crate::error::{Result, SeekerError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise the configured directive.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns error if a global subscriber has already been set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(config.with_target))
        .with(env_filter(config))
        .try_init()
        .map_err(|e| SeekerError::Internal(format!("failed to install tracing subscriber: {e}")))
}
