//! Seeker Core - Foundation crate for the Seeker search-and-acquire service.
//!
//! This crate provides shared types, error handling, configuration management,
//! and tracing setup that the other Seeker crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`TargetId`, `TargetItem`, `Quality`)
//! - [`telemetry`] - `tracing-subscriber` initialisation for host binaries
//!
//! # Example
//!
//! ```rust
//! use seeker_core::{Quality, SeekerConfig, TargetId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SeekerConfig::default();
//! assert_eq!(config.search.max_concurrent_fetches, 1);
//!
//! let id: TargetId = "42".parse()?;
//! assert_eq!(id.value(), 42);
//! assert!(Quality::Bluray1080p > Quality::Hdtv);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{LoggingConfig, SearchConfig, SeekerConfig};
pub use error::{ConfigError, ConfigResult, Result, SeekerError};
pub use types::{Quality, TargetId, TargetItem};
