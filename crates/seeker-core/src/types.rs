//! Shared types used across Seeker.
//!
//! This module defines common newtypes and enums that provide type safety
//! and clear domain modeling.

use crate::error::SeekerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Newtype for target item identifiers.
///
/// Target IDs are non-negative integer keys assigned by the library that
/// owns the items (for example an episode table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(i64);

impl TargetId {
    /// Create a new `TargetId`.
    ///
    /// # Errors
    /// Returns error if the value is negative.
    pub fn new(id: i64) -> Result<Self, SeekerError> {
        if id < 0 {
            return Err(SeekerError::Validation(format!(
                "invalid target ID: must be non-negative, got {id}"
            )));
        }
        Ok(Self(id))
    }

    /// Get the inner integer value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for TargetId {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<i64>().map_err(|_| {
            SeekerError::Validation(format!("invalid target ID: expected an integer, got '{s}'"))
        })?;
        Self::new(id)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved target item.
///
/// Search code only uses it for messages and to hand it to sources; it never
/// inspects the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetItem {
    /// Identity of the item
    pub id: TargetId,
    /// Display title, e.g. `"The Show - 1x05 - Pilot"`
    pub title: String,
}

impl TargetItem {
    /// Create a new target item.
    #[must_use]
    pub fn new(id: TargetId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl fmt::Display for TargetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Release quality, ordered from worst to best.
///
/// The derived `Ord` follows declaration order, so `Bluray1080p` is the
/// highest rank.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Quality could not be determined
    #[default]
    Unknown,
    /// Standard definition TV capture
    Sdtv,
    /// DVD rip
    Dvd,
    /// High definition TV capture
    Hdtv,
    /// Web download
    WebDl,
    /// 720p Blu-ray
    Bluray720p,
    /// 1080p Blu-ray
    Bluray1080p,
}

impl Quality {
    /// All qualities in ascending order.
    pub const ALL: [Quality; 7] = [
        Quality::Unknown,
        Quality::Sdtv,
        Quality::Dvd,
        Quality::Hdtv,
        Quality::WebDl,
        Quality::Bluray720p,
        Quality::Bluray1080p,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quality::Unknown => "Unknown",
            Quality::Sdtv => "SDTV",
            Quality::Dvd => "DVD",
            Quality::Hdtv => "HDTV",
            Quality::WebDl => "WEBDL",
            Quality::Bluray720p => "Bluray-720p",
            Quality::Bluray1080p => "Bluray-1080p",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
