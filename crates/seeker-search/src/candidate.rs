//! Rankable search results returned by sources.

use crate::parser::parse_release;
use seeker_core::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed search result.
///
/// Candidates are immutable once built. Only [`Candidate::quality`] and
/// [`Candidate::is_proper`] take part in ranking; the remaining fields are
/// payload for the dispatcher and text for log lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    title: String,
    source: String,
    download_url: String,
    quality: Quality,
    proper: bool,
}

impl Candidate {
    /// Create a candidate with an explicit quality and proper flag.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        download_url: impl Into<String>,
        quality: Quality,
        proper: bool,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            download_url: download_url.into(),
            quality,
            proper,
        }
    }

    /// Create a candidate whose quality and proper flag are parsed from the
    /// release title.
    #[must_use]
    pub fn from_release(
        title: impl Into<String>,
        source: impl Into<String>,
        download_url: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let parsed = parse_release(&title);
        Self::new(title, source, download_url, parsed.quality, parsed.proper)
    }

    /// Release title as published by the source.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Name of the source that produced this candidate.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Location the dispatcher retrieves the release from.
    #[must_use]
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// Release quality.
    #[must_use]
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Whether this is a proper/repack re-release.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.proper
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_release_parses_title() {
        let candidate = Candidate::from_release(
            "Show.S02E03.PROPER.720p.BluRay.x264",
            "nzbmatrix",
            "https://nzbmatrix.example/nzb/42",
        );

        assert_eq!(candidate.quality(), Quality::Bluray720p);
        assert!(candidate.is_proper());
        assert_eq!(candidate.source(), "nzbmatrix");
        assert_eq!(candidate.download_url(), "https://nzbmatrix.example/nzb/42");
    }

    #[test]
    fn test_display() {
        let candidate = Candidate::new("Show.S01E01.HDTV", "newzbin", "", Quality::Sdtv, false);
        assert_eq!(candidate.to_string(), "Show.S01E01.HDTV (newzbin)");
    }
}
