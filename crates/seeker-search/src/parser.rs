//! Release title parsing.
//!
//! Sources return raw release names; this derives the two ranking inputs
//! (quality and proper flag) from them.

use regex::Regex;
use seeker_core::Quality;
use std::sync::OnceLock;

/// Ranking attributes extracted from a release title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRelease {
    /// Detected quality tier, `Unknown` if no rule matched
    pub quality: Quality,
    /// Whether the release is tagged PROPER or REPACK
    pub proper: bool,
}

/// Quality rules in priority order; the first match wins.
///
/// Tokens are bounded by separators rather than `\b`, since `_` counts as a
/// word character and underscore-separated names are common.
fn quality_rules() -> &'static [(Regex, Quality)] {
    static RULES: OnceLock<Vec<(Regex, Quality)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"(?i)blu-?ray.*1080p|1080p.*blu-?ray", Quality::Bluray1080p),
            (r"(?i)blu-?ray", Quality::Bluray720p),
            (r"(?i)(?:^|[^a-zA-Z0-9])web[._\-]?dl(?:$|[^a-zA-Z0-9])", Quality::WebDl),
            (r"(?i)(720p|1080p).*hdtv|hdtv.*(720p|1080p)", Quality::Hdtv),
            (
                r"(?i)(?:^|[^a-zA-Z0-9])(dvdrip|dvd|bdrip)(?:$|[^a-zA-Z0-9])",
                Quality::Dvd,
            ),
            (
                r"(?i)(?:^|[^a-zA-Z0-9])(hdtv|pdtv|sdtv|xvid|divx)(?:$|[^a-zA-Z0-9])",
                Quality::Sdtv,
            ),
        ]
        .into_iter()
        .map(|(pattern, quality)| (Regex::new(pattern).expect("valid regex"), quality))
        .collect()
    })
}

fn proper_regex() -> &'static Regex {
    static PROPER: OnceLock<Regex> = OnceLock::new();
    PROPER.get_or_init(|| {
        Regex::new(r"(?i)(?:^|[^a-zA-Z0-9])(proper|repack)(?:$|[^a-zA-Z0-9])")
            .expect("valid regex")
    })
}

/// Parse the quality and proper flag out of a release title.
#[must_use]
pub fn parse_release(title: &str) -> ParsedRelease {
    let quality = quality_rules()
        .iter()
        .find(|(regex, _)| regex.is_match(title))
        .map_or(Quality::Unknown, |(_, quality)| *quality);

    ParsedRelease {
        quality,
        proper: proper_regex().is_match(title),
    }
}
