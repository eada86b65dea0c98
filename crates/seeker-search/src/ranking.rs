//! Candidate ranking.

use crate::candidate::Candidate;
use std::cmp::Ordering;

/// Order two candidates best-first: higher quality, then proper over non-proper.
///
/// No other field participates, so candidates from different sources compare
/// on equal terms.
#[must_use]
pub fn compare_rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.quality()
        .cmp(&a.quality())
        .then_with(|| b.is_proper().cmp(&a.is_proper()))
}

/// Sort candidates best-first.
///
/// The sort is stable: candidates that compare equal keep their aggregation
/// order (source order, then each source's own result order).
#[must_use]
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(compare_rank);
    candidates
}
