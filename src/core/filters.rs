use crate::models::MatchResult;

/// Minimum score for candidate -> jobs recommendations
pub const DEFAULT_MIN_SCORE: u32 = 30;

/// Slice size for the job -> candidates auto-match
pub const AUTO_MATCH_LIMIT: usize = 5;

/// Sort results by score (descending), ties by subject id (ascending)
///
/// The secondary key keeps the output independent of input order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.score()
            .cmp(&a.score())
            .then_with(|| a.subject_id().cmp(b.subject_id()))
    });
    results
}

/// Keep results scoring at least `min_score`, preserving order
#[inline]
pub fn filter_by_threshold(ranked: Vec<MatchResult>, min_score: u32) -> Vec<MatchResult> {
    ranked
        .into_iter()
        .filter(|result| result.score() >= min_score)
        .collect()
}

/// Keep the first `limit` results regardless of score
#[inline]
pub fn take_top(mut ranked: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
    ranked.truncate(limit);
    ranked
}
