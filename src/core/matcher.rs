use crate::core::{
    filters::{filter_by_threshold, rank, take_top, AUTO_MATCH_LIMIT, DEFAULT_MIN_SCORE},
    scoring::score_pair,
};
use crate::models::{CandidateProfile, JobPosting, MatchResult, Scorable, ScoringWeights};

/// Matching orchestrator shared by both directions
///
/// # Pipeline Stages
/// 1. Per-dimension scoring of every candidate
/// 2. Aggregation into one `MatchResult` per candidate
/// 3. Ranking by score
/// 4. Tail trimming: minimum score for recommendations, top-N for auto-match
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: u32,
    auto_match_limit: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            min_score: DEFAULT_MIN_SCORE,
            auto_match_limit: AUTO_MATCH_LIMIT,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_auto_match_limit(mut self, limit: usize) -> Self {
        self.auto_match_limit = limit;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    pub fn auto_match_limit(&self) -> usize {
        self.auto_match_limit
    }

    /// Score every candidate against `query`, in input order
    pub fn score_all<Q, C>(&self, query: &Q, candidates: &[C]) -> Vec<MatchResult>
    where
        Q: Scorable + ?Sized,
        C: Scorable,
    {
        candidates
            .iter()
            .map(|candidate| score_pair(query, candidate, &self.weights))
            .collect()
    }

    /// Recommend jobs to a worker
    ///
    /// # Arguments
    /// * `profile` - The worker's profile (query side)
    /// * `jobs` - Postings already filtered to what the worker may see
    /// * `min_score` - Score floor; `None` uses the configured default
    ///
    /// # Returns
    /// Ranked results with `score >= min_score`
    pub fn recommend_jobs(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobPosting],
        min_score: Option<u32>,
    ) -> Vec<MatchResult> {
        let min_score = min_score.unwrap_or(self.min_score);
        let ranked = rank(self.score_all(profile, jobs));
        let recommended = filter_by_threshold(ranked, min_score);

        tracing::debug!(
            "Recommended {} of {} jobs for profile {} (min score {})",
            recommended.len(),
            jobs.len(),
            profile.id,
            min_score
        );

        recommended
    }

    /// Pick the best-fitting workers for a job posting
    ///
    /// Takes a fixed top slice after ranking, with no score floor.
    pub fn auto_match_candidates(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let ranked = rank(self.score_all(job, candidates));
        let matched = take_top(ranked, self.auto_match_limit);

        tracing::debug!(
            "Auto-matched {} of {} candidates for job {}",
            matched.len(),
            candidates.len(),
            job.id
        );

        matched
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
