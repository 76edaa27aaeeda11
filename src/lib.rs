//! Kitchen Match - relevance matching for hospitality staffing
//!
//! This library scores worker profiles against job postings (and the other way
//! round), ranks the results and trims them either by a minimum score
//! (recommendations) or by a fixed top slice (auto-match).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, score_pair, rank, filter_by_threshold, take_top};
pub use models::{CandidateProfile, JobPosting, MatchResult, PostingStatus, Scorable, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let job = JobPosting {
            id: "job".to_string(),
            city: Some("Astana".to_string()),
            ..Default::default()
        };
        let profile = CandidateProfile {
            id: "worker".to_string(),
            city: Some("Astana".to_string()),
            ..Default::default()
        };

        let result = score_pair(&profile, &job, &ScoringWeights::default());
        assert_eq!(result.score(), 10);
    }
}
