// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, JobPosting, MatchResult, PostingStatus, Scorable, ScoringWeights};
pub use requests::{AutoMatchRequest, RecommendRequest};
pub use responses::{AutoMatchResponse, ErrorResponse, HealthResponse, RecommendResponse};
