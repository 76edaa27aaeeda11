use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for the job recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the auto-match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoMatchResponse {
    pub matches: Vec<MatchResult>,
    /// Ids the auto-assignment workflow persists, best first
    #[serde(rename = "subjectIds")]
    pub subject_ids: Vec<String>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
