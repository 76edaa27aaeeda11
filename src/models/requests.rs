use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{CandidateProfile, JobPosting, Scorable};

/// Request to recommend jobs to a worker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(custom(function = "validate_profile"))]
    pub profile: CandidateProfile,
    #[serde(default)]
    #[validate(custom(function = "validate_jobs"))]
    pub jobs: Vec<JobPosting>,
    #[serde(alias = "min_score", rename = "minScore", default)]
    #[validate(range(max = 100))]
    pub min_score: Option<u32>,
    #[serde(alias = "collection_version", rename = "collectionVersion", default)]
    pub collection_version: Option<String>,
}

/// Request to auto-match workers to a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AutoMatchRequest {
    #[validate(custom(function = "validate_job"))]
    pub job: JobPosting,
    #[serde(default)]
    #[validate(custom(function = "validate_profiles"))]
    pub candidates: Vec<CandidateProfile>,
    #[serde(alias = "collection_version", rename = "collectionVersion", default)]
    pub collection_version: Option<String>,
}

fn validate_profile(profile: &CandidateProfile) -> Result<(), ValidationError> {
    check_id(profile)
}

fn validate_profiles(profiles: &[CandidateProfile]) -> Result<(), ValidationError> {
    profiles.iter().try_for_each(check_id)
}

fn validate_job(job: &JobPosting) -> Result<(), ValidationError> {
    check_id(job)
}

fn validate_jobs(jobs: &[JobPosting]) -> Result<(), ValidationError> {
    jobs.iter().try_for_each(check_id)
}

fn check_id(entity: &impl Scorable) -> Result<(), ValidationError> {
    if entity.id().trim().is_empty() {
        return Err(ValidationError::new("empty_id"));
    }
    Ok(())
}
