use serde::{Deserialize, Serialize};

/// Anything the scorer can compare: one side of a (query, candidate) pair.
///
/// Both job postings and worker profiles expose the same four matchable
/// labels, so a single scorer works in either direction.
pub trait Scorable {
    fn id(&self) -> &str;
    fn position(&self) -> Option<&str>;
    fn experience(&self) -> Option<&str>;
    fn cuisine(&self) -> Option<&str>;
    fn city(&self) -> Option<&str>;
}

/// Moderation lifecycle of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingStatus {
    #[default]
    Pending,
    Moderating,
    Approved,
    Rejected,
    Closed,
}

impl PostingStatus {
    /// Whether the moderation workflow may move a posting from `self` to `next`
    pub fn can_transition_to(self, next: PostingStatus) -> bool {
        use PostingStatus::*;
        matches!(
            (self, next),
            (Pending, Moderating)
                | (Moderating, Approved)
                | (Moderating, Rejected)
                | (Approved, Closed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PostingStatus::Rejected | PostingStatus::Closed)
    }

    /// Only approved postings are listed to workers
    pub fn is_visible(self) -> bool {
        self == PostingStatus::Approved
    }
}

/// Job posting published by an employer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub status: PostingStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Scorable for JobPosting {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    fn experience(&self) -> Option<&str> {
        self.experience.as_deref()
    }

    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

/// Worker profile filled in by a job seeker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

impl Scorable for CandidateProfile {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    fn experience(&self) -> Option<&str> {
        self.experience.as_deref()
    }

    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

/// Score of one candidate against a query entity
///
/// Built only by the aggregator; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "subjectId")]
    subject_id: String,
    score: u32,
    reasons: Vec<String>,
}

impl MatchResult {
    pub(crate) fn new(subject_id: String, score: u32, reasons: Vec<String>) -> Self {
        Self {
            subject_id,
            score,
            reasons,
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

/// Point table used by the field scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub position_weight_exact: u32,
    pub position_weight_partial: u32,
    pub experience_weight_exact: u32,
    pub experience_weight_partial: u32,
    pub cuisine_weight_exact: u32,
    pub cuisine_weight_partial: u32,
    pub locality_weight: u32,
    pub completeness_bonus: u32,
    pub completeness_bonus_threshold: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            position_weight_exact: 40,
            position_weight_partial: 25,
            experience_weight_exact: 25,
            experience_weight_partial: 15,
            cuisine_weight_exact: 20,
            cuisine_weight_partial: 10,
            locality_weight: 10,
            completeness_bonus: 5,
            completeness_bonus_threshold: 70,
        }
    }
}
