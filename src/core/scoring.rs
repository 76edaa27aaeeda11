use crate::core::{
    experience::experience_overlaps,
    normalize::{classify, labels_equal, LabelMatch},
};
use crate::models::{MatchResult, Scorable, ScoringWeights};

/// Ceiling for any relevance score
pub const MAX_SCORE: u32 = 100;

/// Contribution of a single dimension to the final score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldScore {
    pub points: u32,
    pub reason: Option<String>,
}

impl FieldScore {
    fn zero() -> Self {
        Self {
            points: 0,
            reason: None,
        }
    }

    /// A reason is only kept when the dimension actually earned points
    fn earned(points: u32, reason: impl FnOnce() -> String) -> Self {
        if points == 0 {
            Self::zero()
        } else {
            Self {
                points,
                reason: Some(reason()),
            }
        }
    }
}

/// Calculate the relevance score (0-100) of `candidate` for `query`
///
/// Scoring formula:
/// score = min(100,
///     position        # 40 exact / 25 partial
///   + experience      # 25 exact / 15 range overlap
///   + cuisine         # 20 exact / 10 partial
///   + locality        # 10 same city
///   + bonus           # +5 when the sum above reaches 70
/// )
pub fn score_pair<Q, C>(query: &Q, candidate: &C, weights: &ScoringWeights) -> MatchResult
where
    Q: Scorable + ?Sized,
    C: Scorable + ?Sized,
{
    let fields = [
        score_position(query, candidate, weights),
        score_experience(query, candidate, weights),
        score_cuisine(query, candidate, weights),
        score_locality(query, candidate, weights),
    ];

    // Weights are configurable, so the sum must not wrap before the clamp
    let subtotal = fields.iter().fold(0u32, |acc, f| acc.saturating_add(f.points));
    let mut reasons: Vec<String> = fields.into_iter().filter_map(|f| f.reason).collect();

    let mut total = subtotal;
    if subtotal > 0 && subtotal >= weights.completeness_bonus_threshold {
        let bonus = FieldScore::earned(weights.completeness_bonus, || {
            "Excellent overall match".to_string()
        });
        total = total.saturating_add(bonus.points);
        reasons.extend(bonus.reason);
    }

    MatchResult::new(candidate.id().to_string(), total.min(MAX_SCORE), reasons)
}

/// Exact or word-level partial match of the position label
pub fn score_position<Q, C>(query: &Q, candidate: &C, weights: &ScoringWeights) -> FieldScore
where
    Q: Scorable + ?Sized,
    C: Scorable + ?Sized,
{
    let (q, c) = (query.position(), candidate.position());
    match classify(q, c) {
        LabelMatch::Exact => FieldScore::earned(weights.position_weight_exact, || {
            format!("Position match: {}", label(c))
        }),
        LabelMatch::Partial => FieldScore::earned(weights.position_weight_partial, || {
            format!("Related position: {} / {}", label(q), label(c))
        }),
        LabelMatch::None => FieldScore::zero(),
    }
}

/// Exact band label first, then numeric range overlap
pub fn score_experience<Q, C>(query: &Q, candidate: &C, weights: &ScoringWeights) -> FieldScore
where
    Q: Scorable + ?Sized,
    C: Scorable + ?Sized,
{
    let (q, c) = (query.experience(), candidate.experience());
    if labels_equal(q, c) {
        FieldScore::earned(weights.experience_weight_exact, || {
            format!("Experience match: {}", label(c))
        })
    } else if experience_overlaps(q, c) {
        FieldScore::earned(weights.experience_weight_partial, || {
            format!("Experience range overlaps: {} / {}", label(q), label(c))
        })
    } else {
        FieldScore::zero()
    }
}

/// Exact or word-level partial match of the cuisine label
pub fn score_cuisine<Q, C>(query: &Q, candidate: &C, weights: &ScoringWeights) -> FieldScore
where
    Q: Scorable + ?Sized,
    C: Scorable + ?Sized,
{
    let (q, c) = (query.cuisine(), candidate.cuisine());
    match classify(q, c) {
        LabelMatch::Exact => FieldScore::earned(weights.cuisine_weight_exact, || {
            format!("Cuisine match: {}", label(c))
        }),
        LabelMatch::Partial => FieldScore::earned(weights.cuisine_weight_partial, || {
            format!("Related cuisine: {} / {}", label(q), label(c))
        }),
        LabelMatch::None => FieldScore::zero(),
    }
}

/// City has no partial tier
pub fn score_locality<Q, C>(query: &Q, candidate: &C, weights: &ScoringWeights) -> FieldScore
where
    Q: Scorable + ?Sized,
    C: Scorable + ?Sized,
{
    let c = candidate.city();
    if labels_equal(query.city(), c) {
        FieldScore::earned(weights.locality_weight, || format!("Same city: {}", label(c)))
    } else {
        FieldScore::zero()
    }
}

#[inline]
fn label(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateProfile, JobPosting};

    fn create_test_job(position: &str, experience: &str, cuisine: &str, city: &str) -> JobPosting {
        JobPosting {
            id: "job_1".to_string(),
            position: Some(position.to_string()),
            experience: Some(experience.to_string()),
            cuisine: Some(cuisine.to_string()),
            city: Some(city.to_string()),
            ..Default::default()
        }
    }

    fn create_test_candidate(position: &str, experience: &str, cuisine: &str, city: &str) -> CandidateProfile {
        CandidateProfile {
            id: "cand_1".to_string(),
            position: Some(position.to_string()),
            experience: Some(experience.to_string()),
            cuisine: Some(cuisine.to_string()),
            city: Some(city.to_string()),
            about: None,
        }
    }

    #[test]
    fn test_full_match_scores_100() {
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "3 to 5 years", "European", "Astana");

        let result = score_pair(&job, &candidate, &ScoringWeights::default());

        assert_eq!(result.score(), 100);
        assert_eq!(result.reasons().len(), 5);
        assert_eq!(result.subject_id(), "cand_1");
    }

    #[test]
    fn test_reason_order() {
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "3 to 5 years", "European", "Astana");

        let result = score_pair(&job, &candidate, &ScoringWeights::default());

        assert!(result.reasons()[0].starts_with("Position"));
        assert!(result.reasons()[1].starts_with("Experience"));
        assert!(result.reasons()[2].starts_with("Cuisine"));
        assert!(result.reasons()[3].starts_with("Same city"));
        assert_eq!(result.reasons()[4], "Excellent overall match");
    }

    #[test]
    fn test_no_match_scores_zero() {
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Waiter", "no experience", "Asian", "Almaty");

        let result = score_pair(&job, &candidate, &ScoringWeights::default());

        assert_eq!(result.score(), 0);
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn test_partial_position() {
        let job = create_test_job("Chef", "", "", "");
        let candidate = create_test_candidate("Head Chef", "", "", "");

        let field = score_position(&job, &candidate, &ScoringWeights::default());

        assert_eq!(field.points, 25);
        assert_eq!(field.reason.as_deref(), Some("Related position: Chef / Head Chef"));
    }

    #[test]
    fn test_experience_overlap_scores_partial() {
        let job = create_test_job("", "from 3 to 5 years", "", "");
        let candidate = create_test_candidate("", "from 4 to 6 years", "", "");

        let field = score_experience(&job, &candidate, &ScoringWeights::default());

        assert_eq!(field.points, 15);
    }

    #[test]
    fn test_partial_cuisine() {
        let job = create_test_job("", "", "Italian", "");
        let candidate = create_test_candidate("", "", "Italian and French", "");

        let field = score_cuisine(&job, &candidate, &ScoringWeights::default());

        assert_eq!(field.points, 10);
    }

    #[test]
    fn test_city_has_no_partial_tier() {
        let job = create_test_job("", "", "", "Astana");
        let candidate = create_test_candidate("", "", "", "Astana region");

        let field = score_locality(&job, &candidate, &ScoringWeights::default());

        assert_eq!(field, FieldScore::zero());
    }

    #[test]
    fn test_bonus_threshold() {
        let weights = ScoringWeights::default();

        // 40 + 15 + 20 = 75 -> bonus
        let job = create_test_job("Chef", "1 to 3 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "2 to 4 years", "European", "Almaty");
        let result = score_pair(&job, &candidate, &weights);
        assert_eq!(result.score(), 80);

        // 25 + 20 + 10 = 55 -> no bonus
        let candidate = create_test_candidate("Sous-chef", "1 to 3 years", "European", "Astana");
        let result = score_pair(&job, &candidate, &weights);
        assert_eq!(result.score(), 55);
        assert_eq!(result.reasons().len(), 3);
    }

    #[test]
    fn test_clamped_to_ceiling() {
        let weights = ScoringWeights {
            position_weight_exact: 90,
            completeness_bonus: 50,
            ..Default::default()
        };
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "3 to 5 years", "European", "Astana");

        let result = score_pair(&job, &candidate, &weights);

        assert_eq!(result.score(), MAX_SCORE);
    }

    #[test]
    fn test_huge_weights_saturate_to_ceiling() {
        let weights = ScoringWeights {
            position_weight_exact: u32::MAX,
            locality_weight: u32::MAX,
            completeness_bonus: u32::MAX,
            ..Default::default()
        };
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "3 to 5 years", "European", "Astana");

        let result = score_pair(&job, &candidate, &weights);

        assert_eq!(result.score(), MAX_SCORE);
        assert_eq!(result.reasons().len(), 5);
    }

    #[test]
    fn test_zero_weights_leave_no_reasons() {
        let weights = ScoringWeights {
            position_weight_exact: 0,
            experience_weight_exact: 0,
            cuisine_weight_exact: 0,
            locality_weight: 0,
            completeness_bonus_threshold: 0,
            ..Default::default()
        };
        let job = create_test_job("Chef", "3 to 5 years", "European", "Astana");
        let candidate = create_test_candidate("Chef", "3 to 5 years", "European", "Astana");

        let result = score_pair(&job, &candidate, &weights);

        assert_eq!(result.score(), 0);
        assert!(result.reasons().is_empty());
    }
}
