use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    AutoMatchRequest, AutoMatchResponse, ErrorResponse, HealthResponse, JobPosting, MatchResult,
    RecommendRequest, RecommendResponse,
};
use crate::services::{CacheKey, ResultCache};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub cache: Option<Arc<ResultCache>>,
}

impl AppState {
    async fn cached(&self, key: Option<&str>) -> Option<Vec<MatchResult>> {
        let (cache, key) = (self.cache.as_ref()?, key?);
        cache.get(key).await.ok()
    }

    async fn remember(&self, key: Option<&str>, results: &[MatchResult]) {
        let (Some(cache), Some(key)) = (self.cache.as_ref(), key) else {
            return;
        };
        if let Err(e) = cache.set(key, &results).await {
            tracing::warn!("Failed to cache results for {}: {}", key, e);
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/recommend", web::post().to(recommend_jobs))
        .route("/matches/auto", web::post().to(auto_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Recommend jobs to a worker
///
/// POST /api/v1/matches/recommend
///
/// Request body:
/// ```json
/// {
///   "profile": { "id": "string", "position": "Chef", ... },
///   "jobs": [{ "id": "string", "status": "approved", ... }],
///   "minScore": 30,
///   "collectionVersion": "string"
/// }
/// ```
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let min_score = req.min_score.unwrap_or(state.matcher.min_score());
    let cache_key = req
        .collection_version
        .as_deref()
        .map(|version| CacheKey::recommendations(&req.profile.id, version, min_score));

    // Only approved postings are listed to workers
    let visible: Vec<JobPosting> = req
        .jobs
        .into_iter()
        .filter(|job| job.status.is_visible())
        .collect();
    let total_candidates = visible.len();

    let matches = match state.cached(cache_key.as_deref()).await {
        Some(matches) => matches,
        None => {
            let matches = state.matcher.recommend_jobs(&req.profile, &visible, Some(min_score));
            state.remember(cache_key.as_deref(), &matches).await;
            matches
        }
    };

    tracing::info!(
        "Returning {} recommendations for profile {} (from {} visible jobs)",
        matches.len(),
        req.profile.id,
        total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        matches,
        total_candidates,
    })
}

/// Auto-match workers to a job posting
///
/// POST /api/v1/matches/auto
///
/// Request body:
/// ```json
/// {
///   "job": { "id": "string", "position": "Chef", ... },
///   "candidates": [{ "id": "string", ... }],
///   "collectionVersion": "string"
/// }
/// ```
async fn auto_match(
    state: web::Data<AppState>,
    req: web::Json<AutoMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for auto-match request: {:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let cache_key = req
        .collection_version
        .as_deref()
        .map(|version| CacheKey::auto_match(&req.job.id, version));

    let matches = match state.cached(cache_key.as_deref()).await {
        Some(matches) => matches,
        None => {
            let matches = state.matcher.auto_match_candidates(&req.job, &req.candidates);
            state.remember(cache_key.as_deref(), &matches).await;
            matches
        }
    };

    let subject_ids = matches.iter().map(|m| m.subject_id().to_string()).collect();

    tracing::info!(
        "Auto-matched {} candidates for job {} (from {})",
        matches.len(),
        req.job.id,
        req.candidates.len()
    );

    HttpResponse::Ok().json(AutoMatchResponse {
        matches,
        subject_ids,
        total_candidates: req.candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    fn app_state(cache: bool) -> AppState {
        AppState {
            matcher: Matcher::with_default_weights(),
            cache: cache.then(|| Arc::new(ResultCache::new(100, 60))),
        }
    }

    fn chef_profile(id: &str, city: &str) -> serde_json::Value {
        json!({
            "id": id,
            "position": "Chef",
            "experience": "from 3 to 5 years",
            "cuisine": "European",
            "city": city
        })
    }

    fn chef_job(id: &str, city: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "position": "Chef",
            "experience": "from 3 to 5 years",
            "cuisine": "European",
            "city": city,
            "requirements": ["Sanitary book"],
            "status": status
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_recommend_skips_unapproved_jobs() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(false)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/recommend")
            .set_json(json!({
                "profile": chef_profile("p1", "Astana"),
                "jobs": [
                    chef_job("j1", "Astana", "approved"),
                    chef_job("j2", "Astana", "pending"),
                    chef_job("j3", "Almaty", "approved"),
                ]
            }))
            .to_request();

        let resp: RecommendResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.matches.len(), 2);
        assert_eq!(resp.matches[0].subject_id(), "j1");
        assert_eq!(resp.matches[0].score(), 100);
        assert_eq!(resp.matches[1].subject_id(), "j3");
        assert_eq!(resp.matches[1].score(), 90);
    }

    #[actix_web::test]
    async fn test_auto_match_returns_subject_ids() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(true)))
                .configure(configure),
        )
        .await;

        let candidates: Vec<_> = (0..7)
            .map(|i| chef_profile(&format!("c{i}"), if i % 2 == 0 { "Astana" } else { "Almaty" }))
            .collect();

        let req = test::TestRequest::post()
            .uri("/matches/auto")
            .set_json(json!({
                "job": chef_job("j1", "Astana", "approved"),
                "candidates": candidates,
                "collectionVersion": "v1"
            }))
            .to_request();

        let resp: AutoMatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 7);
        assert_eq!(resp.subject_ids, vec!["c0", "c2", "c4", "c6", "c1"]);
    }

    #[actix_web::test]
    async fn test_cached_results_reused_for_same_version() {
        let state = app_state(true);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/matches/recommend")
            .set_json(json!({
                "profile": chef_profile("p1", "Astana"),
                "jobs": [chef_job("j1", "Astana", "approved")],
                "collectionVersion": "v1"
            }))
            .to_request();
        let resp: RecommendResponse = test::call_and_read_body_json(&app, first).await;
        assert_eq!(resp.matches.len(), 1);

        let key = CacheKey::recommendations("p1", "v1", 30);
        let cached: Vec<MatchResult> = state.cache.as_ref().unwrap().get(&key).await.unwrap();
        assert_eq!(cached, resp.matches);
    }

    #[actix_web::test]
    async fn test_empty_profile_id_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(false)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/recommend")
            .set_json(json!({ "profile": { "id": "" }, "jobs": [] }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
