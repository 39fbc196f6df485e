use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::RankingSettings;
use crate::core::{CatalogStore, Matcher};
use crate::error::MatchError;
use crate::models::{
    CatalogResponse, DupesQuery, DupesResponse, ExplainResponse, FragranceDetailsResponse,
    HealthResponse, QuizRequest, RecommendationQuery, RecommendationResponse, RootResponse,
};
use crate::routes::error_response;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
    pub ranking: RankingSettings,
}

/// Configure all fragrance-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/intake", web::post().to(submit_quiz))
        .route("/recommendations", web::get().to(get_recommendations))
        .route("/fragrances", web::get().to(list_fragrances))
        .route("/fragrance/{id}", web::get().to(get_fragrance_details))
        .route("/fragrance/{id}/explain", web::get().to(explain_fragrance))
        .route("/dupes/{id}", web::get().to(get_dupes));
}

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Fragrance Recommender API".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.snapshot().len(),
    })
}

/// Submit quiz answers and get recommendations
///
/// POST /api/v1/intake
///
/// Request body:
/// ```json
/// {
///   "context": "casual",
///   "season": "summer",
///   "projection": "low",
///   "longevity": "4-6h",
///   "style": ["fresh"],
///   "budget": 100,
///   "allergies": []
/// }
/// ```
async fn submit_quiz(
    state: web::Data<AppState>,
    req: web::Json<QuizRequest>,
) -> impl Responder {
    let preference = match req.into_inner().into_preference() {
        Ok(preference) => preference,
        Err(e) => {
            tracing::warn!("Rejected quiz submission: {}", e);
            return error_response(&e);
        }
    };

    let catalog = state.catalog.snapshot();
    let result = match state.matcher.recommend(&preference, &catalog) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Scoring failed for quiz submission: {}", e);
            return error_response(&e);
        }
    };

    let response = RecommendationResponse {
        real_deal: result.real_deal_fragrances(),
        budget_alternatives: result.budget_alternative_fragrances(),
        query_id: preference.query_id(),
    };

    tracing::info!(
        "Returning {} real deals and {} budget alternatives (query {:?})",
        response.real_deal.len(),
        response.budget_alternatives.len(),
        response.query_id
    );

    HttpResponse::Ok().json(response)
}

/// Recommendations from query parameters
///
/// GET /api/v1/recommendations?context=casual&season=summer&projection=low
///     &longevity=4-6h&style=fresh,citrus&budget=100&allergies=&n=3
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let preference = match query.to_preference() {
        Ok(preference) => preference,
        Err(e) => {
            tracing::warn!("Rejected recommendation query: {}", e);
            return error_response(&e);
        }
    };

    let limit = state.ranking.clamp_limit(query.n);
    let catalog = state.catalog.snapshot();

    match state.matcher.recommend_top(&preference, &catalog, limit) {
        Ok(result) => {
            tracing::debug!(
                "Query recommendations: {} real deals, {} budget alternatives (limit {})",
                result.real_deal.len(),
                result.budget_alternatives.len(),
                limit
            );
            HttpResponse::Ok().json(RecommendationResponse {
                real_deal: result.real_deal_fragrances(),
                budget_alternatives: result.budget_alternative_fragrances(),
                query_id: None,
            })
        }
        Err(e) => {
            tracing::error!("Scoring failed for recommendation query: {}", e);
            error_response(&e)
        }
    }
}

/// Every fragrance in the current catalog snapshot
async fn list_fragrances(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.catalog.snapshot();

    HttpResponse::Ok().json(CatalogResponse {
        fragrances: catalog.as_slice().to_vec(),
        total: catalog.len(),
    })
}

/// Fragrance details with style-similar fragrances
///
/// GET /api/v1/fragrance/{id}
async fn get_fragrance_details(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();
    let catalog = state.catalog.snapshot();

    match state.matcher.similar_by_style(&catalog, id) {
        Ok(result) => HttpResponse::Ok().json(FragranceDetailsResponse {
            fragrance: result.target,
            similar_fragrances: result.similar,
        }),
        Err(e) => {
            tracing::info!("Details lookup failed for {}: {}", id, e);
            error_response(&e)
        }
    }
}

/// Per-rule score breakdown of one fragrance for the given quiz answers
///
/// GET /api/v1/fragrance/{id}/explain?<same parameters as /recommendations>
async fn explain_fragrance(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let preference = match query.to_preference() {
        Ok(preference) => preference,
        Err(e) => {
            tracing::warn!("Rejected explain query for {}: {}", id, e);
            return error_response(&e);
        }
    };

    let catalog = state.catalog.snapshot();
    let Some(fragrance) = catalog.get(id) else {
        return error_response(&MatchError::NotFound { id });
    };

    match state.matcher.explain(&preference, fragrance) {
        Ok((score, terms)) => HttpResponse::Ok().json(ExplainResponse {
            fragrance_id: id,
            score,
            terms,
        }),
        Err(e) => {
            tracing::error!("Scoring failed while explaining {}: {}", id, e);
            error_response(&e)
        }
    }
}

/// Cheaper look-alikes of a fragrance
///
/// GET /api/v1/dupes/{id}?budget=100&n=3
async fn get_dupes(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    query: web::Query<DupesQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let budget = query.budget.unwrap_or(state.ranking.dupes_default_budget);
    let limit = query
        .n
        .unwrap_or(state.ranking.dupes_default_n)
        .min(state.ranking.max_top_n);
    let catalog = state.catalog.snapshot();

    match state.matcher.dupes(&catalog, id, budget, limit) {
        Ok(dupes) => {
            tracing::debug!("Found {} dupes for {} under {}", dupes.len(), id, budget);
            HttpResponse::Ok().json(DupesResponse { dupes })
        }
        Err(e) => {
            tracing::info!("Dupes lookup failed for {}: {}", id, e);
            error_response(&e)
        }
    }
}
