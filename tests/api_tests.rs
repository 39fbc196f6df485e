// HTTP boundary tests for Scent Match

use actix_web::{test, web, App};
use scent_match::config::RankingSettings;
use scent_match::core::{Catalog, CatalogStore, Matcher};
use scent_match::models::ScoringWeights;
use scent_match::routes::{self, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(CatalogStore::new(Catalog::sample())),
        matcher: Matcher::with_default_weights(),
        ranking: RankingSettings::default(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(routes::configure_extractors)
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn ids(list: &Value) -> Vec<u64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_u64().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_root_banner() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Fragrance Recommender API");
}

#[actix_web::test]
async fn test_health_reports_catalog_size() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog_size"], 5);
}

#[actix_web::test]
async fn test_intake_returns_buckets_and_query_id() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(json!({
            "context": "casual",
            "season": "summer",
            "projection": "low",
            "longevity": "4-6h",
            "style": ["fresh"],
            "budget": 100,
            "allergies": []
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&body["real_deal"]), vec![3, 5, 2]);
    assert_eq!(ids(&body["budget_alternatives"]), vec![1]);
    assert!(body["query_id"].as_str().unwrap().starts_with("query_"));
}

#[actix_web::test]
async fn test_intake_missing_field_is_bad_request() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(json!({
            "season": "summer",
            "projection": "low",
            "longevity": "4-6h",
            "budget": 100
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_intake_unknown_projection_is_bad_request() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/intake")
        .set_json(json!({
            "context": "casual",
            "season": "summer",
            "projection": "nuclear",
            "longevity": "4-6h",
            "budget": 100
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
}

#[actix_web::test]
async fn test_recommendations_query_parses_csv() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?context=casual&season=summer&projection=low&longevity=4-6h&style=fresh,%20citrus&budget=100&allergies=Neroli")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // Acqua di Gio loses 5 for neroli, leaving Club de Nuit first
    let real_deal = ids(&body["real_deal"]);
    assert_eq!(real_deal[0], 5);
    assert!(body.get("query_id").is_none());
}

#[actix_web::test]
async fn test_recommendations_variable_top_n() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?context=casual&season=all-year&projection=strong&longevity=8h%2B&style=woody&budget=200&n=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["real_deal"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_recommendations_missing_budget_is_bad_request() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?context=casual&season=summer&projection=low&longevity=4-6h&style=fresh")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_query");
}

#[actix_web::test]
async fn test_details_includes_similarity_scores() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/fragrance/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["fragrance"]["name"], "Bleu de Chanel");
    let similar = body["similar_fragrances"].as_array().unwrap();
    assert_eq!(similar.len(), 3);
    assert_eq!(similar[0]["id"], 2);
    assert_eq!(similar[0]["similarity_score"], 2);
}

#[actix_web::test]
async fn test_details_unknown_id_is_not_found() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/fragrance/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["status_code"], 404);
}

#[actix_web::test]
async fn test_dupes_respect_budget() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/dupes/2?budget=40").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&body["dupes"]), vec![5]);
    assert_eq!(body["dupes"][0]["similarity_score"], 6);
}

#[actix_web::test]
async fn test_dupes_default_budget() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/dupes/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // Budget defaults to 100, so every other fragrance is eligible; top 3 by overlap
    // Sauvage 2+2+0, Acqua 2+2+2, Nuit 1+2+1, Club 2+2+0
    assert_eq!(ids(&body["dupes"]), vec![3, 2, 4]);
}

#[actix_web::test]
async fn test_dupes_unknown_id_is_not_found() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/dupes/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/fragrance/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_explain_breakdown_sums_to_score() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/fragrance/3/explain?context=casual&season=summer&projection=low&longevity=4-6h&style=fresh&budget=100")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"], 7.0);
    let terms = body["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 8);
    assert_eq!(terms[0]["rule"], "context");
    assert_eq!(terms[0]["contribution"], 2.0);
}

#[actix_web::test]
async fn test_list_fragrances() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/fragrances").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 5);
    assert_eq!(ids(&body["fragrances"]), vec![1, 2, 3, 4, 5]);
}

#[actix_web::test]
async fn test_whitespace_context_is_bad_request() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/fragrance/3/explain?context=%20%20&season=summer&projection=low&longevity=4-6h&style=fresh&budget=100")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
}

#[actix_web::test]
async fn test_explain_non_finite_weights_is_internal_error() {
    let state = AppState {
        matcher: Matcher::new(ScoringWeights {
            context: f64::NAN,
            ..ScoringWeights::default()
        }),
        ..app_state()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_extractors)
            .configure(routes::configure_routes),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/api/v1/fragrance/3/explain?context=casual&season=summer&projection=low&longevity=4-6h&style=fresh&budget=100")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "internal_error");
}
