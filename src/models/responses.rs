use serde::{Deserialize, Serialize};
use crate::core::scoring::ScoreTerm;
use crate::models::domain::{Fragrance, SimilarFragrance};

/// Response for the intake and query recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub real_deal: Vec<Fragrance>,
    pub budget_alternatives: Vec<Fragrance>,
    /// Advisory correlation id derived from the request content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

/// Response for the fragrance details endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragranceDetailsResponse {
    pub fragrance: Fragrance,
    pub similar_fragrances: Vec<SimilarFragrance>,
}

/// Response for the dupes endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DupesResponse {
    pub dupes: Vec<SimilarFragrance>,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub fragrances: Vec<Fragrance>,
    pub total: usize,
}

/// Per-rule score breakdown for one fragrance
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResponse {
    pub fragrance_id: u32,
    pub score: f64,
    pub terms: Vec<ScoreTerm>,
}

/// Root banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
