// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Fragrance, Preference, Projection, Season, ScoredFragrance, SimilarFragrance, ScoringWeights};
pub use requests::{QuizRequest, RecommendationQuery, DupesQuery};
pub use responses::{
    RecommendationResponse, FragranceDetailsResponse, DupesResponse, CatalogResponse,
    ExplainResponse, RootResponse, HealthResponse, ErrorResponse,
};
