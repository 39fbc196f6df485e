//! Scent Match - quiz-driven fragrance recommendation service
//!
//! This library provides the scoring and ranking engine behind the fragrance
//! quiz: an additive rule table scores each catalog entry against the user's
//! answers, and the ranker splits positive matches into within-budget
//! "real deals" and over-budget alternatives.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{Catalog, CatalogStore, Matcher, Recommendation, DEFAULT_TOP_N};
pub use error::{CatalogError, MatchError};
pub use models::{Fragrance, Preference, ScoredFragrance, SimilarFragrance, ScoringWeights, QuizRequest, RecommendationResponse};
