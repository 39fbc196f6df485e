// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use catalog::{Catalog, CatalogStore};
pub use filters::{overlap_count, allergen_hits, is_over_budget, is_value_buy};
pub use matcher::{Matcher, Recommendation, SimilarResult, DEFAULT_TOP_N};
pub use scoring::{calculate_match_score, explain_score, ScoreRule, ScoreTerm};
pub use similarity::{similarity, SimilarityBasis};
