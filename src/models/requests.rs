use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::MatchError;
use crate::models::domain::{Preference, Projection, Season};

/// Quiz submission body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1))]
    pub context: String,
    #[validate(length(min = 1))]
    pub season: String,
    #[validate(length(min = 1))]
    pub projection: String,
    #[validate(length(min = 1))]
    pub longevity: String,
    #[serde(default)]
    pub style: Vec<String>,
    pub budget: u32,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl QuizRequest {
    /// Validate and normalize into a scoring preference
    ///
    /// Scalar answers are trimmed before validation, so whitespace-only
    /// values are rejected like empty ones.
    pub fn into_preference(self) -> Result<Preference, MatchError> {
        let req = self.trimmed();
        req.validate()
            .map_err(|errors| MatchError::InvalidInput(errors.to_string()))?;

        Ok(Preference {
            context: req.context,
            season: req.season.parse::<Season>().map_err(MatchError::InvalidInput)?,
            projection: req
                .projection
                .parse::<Projection>()
                .map_err(MatchError::InvalidInput)?,
            longevity: req.longevity,
            style: normalize_tags(req.style, false),
            budget: req.budget,
            allergies: normalize_tags(req.allergies, true),
        })
    }

    fn trimmed(self) -> Self {
        Self {
            context: self.context.trim().to_string(),
            season: self.season.trim().to_string(),
            projection: self.projection.trim().to_string(),
            longevity: self.longevity.trim().to_string(),
            ..self
        }
    }
}

/// Query-string form of the quiz, with comma-separated list fields
///
/// GET /api/v1/recommendations?context=casual&season=summer&projection=low
///     &longevity=4-6h&style=fresh,citrus&budget=100&allergies=bergamot&n=5
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationQuery {
    #[validate(length(min = 1))]
    pub context: String,
    #[validate(length(min = 1))]
    pub season: String,
    #[validate(length(min = 1))]
    pub projection: String,
    #[validate(length(min = 1))]
    pub longevity: String,
    #[serde(default)]
    pub style: String,
    pub budget: u32,
    #[serde(default)]
    pub allergies: String,
    /// Optional top-N per bucket
    #[serde(default)]
    pub n: Option<usize>,
}

impl RecommendationQuery {
    pub fn to_preference(&self) -> Result<Preference, MatchError> {
        QuizRequest {
            context: self.context.clone(),
            season: self.season.clone(),
            projection: self.projection.clone(),
            longevity: self.longevity.clone(),
            style: split_csv(&self.style),
            budget: self.budget,
            allergies: split_csv(&self.allergies),
        }
        .into_preference()
    }
}

/// Query parameters for the dupes lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DupesQuery {
    pub budget: Option<u32>,
    pub n: Option<usize>,
}

/// Split a comma-separated field, trimming items and dropping empties
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim, drop empties and de-duplicate while keeping first-seen order
fn normalize_tags(tags: Vec<String>, case_insensitive: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            continue;
        }
        let duplicate = out.iter().any(|seen| {
            if case_insensitive {
                seen.to_lowercase() == tag.to_lowercase()
            } else {
                *seen == tag
            }
        });
        if !duplicate {
            out.push(tag);
        }
    }
    out
}
