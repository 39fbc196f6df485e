use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How far a fragrance carries from the skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Low,
    Moderate,
    Strong,
}

impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Low => "low",
            Projection::Moderate => "moderate",
            Projection::Strong => "strong",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Projection::Low),
            "moderate" => Ok(Projection::Moderate),
            "strong" => Ok(Projection::Strong),
            other => Err(format!(
                "unknown projection '{}', expected one of: low, moderate, strong",
                other
            )),
        }
    }
}

/// Wearing season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllYear,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::AllYear => "all-year",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            "all-year" => Ok(Season::AllYear),
            other => Err(format!(
                "unknown season '{}', expected one of: spring, summer, fall, winter, all-year",
                other
            )),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragrance {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub notes: Vec<String>,
    pub projection: Projection,
    pub longevity: String,
    pub season: Vec<Season>,
    pub context: Vec<String>,
    pub style: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Fragrance {
    /// Whether any note matches the allergen, ignoring case
    pub fn contains_note(&self, allergen: &str) -> bool {
        self.notes
            .iter()
            .any(|note| note.to_lowercase() == allergen.to_lowercase())
    }
}

/// Normalized quiz answers used for scoring
///
/// Built by the HTTP layer from either the intake body or the query string;
/// the core assumes every field is already well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub context: String,
    pub season: Season,
    pub projection: Projection,
    pub longevity: String,
    #[serde(default)]
    pub style: Vec<String>,
    pub budget: u32,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Preference {
    pub fn budget(&self) -> f64 {
        f64::from(self.budget)
    }

    /// Whether a price sits within the stated budget
    pub fn affords(&self, price: f64) -> bool {
        price <= self.budget()
    }

    /// Advisory correlation id derived from the request content
    ///
    /// Equal preferences map to equal ids, but the id is not a key: it is
    /// neither guaranteed unique nor stable across versions.
    pub fn query_id(&self) -> Option<String> {
        let canonical = serde_json::to_vec(self).ok()?;
        Some(format!("query_{}", Uuid::new_v5(&Uuid::NAMESPACE_OID, &canonical).simple()))
    }
}

/// A fragrance paired with its compatibility score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFragrance {
    pub fragrance: Fragrance,
    pub score: f64,
}

/// A fragrance annotated with its tag overlap against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarFragrance {
    #[serde(flatten)]
    pub fragrance: Fragrance,
    pub similarity_score: usize,
}

/// Per-term weights of the additive score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub context: f64,
    pub season: f64,
    pub projection: f64,
    pub longevity: f64,
    pub style: f64,
    pub over_budget: f64,
    pub value_bonus: f64,
    /// Fraction of the budget at or under which `value_bonus` applies
    pub value_ratio: f64,
    pub allergen: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            context: 2.0,
            season: 1.5,
            projection: 1.0,
            longevity: 1.0,
            style: 1.5,
            over_budget: -2.0,
            value_bonus: 0.5,
            value_ratio: 0.7,
            allergen: -5.0,
        }
    }
}
