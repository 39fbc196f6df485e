use serde::Serialize;

use crate::core::filters::{allergen_hits, is_over_budget, is_value_buy, overlap_count};
use crate::models::{Fragrance, Preference, ScoringWeights};

/// Identifies one term of the additive score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Context,
    Season,
    Projection,
    Longevity,
    Style,
    OverBudget,
    ValueBonus,
    Allergen,
}

/// Counts how many times a rule fires for a (preference, fragrance) pair
type HitCounter = fn(&Preference, &Fragrance, &ScoringWeights) -> usize;

/// Scoring rule table, evaluated in order and summed
///
/// | rule        | fires when                                  | per hit |
/// |-------------|---------------------------------------------|---------|
/// | context     | preference context is in fragrance contexts | +2.0    |
/// | season      | preference season is in fragrance seasons   | +1.5    |
/// | projection  | projections are equal                       | +1.0    |
/// | longevity   | longevities are equal                       | +1.0    |
/// | style       | once per shared style tag                   | +1.5    |
/// | over_budget | price > budget                              | -2.0    |
/// | value_bonus | price <= 0.7 * budget                       | +0.5    |
/// | allergen    | once per allergen found in the notes        | -5.0    |
const RULES: [(ScoreRule, HitCounter); 8] = [
    (ScoreRule::Context, |p, f, _| usize::from(f.context.contains(&p.context))),
    (ScoreRule::Season, |p, f, _| usize::from(f.season.contains(&p.season))),
    (ScoreRule::Projection, |p, f, _| usize::from(p.projection == f.projection)),
    (ScoreRule::Longevity, |p, f, _| usize::from(p.longevity == f.longevity)),
    (ScoreRule::Style, |p, f, _| overlap_count(&p.style, &f.style)),
    (ScoreRule::OverBudget, |p, f, _| usize::from(is_over_budget(p, f))),
    (ScoreRule::ValueBonus, |p, f, w| usize::from(is_value_buy(p, f, w.value_ratio))),
    (ScoreRule::Allergen, |p, f, _| allergen_hits(p, f)),
];

impl ScoreRule {
    /// Weight applied per hit
    pub fn weight(&self, weights: &ScoringWeights) -> f64 {
        match self {
            ScoreRule::Context => weights.context,
            ScoreRule::Season => weights.season,
            ScoreRule::Projection => weights.projection,
            ScoreRule::Longevity => weights.longevity,
            ScoreRule::Style => weights.style,
            ScoreRule::OverBudget => weights.over_budget,
            ScoreRule::ValueBonus => weights.value_bonus,
            ScoreRule::Allergen => weights.allergen,
        }
    }
}

/// One evaluated rule and what it added to the score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTerm {
    pub rule: ScoreRule,
    pub hits: usize,
    pub contribution: f64,
}

/// Evaluate every rule and return the per-term breakdown, in table order
pub fn explain_score(
    preference: &Preference,
    fragrance: &Fragrance,
    weights: &ScoringWeights,
) -> Vec<ScoreTerm> {
    RULES
        .iter()
        .map(|(rule, count)| {
            let hits = count(preference, fragrance, weights);
            ScoreTerm {
                rule: *rule,
                hits,
                contribution: hits as f64 * rule.weight(weights),
            }
        })
        .collect()
}

/// Calculate the compatibility score of a fragrance for a preference
///
/// Pure and deterministic; the result is the sum of all rule contributions
/// and may be negative.
pub fn calculate_match_score(
    preference: &Preference,
    fragrance: &Fragrance,
    weights: &ScoringWeights,
) -> f64 {
    RULES
        .iter()
        .map(|(rule, count)| count(preference, fragrance, weights) as f64 * rule.weight(weights))
        .sum()
}
