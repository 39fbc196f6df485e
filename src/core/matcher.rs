use crate::core::{
    catalog::Catalog,
    scoring::{calculate_match_score, explain_score, ScoreTerm},
    similarity::{similarity, SimilarityBasis},
};
use crate::error::MatchError;
use crate::models::{Fragrance, Preference, ScoredFragrance, ScoringWeights, SimilarFragrance};

/// Entries kept per bucket by `recommend` and the similarity lookups
pub const DEFAULT_TOP_N: usize = 3;

/// Ranked recommendations split by budget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendation {
    /// Positively scored, priced at or under budget
    pub real_deal: Vec<ScoredFragrance>,
    /// Positively scored, priced over budget
    pub budget_alternatives: Vec<ScoredFragrance>,
}

impl Recommendation {
    pub fn real_deal_fragrances(&self) -> Vec<Fragrance> {
        self.real_deal.iter().map(|s| s.fragrance.clone()).collect()
    }

    pub fn budget_alternative_fragrances(&self) -> Vec<Fragrance> {
        self.budget_alternatives.iter().map(|s| s.fragrance.clone()).collect()
    }
}

/// A target fragrance with the catalog entries most similar to it
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarResult {
    pub target: Fragrance,
    pub similar: Vec<SimilarFragrance>,
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Score every catalog entry
/// 2. Drop non-positive scores
/// 3. Stable sort by score, descending (ties keep catalog order)
/// 4. Partition by budget
/// 5. Truncate each bucket
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, preference: &Preference, fragrance: &Fragrance) -> f64 {
        calculate_match_score(preference, fragrance, &self.weights)
    }

    /// Total score with its per-rule breakdown
    ///
    /// Fails like `rank` when the total is not finite.
    pub fn explain(
        &self,
        preference: &Preference,
        fragrance: &Fragrance,
    ) -> Result<(f64, Vec<ScoreTerm>), MatchError> {
        let terms = explain_score(preference, fragrance, &self.weights);
        let score: f64 = terms.iter().map(|term| term.contribution).sum();
        ensure_finite(score, fragrance)?;
        Ok((score, terms))
    }

    /// Score the whole catalog and return positive matches, best first
    ///
    /// Fails as a whole if any score is not finite.
    pub fn rank(
        &self,
        preference: &Preference,
        catalog: &Catalog,
    ) -> Result<Vec<ScoredFragrance>, MatchError> {
        let mut scored = Vec::with_capacity(catalog.len());

        for fragrance in catalog {
            let score = self.score(preference, fragrance);
            ensure_finite(score, fragrance)?;
            if score > 0.0 {
                scored.push(ScoredFragrance {
                    fragrance: fragrance.clone(),
                    score,
                });
            }
        }

        // `sort_by` is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Ranked {} positive matches out of {} fragrances",
            scored.len(),
            catalog.len()
        );

        Ok(scored)
    }

    /// Top three real deals and top three budget alternatives
    pub fn recommend(
        &self,
        preference: &Preference,
        catalog: &Catalog,
    ) -> Result<Recommendation, MatchError> {
        self.recommend_top(preference, catalog, DEFAULT_TOP_N)
    }

    /// Like `recommend`, keeping at most `limit` entries per bucket
    pub fn recommend_top(
        &self,
        preference: &Preference,
        catalog: &Catalog,
        limit: usize,
    ) -> Result<Recommendation, MatchError> {
        let (mut real_deal, mut budget_alternatives): (Vec<_>, Vec<_>) = self
            .rank(preference, catalog)?
            .into_iter()
            .partition(|scored| preference.affords(scored.fragrance.price));

        real_deal.truncate(limit);
        budget_alternatives.truncate(limit);

        Ok(Recommendation {
            real_deal,
            budget_alternatives,
        })
    }

    /// Other fragrances sharing style tags with `id`, top three
    pub fn similar_by_style(&self, catalog: &Catalog, id: u32) -> Result<SimilarResult, MatchError> {
        let target = catalog.get(id).ok_or(MatchError::NotFound { id })?;

        let similar = rank_similar(
            catalog,
            target,
            SimilarityBasis::Style,
            |_| true,
            DEFAULT_TOP_N,
        );

        Ok(SimilarResult {
            target: target.clone(),
            similar,
        })
    }

    /// Cheaper look-alikes of `id` priced at or under `budget`, top `limit`
    pub fn dupes(
        &self,
        catalog: &Catalog,
        id: u32,
        budget: u32,
        limit: usize,
    ) -> Result<Vec<SimilarFragrance>, MatchError> {
        let target = catalog.get(id).ok_or(MatchError::NotFound { id })?;
        let ceiling = f64::from(budget);

        Ok(rank_similar(
            catalog,
            target,
            SimilarityBasis::StyleContextSeason,
            |candidate| candidate.price <= ceiling,
            limit,
        ))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn ensure_finite(score: f64, fragrance: &Fragrance) -> Result<(), MatchError> {
    if score.is_finite() {
        Ok(())
    } else {
        Err(MatchError::Internal(format!(
            "non-finite score {} for fragrance {}",
            score, fragrance.id
        )))
    }
}

/// Score every other catalog entry against `target`, keep positive overlaps
/// that pass `eligible`, stable sort descending and truncate
fn rank_similar<F>(
    catalog: &Catalog,
    target: &Fragrance,
    basis: SimilarityBasis,
    eligible: F,
    limit: usize,
) -> Vec<SimilarFragrance>
where
    F: Fn(&Fragrance) -> bool,
{
    let mut similar: Vec<SimilarFragrance> = catalog
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .filter(|candidate| eligible(*candidate))
        .filter_map(|candidate| {
            let similarity_score = similarity(target, candidate, basis);
            (similarity_score > 0).then(|| SimilarFragrance {
                fragrance: candidate.clone(),
                similarity_score,
            })
        })
        .collect();

    similar.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));
    similar.truncate(limit);
    similar
}
