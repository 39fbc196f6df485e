use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{Fragrance, Preference};

/// Number of distinct values present in both slices
///
/// Duplicates on either side count once, matching set-intersection semantics.
#[inline]
pub fn overlap_count<T: Eq + Hash>(left: &[T], right: &[T]) -> usize {
    let right: HashSet<&T> = right.iter().collect();
    left.iter()
        .collect::<HashSet<&T>>()
        .into_iter()
        .filter(|item| right.contains(item))
        .count()
}

/// Number of preference allergens that appear in the fragrance notes
///
/// Comparison is case-insensitive; each allergen counts once no matter how
/// many notes it matches.
#[inline]
pub fn allergen_hits(preference: &Preference, fragrance: &Fragrance) -> usize {
    preference
        .allergies
        .iter()
        .filter(|allergen| fragrance.contains_note(allergen))
        .count()
}

/// Whether the fragrance is priced strictly over budget
#[inline]
pub fn is_over_budget(preference: &Preference, fragrance: &Fragrance) -> bool {
    !preference.affords(fragrance.price)
}

/// Whether the fragrance is priced at or under `ratio` of the budget
#[inline]
pub fn is_value_buy(preference: &Preference, fragrance: &Fragrance, ratio: f64) -> bool {
    !is_over_budget(preference, fragrance) && fragrance.price <= preference.budget() * ratio
}
