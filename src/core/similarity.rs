use crate::core::filters::overlap_count;
use crate::models::Fragrance;

/// Attribute sets compared when measuring similarity between two fragrances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBasis {
    /// Shared style tags only (details page)
    Style,
    /// Shared style, context and season tags, unweighted (dupes)
    StyleContextSeason,
}

/// Unweighted count of tags two fragrances share under the given basis
pub fn similarity(target: &Fragrance, other: &Fragrance, basis: SimilarityBasis) -> usize {
    let style = overlap_count(&target.style, &other.style);
    match basis {
        SimilarityBasis::Style => style,
        SimilarityBasis::StyleContextSeason => {
            style
                + overlap_count(&target.context, &other.context)
                + overlap_count(&target.season, &other.season)
        }
    }
}
