//! Multi-field weighted relevance scoring for a single product
//!
//! Each present field gets a `[0, 1]` similarity; the configured weights turn
//! those into one score on a `0..=100` scale.

use super::config::MatchConfig;
use super::normalize::normalize;
use super::similarity::SimilarityScorer;
use crate::catalog::ProductRecord;
use crate::primitives::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Category containing the whole keyword
pub const CATEGORY_CONTAINS_SCORE: f64 = 0.9;

/// Category sharing at least one token with the keyword
pub const CATEGORY_TOKEN_SCORE: f64 = 0.8;

/// Scale applied to fuzzy category similarity
pub const CATEGORY_FUZZY_FACTOR: f64 = 0.7;

/// Relevance of one product for one keyword
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    /// Weighted score in `0..=100`, rounded to two decimals
    pub score: f64,
    /// Raw `[0, 1]` similarity per field that was present on the product
    pub field_matches: BTreeMap<FieldName, f64>,
}

impl MatchResult {
    pub fn field(&self, field: FieldName) -> Option<f64> {
        self.field_matches.get(&field).copied()
    }
}

/// Score `product` against `keyword`
///
/// Fields that are missing or empty are left out of `field_matches` and
/// contribute nothing. An empty keyword (after normalization) scores 0.
///
/// # Examples
///
/// ```
/// use affimatch_lib::catalog::ProductRecord;
/// use affimatch_lib::matching::{MatchConfig, calculate_score};
/// use affimatch_lib::primitives::FieldName;
///
/// let product = ProductRecord::titled("Dieser Laptop ist super");
/// let result = calculate_score("laptop", &product, &MatchConfig::default());
///
/// assert_eq!(result.field(FieldName::Title), Some(0.95));
/// assert_eq!(result.score, 38.0);
/// ```
pub fn calculate_score(keyword: &str, product: &ProductRecord, config: &MatchConfig) -> MatchResult {
    let keyword = normalize(keyword);
    if keyword.is_empty() {
        return MatchResult::default();
    }

    let scorer = SimilarityScorer::new(config.tokenizer());
    let mut field_matches = BTreeMap::new();

    let text_fields = [
        (FieldName::Title, &product.title),
        (FieldName::Description, &product.description),
        (FieldName::Merchant, &product.merchant_name),
    ];
    for (field, value) in text_fields {
        if let Some(text) = value.as_deref().filter(|text| !text.is_empty()) {
            field_matches.insert(field, scorer.similarity(&keyword, &normalize(text)));
        }
    }

    if let Some(categories) = product.categories.as_deref().filter(|c| !c.is_empty()) {
        field_matches.insert(
            FieldName::Category,
            category_similarity(&scorer, &keyword, categories),
        );
    }

    if let Some(tags) = product.keywords.as_deref().filter(|t| !t.is_empty()) {
        field_matches.insert(
            FieldName::Keywords,
            keywords_similarity(&scorer, &keyword, tags),
        );
    }

    let total: f64 = field_matches
        .iter()
        .map(|(field, similarity)| similarity * config.weight(*field))
        .sum();

    let score = round_to_hundredths(total * 100.0);
    tracing::trace!(keyword = %keyword, score, "product scored");

    MatchResult {
        score,
        field_matches,
    }
}

/// Best match of `keyword` (normalized) against any category
///
/// An exact category hit returns 1.0 immediately. Otherwise each category
/// yields 0.9 if it contains the keyword, 0.8 if they share a token, or the
/// fuzzy similarity scaled by 0.7; the maximum wins.
pub fn category_similarity<S: AsRef<str>>(
    scorer: &SimilarityScorer<'_>,
    keyword: &str,
    categories: &[S],
) -> f64 {
    let keyword_tokens = scorer.tokenizer().tokenize(keyword);
    let mut best: f64 = 0.0;

    for category in categories {
        let category = normalize(category.as_ref());
        if category == keyword {
            return 1.0;
        }

        let candidate = if category.contains(keyword) {
            CATEGORY_CONTAINS_SCORE
        } else if shares_token(&keyword_tokens, &scorer.tokenizer().tokenize(&category)) {
            CATEGORY_TOKEN_SCORE
        } else {
            scorer.similarity(keyword, &category) * CATEGORY_FUZZY_FACTOR
        };

        best = best.max(candidate);
    }

    best
}

/// Share of tags found in the keyword (normalized)
///
/// A tag equal to the whole keyword returns 1.0 immediately. Otherwise a tag
/// counts when it equals or is contained in one of the keyword's tokens.
pub fn keywords_similarity<S: AsRef<str>>(
    scorer: &SimilarityScorer<'_>,
    keyword: &str,
    tags: &[S],
) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }

    let keyword_tokens = scorer.tokenizer().tokenize(keyword);
    let mut matched = 0usize;

    for tag in tags {
        let tag = normalize(tag.as_ref());
        if tag == keyword {
            return 1.0;
        }
        if !tag.is_empty() && keyword_tokens.iter().any(|token| token.contains(tag.as_str())) {
            matched += 1;
        }
    }

    matched as f64 / tags.len() as f64
}

fn shares_token(left: &[&str], right: &[&str]) -> bool {
    left.iter().any(|token| right.contains(token))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    include!("field.test.rs");
}
