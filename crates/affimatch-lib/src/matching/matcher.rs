//! Ranking orchestration over a candidate list
//!
//! Scores every candidate, drops those under the configured threshold, and
//! orders the rest by score. Ties keep their catalog order, so the sort must
//! stay stable.

use super::config::MatchConfig;
use super::field::{MatchResult, calculate_score};
use crate::catalog::ProductRecord;
use rayon::prelude::*;
use serde::Serialize;

/// A candidate that passed the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch<'a> {
    /// Position of the product in the candidate list
    pub index: usize,
    pub product: &'a ProductRecord,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl RankedMatch<'_> {
    pub fn score(&self) -> f64 {
        self.result.score
    }
}

/// Rank `candidates` for `keyword`
///
/// # Examples
///
/// ```
/// use affimatch_lib::catalog::ProductRecord;
/// use affimatch_lib::matching::{MatchConfig, rank};
///
/// let candidates = vec![
///     ProductRecord::titled("Kaffeemaschine"),
///     ProductRecord::titled("Gaming Laptop"),
///     ProductRecord::titled("Laptop"),
/// ];
/// let ranked = rank("laptop", &candidates, &MatchConfig::default());
///
/// let order: Vec<usize> = ranked.iter().map(|m| m.index).collect();
/// assert_eq!(order, vec![2, 1]);
/// ```
pub fn rank<'a>(
    keyword: &str,
    candidates: &'a [ProductRecord],
    config: &MatchConfig,
) -> Vec<RankedMatch<'a>> {
    let scored = candidates
        .iter()
        .enumerate()
        .map(|(index, product)| score_candidate(keyword, index, product, config))
        .collect();

    finalize(scored, config)
}

/// [`rank`] with candidate scoring spread over the rayon pool
///
/// Produces exactly the same list as [`rank`].
pub fn rank_parallel<'a>(
    keyword: &str,
    candidates: &'a [ProductRecord],
    config: &MatchConfig,
) -> Vec<RankedMatch<'a>> {
    let scored = candidates
        .par_iter()
        .enumerate()
        .map(|(index, product)| score_candidate(keyword, index, product, config))
        .collect();

    finalize(scored, config)
}

fn score_candidate<'a>(
    keyword: &str,
    index: usize,
    product: &'a ProductRecord,
    config: &MatchConfig,
) -> RankedMatch<'a> {
    RankedMatch {
        index,
        product,
        result: calculate_score(keyword, product, config),
    }
}

fn finalize<'a>(mut scored: Vec<RankedMatch<'a>>, config: &MatchConfig) -> Vec<RankedMatch<'a>> {
    let candidates = scored.len();
    let threshold = f64::from(config.threshold());

    scored.retain(|m| m.score() >= threshold);

    // Vec::sort_by is stable: equal scores keep input order
    scored.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        candidates,
        matched = scored.len(),
        threshold = config.threshold(),
        "candidates ranked"
    );

    scored
}

/// Reusable ranking setup around one [`MatchConfig`]
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'c> {
    config: &'c MatchConfig,
    limit: Option<usize>,
    parallel: bool,
}

impl<'c> Matcher<'c> {
    pub fn new(config: &'c MatchConfig) -> Self {
        Self {
            config,
            limit: None,
            parallel: false,
        }
    }

    /// Keep at most `limit` results after sorting
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &'c MatchConfig {
        self.config
    }

    pub fn rank<'a>(&self, keyword: &str, candidates: &'a [ProductRecord]) -> Vec<RankedMatch<'a>> {
        let mut ranked = if self.parallel {
            rank_parallel(keyword, candidates, self.config)
        } else {
            rank(keyword, candidates, self.config)
        };

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Highest-ranked candidate, if any clears the threshold
    pub fn best_match<'a>(
        &self,
        keyword: &str,
        candidates: &'a [ProductRecord],
    ) -> Option<RankedMatch<'a>> {
        self.rank(keyword, candidates).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    include!("matcher.test.rs");
}
