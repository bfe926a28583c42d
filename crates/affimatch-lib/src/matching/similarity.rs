//! Pairwise text similarity for normalized strings
//!
//! # Algorithm Overview
//!
//! After the empty/exact/containment short-circuits, the score is the plain
//! average of up to four components:
//! - **Word match** x 1.5 - token overlap with prefix/substring partial credit
//! - **Character ratio** - recursive longest-common-substring percentage
//! - **Bigram Jaccard** - overlap of 2-character shingles
//! - **Levenshtein ratio** - only for short search/target pairs
//!
//! The word-match boost is divided by the component count like every other
//! term, so the raw average can exceed 1.0. The final clamp absorbs that
//! excess and ranking depends on it, so both stay as they are.
//!
//! All lengths are measured in characters.

use super::tokenize::Tokenizer;
use std::collections::HashSet;

/// Score for identical strings
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Score when the target contains the whole search phrase
pub const CONTAINMENT_SCORE: f64 = 0.95;

/// Multiplier applied to the word-match component before averaging
pub const WORD_MATCH_BOOST: f64 = 1.5;

/// Partial credit when one token is a prefix of the other
pub const PREFIX_TOKEN_CREDIT: f64 = 0.7;

/// Partial credit when one token contains the other
pub const SUBSTRING_TOKEN_CREDIT: f64 = 0.4;

/// Longest search string that still gets a Levenshtein component
pub const LEVENSHTEIN_MAX_SEARCH_LEN: usize = 20;

/// Longest target string that still gets a Levenshtein component
pub const LEVENSHTEIN_MAX_TARGET_LEN: usize = 50;

/// Inputs are cut to this many characters before computing edit distance
pub const LEVENSHTEIN_MAX_INPUT_LEN: usize = 255;

/// Outcome of comparing two normalized strings
#[derive(Debug, Clone, PartialEq)]
pub enum Similarity {
    /// One side was empty
    Empty,
    /// Both sides identical
    Exact,
    /// Target contains the search phrase verbatim
    Contained,
    /// Averaged component scores
    Blended(BlendedScore),
}

/// Individual components of a blended similarity, kept for explanation output
#[derive(Debug, Clone, PartialEq)]
pub struct BlendedScore {
    /// Word match score before the boost
    pub word_match: f64,
    pub character_ratio: f64,
    pub bigram_jaccard: f64,
    /// `None` when either string was too long for the edit-distance term
    pub levenshtein: Option<f64>,
    /// Clamped average
    pub score: f64,
}

impl Similarity {
    /// Final similarity in `[0, 1]`
    pub fn score(&self) -> f64 {
        match self {
            Similarity::Empty => 0.0,
            Similarity::Exact => EXACT_MATCH_SCORE,
            Similarity::Contained => CONTAINMENT_SCORE,
            Similarity::Blended(blended) => blended.score,
        }
    }
}

/// Compares normalized strings using a specific stopword set
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer<'a> {
    tokenizer: &'a Tokenizer,
}

impl Default for SimilarityScorer<'static> {
    fn default() -> Self {
        Self::new(Tokenizer::builtin())
    }
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &'a Tokenizer {
        self.tokenizer
    }

    /// Similarity of `target` to `search`, both normalized, in `[0, 1]`
    pub fn similarity(&self, search: &str, target: &str) -> f64 {
        self.compare(search, target).score()
    }

    /// Like [`similarity`](Self::similarity), but keeps the component scores
    pub fn compare(&self, search: &str, target: &str) -> Similarity {
        if search.is_empty() || target.is_empty() {
            return Similarity::Empty;
        }
        if search == target {
            return Similarity::Exact;
        }
        if target.contains(search) {
            return Similarity::Contained;
        }

        let word_match = self.word_match_score(search, target);
        let character_ratio = similar_text_ratio(search, target);
        let bigram_jaccard = bigram_jaccard(search, target);

        let levenshtein = (search.chars().count() <= LEVENSHTEIN_MAX_SEARCH_LEN
            && target.chars().count() <= LEVENSHTEIN_MAX_TARGET_LEN)
            .then(|| levenshtein_ratio(search, target));

        let mut total = word_match * WORD_MATCH_BOOST + character_ratio + bigram_jaccard;
        let mut count = 3.0;
        if let Some(ratio) = levenshtein {
            total += ratio;
            count += 1.0;
        }

        Similarity::Blended(BlendedScore {
            word_match,
            character_ratio,
            bigram_jaccard,
            levenshtein,
            score: (total / count).clamp(0.0, 1.0),
        })
    }

    /// Fraction of search tokens found in the target, with partial credit
    ///
    /// Exact token hits count 1.0. Otherwise the first target token that is a
    /// prefix of (or prefixed by) the search token counts 0.7, or the first
    /// that merely contains it (or is contained) counts 0.4.
    pub fn word_match_score(&self, search: &str, target: &str) -> f64 {
        let search_tokens = self.tokenizer.tokenize(search);
        let target_tokens = self.tokenizer.tokenize(target);

        if search_tokens.is_empty() || target_tokens.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        for search_token in &search_tokens {
            if target_tokens.contains(search_token) {
                total += 1.0;
                continue;
            }

            for target_token in &target_tokens {
                if search_token.starts_with(target_token) || target_token.starts_with(search_token)
                {
                    total += PREFIX_TOKEN_CREDIT;
                    break;
                }
                if search_token.contains(target_token) || target_token.contains(search_token) {
                    total += SUBSTRING_TOKEN_CREDIT;
                    break;
                }
            }
        }

        total / search_tokens.len() as f64
    }
}

/// Similarity with the built-in stopword lists
///
/// # Examples
///
/// ```
/// use affimatch_lib::matching::similarity;
///
/// assert_eq!(similarity("laptop", "laptop"), 1.0);
/// assert_eq!(similarity("laptop", "gaming laptop 15 zoll"), 0.95);
/// assert_eq!(similarity("", "laptop"), 0.0);
///
/// let fuzzy = similarity("laptop", "notebook");
/// assert!(fuzzy > 0.0 && fuzzy < 0.5);
/// ```
pub fn similarity(search: &str, target: &str) -> f64 {
    SimilarityScorer::default().similarity(search, target)
}

/// Total length of all common substrings found by recursive longest-match
/// splitting
///
/// The longest common run is located first (leftmost in `a` on ties, then
/// leftmost in `b`), then the parts left and right of it are matched the
/// same way independently.
pub fn similar_text(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    common_run_total(&a, &b)
}

/// [`similar_text`] as a ratio: `2 * matched / (len(a) + len(b))`
pub fn similar_text_ratio(a: &str, b: &str) -> f64 {
    let total_len = a.chars().count() + b.chars().count();
    if total_len == 0 {
        return 0.0;
    }
    (similar_text(a, b) * 2) as f64 / total_len as f64
}

fn common_run_total(a: &[char], b: &[char]) -> usize {
    let Some((pos_a, pos_b, len)) = longest_common_run(a, b) else {
        return 0;
    };

    len + common_run_total(&a[..pos_a], &b[..pos_b])
        + common_run_total(&a[pos_a + len..], &b[pos_b + len..])
}

fn longest_common_run(a: &[char], b: &[char]) -> Option<(usize, usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    let mut best_len = 0;

    for i in 0..a.len() {
        // no run starting here can beat the current best
        if a.len() - i <= best_len {
            break;
        }
        for j in 0..b.len() {
            let run = a[i..]
                .iter()
                .zip(&b[j..])
                .take_while(|(x, y)| x == y)
                .count();
            if run > best_len {
                best_len = run;
                best = Some((i, j, run));
            }
        }
    }

    best
}

/// Jaccard overlap of the 2-character shingle sets, whitespace ignored
///
/// Strings shorter than two characters contribute themselves as their only
/// shingle.
pub fn bigram_jaccard(a: &str, b: &str) -> f64 {
    let a = bigrams(a);
    let b = bigrams(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

fn bigrams(text: &str) -> HashSet<String> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() < 2 {
        return HashSet::from([chars.into_iter().collect()]);
    }
    chars.windows(2).map(|pair| pair.iter().collect()).collect()
}

/// `1 - distance / max_len`, with both inputs cut to
/// [`LEVENSHTEIN_MAX_INPUT_LEN`] characters
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let a: String = a.chars().take(LEVENSHTEIN_MAX_INPUT_LEN).collect();
    let b: String = b.chars().take(LEVENSHTEIN_MAX_INPUT_LEN).collect();

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - strsim::levenshtein(&a, &b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    include!("similarity.test.rs");
}
