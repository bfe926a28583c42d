//! Word-level tokenization with stopword removal
//!
//! Input is expected to be normalized already (see [`normalize`](super::normalize)),
//! so splitting on a single space is sufficient and the stopword lists are
//! stored in their normalized spelling (`fuer`, not `für`).

use super::normalize::normalize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// German function words, normalized
pub const GERMAN_STOPWORDS: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "eines", "einem", "einen",
    "und", "oder", "aber", "mit", "von", "zu", "zur", "zum", "fuer", "auf", "im", "in", "an",
    "am", "bei", "aus", "nach", "vor", "ueber", "unter", "durch", "ohne", "gegen", "bis", "ab",
    "ist", "sind", "war", "wird", "werden", "hat", "haben", "kann", "nicht", "auch", "als",
    "wie", "so", "es", "er", "sie", "wir", "ihr", "ich", "du", "man", "sich", "noch", "nur",
    "sehr", "dass", "wenn", "dieser", "diese", "dieses",
];

/// English function words
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "of", "to", "in", "on", "at", "for", "with", "by", "from", "as",
    "is", "are", "was", "were", "be", "been", "it", "its", "this", "that", "these", "those",
    "not", "no", "your", "our", "their", "you", "we", "they", "he", "she", "his", "her", "has",
    "have", "had", "will", "can", "do", "does", "than", "then", "if", "into", "about", "an",
];

static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::default);

/// Splits normalized text into significant words
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        let stopwords = GERMAN_STOPWORDS
            .iter()
            .chain(ENGLISH_STOPWORDS)
            .map(|word| (*word).to_string())
            .collect();
        Self { stopwords }
    }
}

impl Tokenizer {
    /// Shared instance carrying only the built-in stopword lists
    pub fn builtin() -> &'static Tokenizer {
        &DEFAULT_TOKENIZER
    }

    /// Extend the stopword set; words are normalized before insertion
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.extend(
            words
                .into_iter()
                .map(|word| normalize(word.as_ref()))
                .filter(|word| !word.is_empty()),
        );
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Tokenize already-normalized text
    ///
    /// Tokens shorter than two characters and stopwords are dropped.
    /// Order and duplicates are preserved.
    pub fn tokenize<'t>(&self, normalized_text: &'t str) -> Vec<&'t str> {
        normalized_text
            .split(' ')
            .filter(|token| token.chars().count() >= 2)
            .filter(|token| !self.stopwords.contains(*token))
            .collect()
    }
}

/// Tokenize with the built-in stopword lists
///
/// # Examples
///
/// ```
/// use affimatch_lib::matching::tokenize;
///
/// assert_eq!(tokenize("dieser laptop ist super"), vec!["laptop", "super"]);
/// assert_eq!(tokenize("the x box and the box"), vec!["box", "box"]);
/// ```
pub fn tokenize(normalized_text: &str) -> Vec<&str> {
    Tokenizer::builtin().tokenize(normalized_text)
}

#[cfg(test)]
mod tests {
    include!("tokenize.test.rs");
}
