//! # Matching Module
//!
//! Fuzzy relevance scoring of catalog products against a free-text keyword.
//!
//! ## Modules
//!
//! - [`normalize`](mod@normalize) - Text canonicalization
//! - [`tokenize`](mod@tokenize) - Stopword-aware word splitting
//! - [`similarity`](mod@similarity) - Pairwise string similarity
//! - [`field`] - Weighted multi-field product score
//! - [`matcher`] - Threshold filtering and stable ranking
//! - [`config`] - Immutable weights, threshold and stopwords
//!
//! Every operation is pure and synchronous; a [`MatchConfig`] can be shared
//! across threads without locking.

pub mod config;
pub mod field;
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod tokenize;

pub use config::{FieldWeights, MatchConfig};
pub use field::{MatchResult, calculate_score, category_similarity, keywords_similarity};
pub use matcher::{Matcher, RankedMatch, rank, rank_parallel};
pub use normalize::normalize;
pub use similarity::{Similarity, SimilarityScorer, similarity};
pub use tokenize::{Tokenizer, tokenize};
