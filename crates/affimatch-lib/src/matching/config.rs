//! Immutable matcher configuration
//!
//! A [`MatchConfig`] is built once (from defaults, a config file, env vars or
//! CLI flags) and passed by reference into every scoring call. Construction
//! is the only place that can fail.

use super::tokenize::Tokenizer;
use crate::primitives::{FieldName, MatchError};
use serde::{Deserialize, Serialize};

/// Default weight values
pub mod defaults {
    pub const WEIGHT_TITLE: f64 = 0.40;
    pub const WEIGHT_DESCRIPTION: f64 = 0.25;
    pub const WEIGHT_CATEGORY: f64 = 0.20;
    pub const WEIGHT_MERCHANT: f64 = 0.10;
    pub const WEIGHT_KEYWORDS: f64 = 0.05;
    pub const THRESHOLD: i64 = 30;
}

// Sums this close to 1.0 are left as-is
const SUM_TOLERANCE: f64 = 1e-9;

/// Per-field share of the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub category: f64,
    #[serde(alias = "merchant_name")]
    pub merchant: f64,
    #[serde(alias = "tags")]
    pub keywords: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: defaults::WEIGHT_TITLE,
            description: defaults::WEIGHT_DESCRIPTION,
            category: defaults::WEIGHT_CATEGORY,
            merchant: defaults::WEIGHT_MERCHANT,
            keywords: defaults::WEIGHT_KEYWORDS,
        }
    }
}

impl FieldWeights {
    /// All weights zero; every candidate scores 0
    pub fn zero() -> Self {
        Self {
            title: 0.0,
            description: 0.0,
            category: 0.0,
            merchant: 0.0,
            keywords: 0.0,
        }
    }

    pub fn get(&self, field: FieldName) -> f64 {
        match field {
            FieldName::Title => self.title,
            FieldName::Description => self.description,
            FieldName::Category => self.category,
            FieldName::Merchant => self.merchant,
            FieldName::Keywords => self.keywords,
        }
    }

    pub fn set(&mut self, field: FieldName, value: f64) {
        match field {
            FieldName::Title => self.title = value,
            FieldName::Description => self.description = value,
            FieldName::Category => self.category = value,
            FieldName::Merchant => self.merchant = value,
            FieldName::Keywords => self.keywords = value,
        }
    }

    pub fn sum(&self) -> f64 {
        FieldName::ALL.iter().map(|field| self.get(*field)).sum()
    }

    /// Reject negative or non-finite weights, then rescale to sum 1.0
    ///
    /// A zero sum is left untouched.
    pub fn normalized(mut self) -> Result<Self, MatchError> {
        for field in FieldName::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(MatchError::NonFiniteWeight { field });
            }
            if value < 0.0 {
                return Err(MatchError::NegativeWeight { field, value });
            }
        }

        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > SUM_TOLERANCE {
            for field in FieldName::ALL {
                self.set(field, self.get(field) / sum);
            }
        }

        Ok(self)
    }
}

/// Validated scoring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    weights: FieldWeights,
    threshold: u8,
    tokenizer: Tokenizer,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: defaults::THRESHOLD as u8,
            tokenizer: Tokenizer::default(),
        }
    }
}

impl MatchConfig {
    /// Validate weights and clamp the threshold into `0..=100`
    ///
    /// # Examples
    ///
    /// ```
    /// use affimatch_lib::matching::{FieldWeights, MatchConfig};
    ///
    /// let weights = FieldWeights { title: 2.0, description: 2.0, ..FieldWeights::zero() };
    /// let config = MatchConfig::new(weights, 150).unwrap();
    ///
    /// assert_eq!(config.weights().title, 0.5);
    /// assert_eq!(config.threshold(), 100);
    /// ```
    pub fn new(weights: FieldWeights, threshold: i64) -> Result<Self, MatchError> {
        let weights = weights.normalized()?;
        let clamped = threshold.clamp(0, 100);
        if clamped != threshold {
            tracing::debug!(threshold, clamped, "match threshold clamped");
        }

        Ok(Self {
            weights,
            threshold: clamped as u8,
            tokenizer: Tokenizer::default(),
        })
    }

    /// Same configuration with additional stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokenizer = self.tokenizer.with_extra_stopwords(words);
        self
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    pub fn weight(&self, field: FieldName) -> f64 {
        self.weights.get(field)
    }

    /// Minimum score (0-100) a candidate needs to be ranked
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
