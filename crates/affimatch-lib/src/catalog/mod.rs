//! Product catalog access
//!
//! The matcher never touches storage itself. A [`ProductRepository`] hands it
//! an ordered candidate list for a [`CatalogQuery`]; repository order is the
//! catalog priority that breaks ranking ties.
//!
//! [`ProductRecord`] is also where loosely-typed feed data gets tightened:
//! `keywords` may arrive as one comma-separated string and is split here,
//! before anything reaches the scorer.

use crate::matching::{Tokenizer, normalize};
use crate::primitives::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A locally stored affiliate product
///
/// Every scored field is optional. Anything else in the feed (ids, prices,
/// image URLs, provider names) is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, alias = "merchant", skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    #[serde(
        default,
        alias = "category",
        deserialize_with = "deserialize_categories",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Vec<String>>,

    #[serde(
        default,
        alias = "tags",
        deserialize_with = "deserialize_keywords",
        skip_serializing_if = "Option::is_none"
    )]
    pub keywords: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRecord {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Display label for result listings
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

/// Split a comma-separated keyword string, dropping blank entries
///
/// # Examples
///
/// ```
/// use affimatch_lib::catalog::split_keywords;
///
/// assert_eq!(split_keywords("smartphone, zubehoer,,  "), vec!["smartphone", "zubehoer"]);
/// ```
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|raw| match raw {
            OneOrMany::One(joined) => split_keywords(&joined),
            OneOrMany::Many(list) => list,
        }),
    )
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<OneOrMany>::deserialize(deserializer)?.map(|raw| match raw {
            OneOrMany::One(single) => vec![single],
            OneOrMany::Many(list) => list,
        }),
    )
}

/// Candidate selection for one lookup
///
/// Every filter is optional; text is compared in normalized form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Keep products whose title or description contains a search token
    pub search: Option<String>,
    /// Keep products with a category containing this text
    pub category: Option<String>,
    /// Keep products whose merchant name contains this text
    pub merchant: Option<String>,
}

impl CatalogQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn from_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Compile the query once so filtering does not re-normalize per product
    fn compile(&self) -> CompiledQuery {
        let filter = |value: &Option<String>| {
            value
                .as_deref()
                .map(normalize)
                .filter(|normalized| !normalized.is_empty())
        };

        let search_tokens = self
            .search
            .as_deref()
            .map(|text| {
                let normalized = normalize(text);
                Tokenizer::builtin()
                    .tokenize(&normalized)
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        CompiledQuery {
            search_tokens,
            category: filter(&self.category),
            merchant: filter(&self.merchant),
        }
    }
}

struct CompiledQuery {
    search_tokens: Vec<String>,
    category: Option<String>,
    merchant: Option<String>,
}

impl CompiledQuery {
    fn matches(&self, product: &ProductRecord) -> bool {
        if let Some(category) = &self.category {
            let hit = product
                .categories
                .iter()
                .flatten()
                .any(|c| normalize(c).contains(category.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(merchant) = &self.merchant {
            let hit = product
                .merchant_name
                .as_deref()
                .is_some_and(|m| normalize(m).contains(merchant.as_str()));
            if !hit {
                return false;
            }
        }

        if !self.search_tokens.is_empty() {
            let haystacks: Vec<String> = [&product.title, &product.description]
                .into_iter()
                .flatten()
                .map(|text| normalize(text))
                .collect();
            let hit = self
                .search_tokens
                .iter()
                .any(|token| haystacks.iter().any(|h| h.contains(token.as_str())));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Source of ranking candidates
pub trait ProductRepository {
    /// Candidates for `query`, in catalog priority order
    fn candidates(&self, query: &CatalogQuery) -> Result<Vec<ProductRecord>, CatalogError>;
}

/// Repository over products already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<ProductRecord>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at catalog position `index`
    pub fn get(&self, index: usize) -> Result<&ProductRecord, CatalogError> {
        self.products.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.products.len(),
        })
    }
}

impl ProductRepository for InMemoryCatalog {
    fn candidates(&self, query: &CatalogQuery) -> Result<Vec<ProductRecord>, CatalogError> {
        let compiled = query.compile();
        let selected: Vec<ProductRecord> = self
            .products
            .iter()
            .filter(|product| compiled.matches(product))
            .cloned()
            .collect();

        tracing::debug!(
            total = self.products.len(),
            selected = selected.len(),
            "catalog candidates selected"
        );

        Ok(selected)
    }
}

/// Repository backed by a JSON array of products on disk
///
/// The file is read on every lookup so edits to the feed are picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole feed
    pub fn load(&self) -> Result<InMemoryCatalog, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;

        let products: Vec<ProductRecord> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Decode {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            products = products.len(),
            "catalog loaded"
        );

        Ok(InMemoryCatalog::new(products))
    }
}

impl ProductRepository for JsonCatalog {
    fn candidates(&self, query: &CatalogQuery) -> Result<Vec<ProductRecord>, CatalogError> {
        self.load()?.candidates(query)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
