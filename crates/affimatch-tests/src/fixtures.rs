//! Fixture infrastructure for E2E tests
//!
//! Feed fixtures are JSON catalogs shaped like real affiliate network
//! exports: mixed field aliases, comma-separated tags, extra provider data.

use affimatch_lib::catalog::{JsonCatalog, ProductRecord};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Absolute path of a file under `fixtures/`
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative)
}

/// Path of a feed fixture by name (without extension)
pub fn feed_path(name: &str) -> PathBuf {
    fixture_path(&format!("feeds/{name}.json"))
}

/// Path of a TOML config fixture by name (without extension)
pub fn config_path(name: &str) -> PathBuf {
    fixture_path(&format!("config/{name}.toml"))
}

/// Load a feed fixture through the JSON catalog adapter
pub fn load_feed(name: &str) -> Result<Vec<ProductRecord>> {
    let catalog = JsonCatalog::new(feed_path(name))
        .load()
        .with_context(|| format!("Failed to load feed fixture '{name}'"))?;
    Ok(catalog.products().to_vec())
}

/// Provider id carried through in a product's extra data
pub fn product_id(product: &ProductRecord) -> Option<&str> {
    product.extra.get("id").and_then(|id| id.as_str())
}
