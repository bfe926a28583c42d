//! Shared catalog fixtures for tests and benchmarks

use crate::catalog::ProductRecord;

/// Small German catalog with known ranking for "laptop"
///
/// Ranked for "laptop" with default settings: 1, 4, 2, 3 (0 falls below
/// the threshold; 1 and 4 tie).
pub fn sample_catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord::titled("Kaffeemaschine").with_categories(["Küche"]),
        ProductRecord::titled("Gaming Laptop 17 Zoll")
            .with_description("Leistungsstarker Laptop")
            .with_categories(["Computer", "Laptops"]),
        ProductRecord::titled("Laptop")
            .with_categories(["Laptops"])
            .with_keywords(["laptop", "notebook"]),
        ProductRecord::titled("Laptoptasche").with_categories(["Zubehör"]),
        ProductRecord::titled("Gaming Laptop 17 Zoll")
            .with_description("Leistungsstarker Laptop")
            .with_categories(["Computer", "Laptops"]),
    ]
}

const NOUNS: [&str; 8] = [
    "Laptop",
    "Notebook",
    "Smartphone",
    "Kopfhörer",
    "Kaffeemaschine",
    "Monitor",
    "Tastatur",
    "Rucksack",
];

const ADJECTIVES: [&str; 6] = ["Gaming", "Kabelloser", "Kompakter", "Neuer", "Großer", "Leiser"];

const CATEGORIES: [&str; 5] = ["Computer", "Elektronik", "Küche", "Zubehör", "Audio"];

const MERCHANTS: [&str; 4] = ["TechShop", "Elektromarkt", "Haushalt24", "Outdoorwelt"];

/// Deterministic catalog of `size` varied products
pub fn synthetic_catalog(size: usize) -> Vec<ProductRecord> {
    (0..size)
        .map(|i| {
            let noun = NOUNS[i % NOUNS.len()];
            let adjective = ADJECTIVES[(i / NOUNS.len()) % ADJECTIVES.len()];
            let mut product = ProductRecord::titled(format!("{adjective} {noun} Modell {i}"))
                .with_merchant(MERCHANTS[i % MERCHANTS.len()])
                .with_categories([CATEGORIES[i % CATEGORIES.len()]]);

            if i % 2 == 0 {
                product = product.with_description(format!(
                    "Der {adjective} {noun} ist ideal für den Alltag und das Büro"
                ));
            }
            if i % 3 == 0 {
                product = product.with_keywords([noun.to_lowercase(), "angebot".to_string()]);
            }
            product
        })
        .collect()
}

/// Serialize products the way a JSON catalog file stores them
pub fn catalog_json(products: &[ProductRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}
