use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        ProductRecord::titled("Gaming Laptop 15 Zoll")
            .with_description("Schneller Laptop für Spieler")
            .with_merchant("Elektro Müller")
            .with_categories(["Elektronik", "Computer"]),
        ProductRecord::titled("Sommerkleid rot")
            .with_merchant("ModeHaus")
            .with_categories(["Damenmode"]),
        ProductRecord::titled("Laptoptasche")
            .with_merchant("Taschen & Co")
            .with_categories(["Zubehör"]),
    ])
}

// ============================================================================
// Deserialization Tests
// ============================================================================

#[test]
fn test_keywords_from_list() {
    let product: ProductRecord =
        serde_json::from_str(r#"{"title": "Phone", "keywords": ["smartphone", "zubehoer"]}"#)
            .unwrap();
    assert_eq!(
        product.keywords,
        Some(vec!["smartphone".to_string(), "zubehoer".to_string()])
    );
}

#[test]
fn test_keywords_from_comma_string() {
    let product: ProductRecord =
        serde_json::from_str(r#"{"keywords": "smartphone, zubehoer ,, huelle"}"#).unwrap();
    assert_eq!(
        product.keywords,
        Some(vec![
            "smartphone".to_string(),
            "zubehoer".to_string(),
            "huelle".to_string()
        ])
    );
}

#[test]
fn test_tags_alias_and_single_category() {
    let product: ProductRecord =
        serde_json::from_str(r#"{"tags": "a,b", "category": "Elektronik", "merchant": "Shop"}"#)
            .unwrap();
    assert_eq!(product.keywords.map(|k| k.len()), Some(2));
    assert_eq!(product.categories, Some(vec!["Elektronik".to_string()]));
    assert_eq!(product.merchant_name.as_deref(), Some("Shop"));
}

#[test]
fn test_missing_and_null_fields() {
    let product: ProductRecord =
        serde_json::from_str(r#"{"title": null, "keywords": null}"#).unwrap();
    assert_eq!(product.title, None);
    assert_eq!(product.keywords, None);
    assert_eq!(product.categories, None);
}

#[test]
fn test_unknown_fields_kept_in_extra() {
    let product: ProductRecord = serde_json::from_str(
        r#"{"title": "Laptop", "price": 499.99, "provider": "awin", "image_url": "https://example.com/a.png"}"#,
    )
    .unwrap();
    assert_eq!(product.extra.get("provider"), Some(&Value::from("awin")));
    assert_eq!(product.extra.len(), 3);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["price"], Value::from(499.99));
    assert!(json.get("description").is_none());
}

#[test]
fn test_split_keywords() {
    assert_eq!(split_keywords("a, b"), vec!["a", "b"]);
    assert!(split_keywords("").is_empty());
    assert!(split_keywords(" , ,").is_empty());
}

#[test]
fn test_label_falls_back() {
    assert_eq!(ProductRecord::titled("X").label(), "X");
    assert_eq!(ProductRecord::default().label(), "(untitled)");
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_all_query_preserves_order() {
    let catalog = sample_catalog();
    let candidates = catalog.candidates(&CatalogQuery::all()).unwrap();
    assert_eq!(candidates, catalog.products());
}

#[test]
fn test_category_filter_is_normalized() {
    let catalog = sample_catalog();
    let candidates = catalog
        .candidates(&CatalogQuery::all().in_category("ZUBEHÖR"))
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].label(), "Laptoptasche");
}

#[test]
fn test_merchant_filter() {
    let catalog = sample_catalog();
    let candidates = catalog
        .candidates(&CatalogQuery::all().from_merchant("müller"))
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].label(), "Gaming Laptop 15 Zoll");
}

#[test]
fn test_search_prefilter_matches_title_or_description() {
    let catalog = sample_catalog();
    let candidates = catalog.candidates(&CatalogQuery::search("Laptop")).unwrap();
    let labels: Vec<&str> = candidates.iter().map(ProductRecord::label).collect();
    assert_eq!(labels, vec!["Gaming Laptop 15 Zoll", "Laptoptasche"]);
}

#[test]
fn test_search_of_only_stopwords_keeps_everything() {
    let catalog = sample_catalog();
    let candidates = catalog.candidates(&CatalogQuery::search("und die")).unwrap();
    assert_eq!(candidates.len(), 3);
}

#[test]
fn test_combined_filters() {
    let catalog = sample_catalog();
    let query = CatalogQuery::search("laptop").in_category("elektronik");
    let candidates = catalog.candidates(&query).unwrap();
    assert_eq!(candidates.len(), 1);
}

#[test]
fn test_get_out_of_range() {
    let catalog = sample_catalog();
    assert!(catalog.get(2).is_ok());
    match catalog.get(3) {
        Err(CatalogError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// JSON File Tests
// ============================================================================

#[test]
fn test_json_catalog_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"title": "Smartphone X", "keywords": "smartphone,zubehoer"}}, {{"title": "Kabel"}}]"#
    )
    .unwrap();

    let catalog = JsonCatalog::new(file.path());
    let loaded = catalog.load().unwrap();
    assert_eq!(loaded.len(), 2);

    let candidates = catalog.candidates(&CatalogQuery::search("kabel")).unwrap();
    assert_eq!(candidates.len(), 1);
}

#[test]
fn test_json_catalog_missing_file() {
    let catalog = JsonCatalog::new("/definitely/not/here.json");
    assert!(matches!(catalog.load(), Err(CatalogError::Read { .. })));
}

#[test]
fn test_json_catalog_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"title": "not an array"}}"#).unwrap();

    let err = JsonCatalog::new(file.path()).load().unwrap_err();
    assert!(matches!(err, CatalogError::Decode { .. }));
    assert!(err.to_string().contains("Failed to decode catalog"));
}
