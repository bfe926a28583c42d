//! E2E tests for loading affiliate feed fixtures

use affimatch_lib::catalog::{CatalogQuery, JsonCatalog, ProductRepository};
use affimatch_tests::{feed_path, load_feed, product_id};
use anyhow::Result;

#[test]
fn e2e_feed_field_aliases() -> Result<()> {
    let products = load_feed("electronics")?;
    assert_eq!(products.len(), 6);

    let case = products
        .iter()
        .find(|p| product_id(p) == Some("tradedoubler-77"))
        .unwrap();
    assert_eq!(case.merchant_name.as_deref(), Some("Zubehörwelt"));
    assert_eq!(case.categories, Some(vec!["Handyzubehör".to_string()]));
    assert_eq!(
        case.keywords,
        Some(vec!["smartphone".to_string(), "huelle".to_string()])
    );
    Ok(())
}

#[test]
fn e2e_feed_optional_fields() -> Result<()> {
    let products = load_feed("electronics")?;
    let bag = products
        .iter()
        .find(|p| product_id(p) == Some("adcell-6"))
        .unwrap();
    assert_eq!(bag.categories, Some(vec!["Zubehör".to_string()]));
    assert!(bag.keywords.is_none());

    let fashion = load_feed("fashion")?;
    let untitled = &fashion[3];
    assert!(untitled.title.is_none());
    assert_eq!(untitled.keywords, Some(Vec::new()));
    assert_eq!(untitled.label(), "(untitled)");
    Ok(())
}

#[test]
fn e2e_feed_extra_data_is_preserved() -> Result<()> {
    let products = load_feed("electronics")?;
    for product in &products {
        assert!(product_id(product).is_some());
        assert!(product.extra.get("price").and_then(|p| p.as_f64()).is_some());
        assert!(!product.extra.contains_key("tags"));
        assert!(!product.extra.contains_key("merchant"));
    }
    Ok(())
}

#[test]
fn e2e_repository_queries_keep_feed_order() -> Result<()> {
    let repository = JsonCatalog::new(feed_path("electronics"));

    let everything = repository.candidates(&CatalogQuery::all())?;
    let ids: Vec<_> = everything.iter().filter_map(product_id).collect();
    assert_eq!(
        ids,
        vec!["awin-1001", "awin-1002", "tradedoubler-77", "adcell-5", "adcell-6", "awin-2001"]
    );

    let searched = repository.candidates(&CatalogQuery::search("Smartphone Hülle"))?;
    let ids: Vec<_> = searched.iter().filter_map(product_id).collect();
    assert_eq!(ids, vec!["awin-1002", "tradedoubler-77"]);
    Ok(())
}
