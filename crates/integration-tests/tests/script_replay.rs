//! Integration tests for catalog and script files, loaded the way the
//! `product-page` binary loads them.

use std::io::Write;

use product_page_core::ReviewList;
use product_page_integration_tests::GREEN;
use product_page_storefront::{Catalog, PageError, ProductPage, catalog};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_replay_script_against_builtin_catalog() {
    let script = write_temp(
        r#"[
            {"action": "add_to_cart"},
            {"action": "select_variant", "index": 1},
            {"action": "add_to_cart"},
            {"action": "select_tab", "tab": "make_a_review"},
            {"action": "set_name", "name": "Ada"},
            {"action": "set_review_text", "text": "Lovely"},
            {"action": "set_rating", "rating": "5"},
            {"action": "submit_review"}
        ]"#,
    );

    let catalog = Catalog::builtin();
    let mut page = ProductPage::new(catalog.product, catalog.reviews, true);
    for action in catalog::load_script(script.path()).expect("script parses") {
        page.apply(action).expect("action applies");
    }

    assert_eq!(page.cart().entries(), &[GREEN]);
    assert_eq!(page.reviews().len(), 1);

    let html = page
        .render(std::path::Path::new("assets"))
        .expect("page renders");
    assert!(html.contains("Cart(1)"));
    assert!(html.contains("disabled-button"));
}

#[test]
fn test_catalog_file_seeds_reviews() {
    let file = write_temp(
        r#"{
            "product": {
                "product": "Socks",
                "brand": "Vue Mastery",
                "altText": "A pair of socks",
                "variants": [
                    {"variantId": 2234, "variantColor": "green",
                     "variantImage": "./vmSocks-green-onWhite.jpg", "variantQuantity": 10}
                ]
            },
            "reviews": [
                {"name": "Ada", "text": "Warm", "rating": 5},
                {"name": "Bo", "text": "Thin", "rating": 2}
            ]
        }"#,
    );

    let catalog = Catalog::load(file.path()).expect("catalog loads");
    let page = ProductPage::new(catalog.product, catalog.reviews, false);

    assert_eq!(page.reviews().len(), 2);
    let html = page
        .render(std::path::Path::new("static/img"))
        .expect("page renders");
    assert!(html.contains("static/img/vmSocks-green-onWhite.jpg"));
    assert!(html.contains("Thin"));
}

#[test]
fn test_invalid_script_is_json_error() {
    let script = write_temp(r#"[{"action": "dance"}]"#);
    let err = catalog::load_script(script.path()).expect_err("unknown action");
    assert!(matches!(err, PageError::Json { .. }));
}

#[test]
fn test_catalog_without_variants_is_rejected() {
    let file = write_temp(r#"{"product": {"name": "Socks", "brand": "Vue Mastery", "variants": []}}"#);
    let err = Catalog::load(file.path()).expect_err("no variants");
    assert!(matches!(err, PageError::Json { .. }));
}

#[test]
fn test_script_with_bad_index_stops_replay() {
    let script = write_temp(r#"[{"action": "select_variant", "index": 5}]"#);
    let mut page = ProductPage::new(catalog::socks(), ReviewList::new(), true);

    let result = catalog::load_script(script.path())
        .expect("script parses")
        .into_iter()
        .try_for_each(|action| page.apply(action));

    assert!(matches!(
        result,
        Err(PageError::VariantOutOfRange { index: 5, count: 2 })
    ));
}
