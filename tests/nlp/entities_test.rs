//! Tests for regex entity extraction.

use spindle::nlp::EntityExtractor;

#[test]
fn number_with_unit_is_one_entity() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("please quote 500 kg of cotton");
    assert!(bundle.numbers.contains(&"500 kg".to_owned()));
}

#[test]
fn bare_numbers_extracted_in_order() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("order #123 placed, invoice 456");
    assert_eq!(bundle.numbers, vec!["123".to_owned(), "456".to_owned()]);
}

#[test]
fn decimal_quantities_supported() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("roughly 2.5 mm thickness");
    assert!(bundle.numbers.contains(&"2.5 mm".to_owned()));
}

#[test]
fn numeric_date_forms() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("delivered 12/03/2024 or 1-4-24");
    assert!(bundle.dates.contains(&"12/03/2024".to_owned()));
    assert!(bundle.dates.contains(&"1-4-24".to_owned()));
}

#[test]
fn textual_date_forms() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("expected 21st June, shipped 3 Feb 2024");
    assert!(bundle.dates.iter().any(|d| d.starts_with("21st")));
    assert!(bundle.dates.iter().any(|d| d.starts_with("3 Feb")));
}

#[test]
fn multiword_product_terms_detected() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("do you make ring spun or open end yarns?");
    assert!(bundle.products.contains(&"ring spun".to_owned()));
    assert!(bundle.products.contains(&"open end".to_owned()));
}

#[test]
fn detectors_are_independent() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("30 kg organic cotton to Karur by 5/6/2024");
    assert!(!bundle.numbers.is_empty());
    assert!(!bundle.dates.is_empty());
    assert!(bundle.products.contains(&"organic".to_owned()));
    assert!(bundle.products.contains(&"cotton".to_owned()));
    assert_eq!(bundle.locations, vec!["karur".to_owned()]);
}

#[test]
fn no_entities_is_a_normal_outcome() {
    let extractor = EntityExtractor::new();
    let bundle = extractor.extract("tell me more please");
    assert!(bundle.is_empty());
}
