//! Tests for term-frequency cosine similarity.

use spindle::nlp::{similarity, similarity_tokens, tokenize};

#[test]
fn bounded_between_zero_and_one() {
    let pairs = [
        ("cotton yarn", "cotton yarn"),
        ("cotton yarn", "polyester blends"),
        ("how much does shipping cost", "shipping rates and delivery"),
        ("", "yarn"),
        ("the of and", "the of and"),
        ("asdkjfh qwerty", "zxcvb mnbvc"),
    ];
    for (a, b) in pairs {
        let score = similarity(a, b);
        assert!((0.0..=1.0).contains(&score), "{a:?} vs {b:?} gave {score}");
    }
}

#[test]
fn symmetric_for_arbitrary_pairs() {
    let pairs = [
        ("organic cotton pricing", "price of organic yarns"),
        ("cancel my order", "order cancellation policy"),
        ("hello", "goodbye"),
    ];
    for (a, b) in pairs {
        assert!(
            (similarity(a, b) - similarity(b, a)).abs() < 1e-12,
            "asymmetric for {a:?} / {b:?}"
        );
    }
}

#[test]
fn self_similarity_is_maximal() {
    for text in [
        "recycled polyester yarn",
        "what is your return policy",
        "Ne 40 combed cotton",
    ] {
        let score = similarity(text, text);
        assert!((score - 1.0).abs() < 1e-9, "{text:?} gave {score}");
    }
}

#[test]
fn empty_or_stopword_only_side_scores_zero() {
    assert_eq!(similarity("", "anything"), 0.0);
    assert_eq!(similarity("anything", ""), 0.0);
    assert_eq!(similarity("the and of to", "cotton yarn"), 0.0);
}

#[test]
fn shared_vocabulary_scores_higher_than_disjoint() {
    let query = "price of cotton yarn";
    let related = similarity(query, "cotton yarn pricing and discounts");
    let unrelated = similarity(query, "factory visit appointment schedule");
    assert!(related > unrelated);
}

#[test]
fn token_level_entry_point_matches_text_level() {
    let a = "organic cotton yarn counts";
    let b = "cotton yarn pricing";
    let via_tokens = similarity_tokens(&tokenize(a), &tokenize(b));
    assert!((similarity(a, b) - via_tokens).abs() < 1e-12);
}

#[test]
fn repeated_terms_weigh_into_the_score() {
    // Same vocabulary, different frequencies: still similar but not
    // identical vectors.
    let score = similarity("cotton cotton cotton yarn", "cotton yarn yarn yarn");
    assert!(score > 0.0 && score < 1.0);
}
