//! Tests for response personalization and anti-repetition.

use rand::rngs::StdRng;
use rand::SeedableRng;

use spindle::dialogue::personalize::{avoid_repetition, personalize};
use spindle::dialogue::ConversationContext;
use spindle::nlp::EntityBundle;

fn products(terms: &[&str]) -> EntityBundle {
    EntityBundle {
        products: terms.iter().map(|t| (*t).to_owned()).collect(),
        ..EntityBundle::default()
    }
}

#[test]
fn product_substitution_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(0);
    let out = personalize(
        "Browse our products for details.",
        &products(&["cotton", "vortex"]),
        &ConversationContext::new(),
        &mut rng,
    );
    assert_eq!(out, "Browse our cotton, vortex products for details.");
}

#[test]
fn product_substitution_outranks_name_address() {
    let mut rng = StdRng::seed_from_u64(0);
    let context = ConversationContext::new().with_user_name("Priya");
    let out = personalize(
        "See our products. More online.",
        &products(&["organic"]),
        &context,
        &mut rng,
    );
    // Product branch returns first; the name is never inserted.
    assert_eq!(out, "See our organic products. More online.");
}

#[test]
fn name_address_either_applies_or_leaves_text_alone() {
    let text = "Our pricing varies. Contact sales for a quote.";
    let context = ConversationContext::new().with_user_name("Priya");
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = personalize(text, &EntityBundle::default(), &context, &mut rng);
        assert!(
            out == text || out.contains("Priya, "),
            "unexpected rewrite: {out}"
        );
    }
}

#[test]
fn name_address_skipped_when_already_present() {
    let text = "Good morning, Priya! Welcome back. How can I help?";
    let context = ConversationContext::new().with_user_name("Priya");
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = personalize(text, &EntityBundle::default(), &context, &mut rng);
        assert_eq!(out, text);
    }
}

#[test]
fn no_rewrites_without_entities_or_name() {
    let text = "We offer a 30-day return policy.";
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = personalize(
            text,
            &EntityBundle::default(),
            &ConversationContext::new(),
            &mut rng,
        );
        assert_eq!(out, text);
    }
}

#[test]
fn identical_reply_is_rewritten() {
    let text = "I'm not sure I understand.".to_owned();
    let out = avoid_repetition(text.clone(), Some(text.as_str()));
    assert_ne!(out, text);
    assert!(out.starts_with(&text));
}

#[test]
fn distinct_reply_is_untouched() {
    let out = avoid_repetition("fresh answer".to_owned(), Some("older answer"));
    assert_eq!(out, "fresh answer");
}
