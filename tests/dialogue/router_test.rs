//! Tests for the dialogue router's ladder: intent short-circuits,
//! similarity matching, fallbacks, and context threading.

use std::sync::Arc;

use spindle::dialogue::{ConversationContext, Router};
use spindle::kb::{KnowledgeBase, KnowledgeEntry, Response, Template};

fn builtin_router() -> Router {
    Router::new(Arc::new(KnowledgeBase::load())).with_seed(1)
}

/// Minimal catalog for exercising the fallback ladder without the
/// built-in corpus soaking up the similarity score.
fn tiny_kb(with_greeting: bool) -> Arc<KnowledgeBase> {
    let mut entries = vec![
        KnowledgeEntry::new(
            "goodbye",
            &["bye"],
            Response::Literal("Bye for now.".to_owned()),
            &[],
        ),
        KnowledgeEntry::new(
            "thanks",
            &["thank"],
            Response::Literal("You're welcome.".to_owned()),
            &[],
        ),
        KnowledgeEntry::new(
            "cancellation",
            &["cancel"],
            Response::Literal("Reach our support desk to cancel your order.".to_owned()),
            &["What's your refund policy?"],
        ),
    ];
    if with_greeting {
        entries.push(KnowledgeEntry::new(
            "greeting",
            &["hi"],
            Response::Templated(Template::Greeting),
            &["What products do you offer?"],
        ));
    }
    Arc::new(KnowledgeBase::new(entries))
}

#[test]
fn greeting_intent_short_circuits() {
    let mut router = builtin_router();
    let reply = router.respond("hello", &ConversationContext::new(), None);

    assert!(reply.text.starts_with("Good"));
    assert!(reply.text.contains("Welcome to Spindle Yarns"));
    assert_eq!(reply.context.last_topic.as_deref(), Some("greeting"));
    let suggestions = reply.suggestions.expect("greeting sets suggestions");
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn farewell_and_gratitude_short_circuit() {
    let mut router = builtin_router();

    let reply = router.respond("goodbye", &ConversationContext::new(), None);
    assert_eq!(reply.context.last_topic.as_deref(), Some("goodbye"));
    assert!(reply.text.contains("Have a great day"));

    let reply = router.respond("thank you so much", &ConversationContext::new(), None);
    assert_eq!(reply.context.last_topic.as_deref(), Some("thanks"));
    assert!(reply.text.contains("You're welcome"));
}

#[test]
fn stored_name_reaches_the_greeting() {
    let mut router = builtin_router();
    let fresh = ConversationContext::new();

    let first = router.respond("my name is priya", &fresh, None);
    assert_eq!(first.context.user_name.as_deref(), Some("Priya"));

    let second = router.respond("hello", &first.context, Some(first.text.as_str()));
    assert!(
        second.text.contains("Priya"),
        "greeting should address the visitor: {}",
        second.text
    );
    assert!(second.text.contains("Welcome back"));
}

#[test]
fn garbled_cancellation_reaches_customer_service() {
    let mut router = builtin_router();
    let reply = router.respond(
        "I want to cancel my order, it's oredr #123",
        &ConversationContext::new(),
        None,
    );
    assert!(
        reply.text.contains("customer service"),
        "cancellation response must reference customer service: {}",
        reply.text
    );
}

#[test]
fn misspelling_fallback_forces_cancellation() {
    let mut router = Router::new(tiny_kb(true)).with_seed(1);
    let reply = router.respond("cncl pls", &ConversationContext::new(), None);
    assert_eq!(reply.context.last_topic.as_deref(), Some("cancellation"));
    assert!(reply.text.contains("support desk"));
    let suggestions = reply.suggestions.expect("forced topic sets suggestions");
    assert_eq!(suggestions.len(), 1);
}

#[test]
fn new_visitor_phrasing_gets_fixed_welcome() {
    let mut router = Router::new(tiny_kb(true)).with_seed(1);
    let reply = router.respond("i'm a new customer", &ConversationContext::new(), None);
    assert!(reply.text.starts_with("Welcome to Spindle Yarns!"));
    assert_eq!(reply.context.last_topic.as_deref(), Some("greeting"));
    assert!(reply.suggestions.is_none());
}

#[test]
fn gibberish_hits_final_fallback_and_keeps_suggestions() {
    let mut router = builtin_router();
    let reply = router.respond("asdkjfh qwerty", &ConversationContext::new(), None);
    assert!(reply.text.contains("I'm not sure I understand"));
    assert!(reply.suggestions.is_none(), "previous suggestions stay");
    assert!(reply.context.last_topic.is_none());
}

#[test]
fn duplicate_unmatched_turns_differ() {
    let mut router = builtin_router();
    let context = ConversationContext::new();

    let first = router.respond("asdkjfh qwerty", &context, None);
    let second = router.respond("asdkjfh qwerty", &first.context, Some(first.text.as_str()));

    assert_ne!(first.text, second.text);
    assert!(second.text.contains("Was there something specific"));
}

#[test]
fn similarity_selects_the_product_topic() {
    let mut router = builtin_router();
    let reply = router.respond(
        "tell me about your yarn collection and product variety",
        &ConversationContext::new(),
        None,
    );
    assert_eq!(reply.context.last_topic.as_deref(), Some("product"));
    assert!(reply.suggestions.is_some());
}

#[test]
fn missing_anchor_topic_degrades_softly() {
    let mut router = Router::new(tiny_kb(false)).with_seed(1);
    let reply = router.respond("hello", &ConversationContext::new(), None);
    assert!(reply.text.contains("I'm not sure I have information about that"));
    assert!(reply.context.last_topic.is_none());
}

#[test]
fn threshold_override_disables_matching() {
    let mut router = Router::new(Arc::new(KnowledgeBase::load()))
        .with_seed(1)
        .with_threshold(1.1);
    let reply = router.respond("What products do you offer?", &ConversationContext::new(), None);
    assert!(reply.text.contains("I'm not sure I understand"));
}

#[test]
fn empty_input_is_handled() {
    let mut router = builtin_router();
    let reply = router.respond("", &ConversationContext::new(), None);
    assert!(reply.text.contains("I'm not sure I understand"));
}

#[test]
fn rank_is_sorted_and_bounded() {
    let router = builtin_router();
    let ranking = router.rank("organic cotton yarn");
    assert!(!ranking.is_empty());
    for window in ranking.windows(2) {
        assert!(window[0].score >= window[1].score, "ranking not sorted");
    }
    for result in &ranking {
        assert!((0.0..=1.0).contains(&result.score));
    }
    let best = &ranking[0];
    assert!(best.score > 0.0);
}

#[test]
fn caller_context_is_not_mutated() {
    let mut router = builtin_router();
    let context = ConversationContext::new().with_topic("price");
    let before = context.clone();
    let _reply = router.respond("hello", &context, None);
    assert_eq!(context, before);
}

#[test]
fn name_patterns_apply_in_order() {
    let mut router = builtin_router();
    let reply = router.respond("call me Asha", &ConversationContext::new(), None);
    assert_eq!(reply.context.user_name.as_deref(), Some("Asha"));
}
