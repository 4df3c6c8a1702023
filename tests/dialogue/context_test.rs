//! Tests for conversation context updates.

use spindle::dialogue::context::{ConversationContext, MAX_RECENT_TOPICS};

#[test]
fn recent_topics_never_exceed_cap_or_duplicate() {
    let mut context = ConversationContext::new();
    let topics = [
        "product", "price", "product", "shipping", "price", "order", "order", "contact",
    ];
    for topic in topics {
        context = context.with_topic(topic);
        assert!(context.recent_topics.len() <= MAX_RECENT_TOPICS);
        for (position, seen) in context.recent_topics.iter().enumerate() {
            assert!(
                !context.recent_topics[..position].contains(seen),
                "duplicate {seen} in {:?}",
                context.recent_topics
            );
        }
    }
    assert_eq!(context.last_topic.as_deref(), Some("contact"));
    assert_eq!(context.recent_topics[0], "contact");
}

#[test]
fn most_recent_topic_is_first() {
    let context = ConversationContext::new()
        .with_topic("price")
        .with_topic("shipping");
    assert_eq!(context.recent_topics, vec!["shipping", "price"]);
}

#[test]
fn user_name_survives_topic_updates() {
    let context = ConversationContext::new()
        .with_user_name("Priya")
        .with_topic("greeting")
        .with_topic("product");
    assert_eq!(context.user_name.as_deref(), Some("Priya"));
}

#[test]
fn message_count_saturates_instead_of_wrapping() {
    let mut context = ConversationContext::new();
    context.message_count = u32::MAX;
    context.record_message();
    assert_eq!(context.message_count, u32::MAX);
}

#[test]
fn context_round_trips_through_json() {
    let mut context = ConversationContext::new()
        .with_user_name("Mei")
        .with_topic("shipping")
        .with_topic("price");
    context.record_message();
    context.record_message();

    let encoded = serde_json::to_string(&context).expect("should serialize");
    let decoded: ConversationContext = serde_json::from_str(&encoded).expect("should deserialize");
    assert_eq!(decoded, context);
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let decoded: ConversationContext = serde_json::from_str("{}").expect("should deserialize");
    assert_eq!(decoded, ConversationContext::new());
}
