//! Tests for the ordered intent pattern bank.

use spindle::nlp::{Intent, IntentClassifier};

#[test]
fn classifies_each_category() {
    let classifier = IntentClassifier::new();
    let cases = [
        ("hello there", Intent::Greeting),
        ("good morning!", Intent::Greeting),
        ("bye for now", Intent::Farewell),
        ("what yarns do you have", Intent::Information),
        ("i'd like to buy some yarn", Intent::Purchase),
        ("damaged goods arrived", Intent::Complaint),
        ("thanks a lot", Intent::Gratitude),
        ("i'd like a refund", Intent::Cancellation),
        ("yes please", Intent::Confirmation),
        ("nah, never again", Intent::Negation),
        ("asdkjfh qwerty", Intent::General),
    ];
    for (input, expected) in cases {
        assert_eq!(classifier.classify(input), expected, "input {input:?}");
    }
}

#[test]
fn greeting_anchors_to_start_of_text() {
    let classifier = IntentClassifier::new();
    assert_eq!(classifier.classify("hey, quick question"), Intent::Greeting);
    // Mid-sentence "hey" does not greet; "tell me about" is information.
    assert_eq!(
        classifier.classify("so hey, tell me about yarn"),
        Intent::Information
    );
}

#[test]
fn category_order_breaks_overlaps() {
    let classifier = IntentClassifier::new();
    // "how much" sits in both information and purchase; information is
    // evaluated first and wins.
    assert_eq!(
        classifier.classify("how much is the cotton yarn"),
        Intent::Information
    );
    // "cancel my order": "order" hits purchase before cancellation's
    // "cancel" is ever consulted.
    assert_eq!(classifier.classify("cancel my order"), Intent::Purchase);
}

#[test]
fn total_and_deterministic() {
    let classifier = IntentClassifier::new();
    for input in ["", "    ", "💜", "ok ok ok", "no"] {
        let first = classifier.classify(input);
        let second = classifier.classify(input);
        assert_eq!(first, second, "unstable label for {input:?}");
    }
    assert_eq!(classifier.classify(""), Intent::General);
}

#[test]
fn case_insensitive() {
    let classifier = IntentClassifier::new();
    assert_eq!(classifier.classify("HELLO THERE"), Intent::Greeting);
    assert_eq!(classifier.classify("THANKS"), Intent::Gratitude);
}
