//! Light response post-processing: contextual personalization and the
//! anti-repetition rule.
//!
//! Personalization only ever rewrites phrasing — it never changes which
//! response was selected. The anti-repetition step is the last thing
//! applied before a reply leaves the router, so the widget never shows
//! the same bot line twice in a row.

use rand::Rng;

use crate::dialogue::context::ConversationContext;
use crate::nlp::EntityBundle;

/// Shown instead of a third identical greeting/welcome line.
const REPEATED_GREETING: &str = "I see you're trying to ask something. Could you please be more \
                                 specific? I can help with our products, ordering process, \
                                 sustainability practices, and more.";

/// Appended when any other response would repeat verbatim.
const FOLLOW_ON_PROBE: &str = "Was there something specific about this you'd like to know?";

/// Personalize a literal matched response using extracted entities and
/// the session context.
///
/// Two rewrites, tried in order:
/// 1. product mentions are spliced into a generic "our products" phrase;
/// 2. occasionally (rng-gated), the visitor's recognized name is worked
///    into the first sentence boundary — skipped when the text already
///    addresses them by name.
pub fn personalize<R: Rng>(
    text: &str,
    entities: &EntityBundle,
    context: &ConversationContext,
    rng: &mut R,
) -> String {
    if !entities.products.is_empty() && text.contains("products") {
        let mentioned = entities.products.join(", ");
        return text.replace("our products", &format!("our {mentioned} products"));
    }

    if let Some(name) = &context.user_name {
        if !text.contains(name.as_str()) && rng.gen::<f64>() > 0.7 {
            return text.replacen(". ", &format!(". {name}, "), 1);
        }
    }

    text.to_owned()
}

/// Enforce the anti-repetition rule.
///
/// When the chosen text is byte-identical to the previous bot turn, a
/// repeated greeting/welcome collapses to a "be more specific" nudge and
/// anything else gets a short follow-on probe appended.
pub fn avoid_repetition(text: String, last_reply: Option<&str>) -> String {
    match last_reply {
        Some(previous) if previous == text => {
            if text.contains("Good") && text.contains("Welcome to Spindle Yarns") {
                REPEATED_GREETING.to_owned()
            } else {
                format!("{text} {FOLLOW_ON_PROBE}")
            }
        }
        _ => text,
    }
}
