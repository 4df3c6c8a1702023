//! Coarse intent classification over raw utterances.
//!
//! An ordered bank of regex patterns, evaluated top to bottom against the
//! lowercased input; the first category with any matching pattern wins.
//! Category order is load-bearing — it decides ties between overlapping
//! patterns (e.g. "how much does it cost" is information, not purchase) —
//! so it must not be reordered.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Conversational purpose of a single utterance.
///
/// Exactly one label per utterance; [`Intent::General`] is the default
/// when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Opening salutation ("hi", "good morning").
    Greeting,
    /// Closing salutation ("bye", "see you").
    Farewell,
    /// Thanks and appreciation.
    Gratitude,
    /// Buying, ordering, or price interest.
    Purchase,
    /// Dissatisfaction or damage reports.
    Complaint,
    /// Cancelling, refunding, or returning.
    Cancellation,
    /// Agreement or verification.
    Confirmation,
    /// Disagreement or refusal.
    Negation,
    /// Questions and requests for explanation.
    Information,
    /// Anything that matched no pattern.
    General,
}

impl Intent {
    /// Stable lowercase label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Gratitude => "gratitude",
            Self::Purchase => "purchase",
            Self::Complaint => "complaint",
            Self::Cancellation => "cancellation",
            Self::Confirmation => "confirmation",
            Self::Negation => "negation",
            Self::Information => "information",
            Self::General => "general",
        }
    }
}

/// Ordered regex bank mapping raw text to an [`Intent`].
///
/// Patterns are compiled once at construction and evaluated in a fixed
/// category order on every call.
#[derive(Debug)]
pub struct IntentClassifier {
    categories: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    /// Compile the fixed pattern bank.
    pub fn new() -> Self {
        let categories = vec![
            (
                Intent::Greeting,
                compile(&[
                    r"^hi\b|^hello\b|^hey\b|^greetings\b|^good morning\b|^good afternoon\b|^good evening\b",
                ]),
            ),
            (
                Intent::Farewell,
                compile(&[r"^bye\b|^goodbye\b|^see you\b|^farewell\b|^have a good day\b"]),
            ),
            (
                Intent::Information,
                compile(&[
                    r"what|how|which|where|when|why|who|tell me about|can you explain|i need to know|i want to know",
                ]),
            ),
            (
                Intent::Purchase,
                compile(&[r"buy|purchase|order|shop|get|acquire|cost|price|how much|how many"]),
            ),
            (
                Intent::Complaint,
                compile(&[
                    r"complaint|issue|problem|not happy|dissatisfied|poor|bad|terrible|awful|damaged|wrong",
                ]),
            ),
            (
                Intent::Gratitude,
                compile(&[r"thanks|thank you|appreciate|grateful|helpful"]),
            ),
            (
                Intent::Cancellation,
                compile(&[r"cancel|refund|return|stop|don't want|changed my mind"]),
            ),
            (
                Intent::Confirmation,
                compile(&[r"confirm|verify|check|sure|right|correct|ok|yes|yep|yeah"]),
            ),
            (
                Intent::Negation,
                compile(&[r"no|nope|not|don't|none|never|negative"]),
            ),
        ];
        Self { categories }
    }

    /// Classify a raw utterance.
    ///
    /// Total and deterministic; repeated calls on the same input return
    /// the same label.
    pub fn classify(&self, text: &str) -> Intent {
        let lower = text.to_lowercase();
        for (intent, patterns) in &self.categories {
            if patterns.iter().any(|pattern| pattern.is_match(&lower)) {
                return *intent;
            }
        }
        Intent::General
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a pattern list, dropping any that fail to parse.
///
/// The bank is fixed at build time, so a dropped pattern is a programming
/// error surfaced by the classifier tests rather than a runtime panic.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
}
