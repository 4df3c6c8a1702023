//! The dialogue router: one call per user turn.
//!
//! Orchestrates name extraction, intent classification, entity
//! extraction, similarity ranking over the knowledge base, and the
//! fallback ladder. Reads the caller's [`ConversationContext`] and
//! returns an updated copy; the knowledge base is only ever read.
//!
//! Response templates render against the context as it stood at the
//! start of the turn (plus any name recognized in the same message), not
//! against the post-turn topic history — asking "how are you" twice is
//! what flips the self-description variant, not the first ask itself.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use tracing::debug;

use crate::dialogue::context::ConversationContext;
use crate::dialogue::personalize::{avoid_repetition, personalize};
use crate::kb::KnowledgeBase;
use crate::nlp::similarity::similarity_tokens;
use crate::nlp::tokenizer::tokenize;
use crate::nlp::{EntityExtractor, Intent, IntentClassifier};

/// Minimum similarity score (exclusive) for a topic match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.15;

/// Returned when a similarity-selected topic has no response entry.
/// A catalog in that state is warned about at load time, but the router
/// must degrade rather than fail.
const MISSING_TOPIC_FALLBACK: &str =
    "I'm not sure I have information about that. Could you please ask something else?";

/// Fixed welcome for visitors who introduce themselves as new.
const NEW_VISITOR_WELCOME: &str = "Welcome to Spindle Yarns! We're a leading manufacturer of \
                                   high-quality yarns with a focus on sustainability. How can I \
                                   help you today?";

/// Final fallback when nothing else applied.
const DEFAULT_FALLBACK: &str = "I'm not sure I understand. Could you please rephrase your \
                                question? I can help with information about our products, \
                                sustainability practices, ordering process, or company \
                                information.";

/// Similarity score for one topic, computed fresh each turn.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Topic key of the scored entry.
    pub topic: String,
    /// Cosine similarity against the turn's utterance, in `[0, 1]`.
    pub score: f64,
}

/// One turn's outcome.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Response text to show.
    pub text: String,
    /// Updated session context; replaces the caller's copy.
    pub context: ConversationContext,
    /// New follow-up suggestions, or `None` to keep the previous ones.
    pub suggestions: Option<Vec<String>>,
}

/// Per-process dialogue router over a shared knowledge base.
pub struct Router {
    kb: Arc<KnowledgeBase>,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    name_patterns: Vec<Regex>,
    new_visitor_patterns: Vec<Regex>,
    misspelling_patterns: Vec<Regex>,
    threshold: f64,
    rng: StdRng,
}

impl Router {
    /// Create a router with the default similarity threshold.
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            classifier: IntentClassifier::new(),
            extractor: EntityExtractor::new(),
            name_patterns: compile(&[
                r"(?i)my name is (\w+)",
                r"(?i)i am (\w+)",
                r"(?i)i'm (\w+)",
                r"(?i)call me (\w+)",
                r"(?i)(\w+) here",
            ]),
            new_visitor_patterns: compile(&[
                r"(?i)first time",
                r"(?i)new here",
                r"(?i)never (been|visited|ordered) before",
                r"(?i)new customer",
            ]),
            misspelling_patterns: compile(&[r"(?i)canc|cncl|cansl|ordr|orer|oredr"]),
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            rng: StdRng::from_entropy(),
        }
    }

    /// Override the similarity threshold (configuration hook).
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Seed the personalization rng, for reproducible tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Produce the reply for one user turn.
    ///
    /// `last_reply` is the previous bot turn's text, used by the
    /// anti-repetition rule; pass `None` on the first turn. Total: any
    /// input string, including empty, yields a reply.
    pub fn respond(
        &mut self,
        input: &str,
        context: &ConversationContext,
        last_reply: Option<&str>,
    ) -> Reply {
        let (text, updated, suggestions) = self.route(input, context);
        Reply {
            text: avoid_repetition(text, last_reply),
            context: updated,
            suggestions,
        }
    }

    /// Rank every knowledge entry against the utterance, best first.
    ///
    /// Equal scores keep catalog order.
    pub fn rank(&self, input: &str) -> Vec<MatchResult> {
        let query = tokenize(input);
        let mut scores: Vec<MatchResult> = self
            .kb
            .entries()
            .iter()
            .map(|entry| MatchResult {
                topic: entry.topic.clone(),
                score: similarity_tokens(&query, entry.tokens()),
            })
            .collect();
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scores
    }

    /// The routing ladder; returns (text, updated context, suggestions).
    fn route(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> (String, ConversationContext, Option<Vec<String>>) {
        // 1. Name recognition — overwrites any earlier name.
        let mut context = context.clone();
        if let Some(name) = self.extract_user_name(input) {
            debug!(name = %name, "recognized user name");
            context.user_name = Some(name);
        }

        // 2. Intent and entities. Entities feed personalization below and
        // are logged either way.
        let intent = self.classifier.classify(input);
        let entities = self.extractor.extract(input);
        debug!(intent = intent.as_str(), entities = ?entities, "turn analyzed");

        // 3. Social intents bypass similarity matching entirely.
        let anchor = match intent {
            Intent::Greeting => Some("greeting"),
            Intent::Farewell => Some("goodbye"),
            Intent::Gratitude => Some("thanks"),
            _ => None,
        };
        if let Some(topic) = anchor {
            return self.canned_reply(topic, &context);
        }

        // 4. Similarity ranking over the whole catalog.
        let ranking = self.rank(input);
        if let Some(best) = ranking.first() {
            debug!(topic = %best.topic, score = best.score, "best similarity match");
            if best.score > self.threshold {
                let updated = context.with_topic(&best.topic);
                return match self.kb.get(&best.topic) {
                    Some(entry) => {
                        let resolved = entry.response.resolve(&context);
                        let text = personalize(&resolved, &entities, &context, &mut self.rng);
                        (text, updated, Some(entry.follow_ups.clone()))
                    }
                    // Topic exists in the similarity corpus but not the
                    // response table; degrade instead of failing.
                    None => (MISSING_TOPIC_FALLBACK.to_owned(), updated, None),
                };
            }
        }

        // 5. Second chance for garbled cancellation/order phrasings.
        let lower = input.to_lowercase();
        if self
            .misspelling_patterns
            .iter()
            .any(|pattern| pattern.is_match(&lower))
        {
            debug!("misspelling fallback selected cancellation");
            return self.canned_reply("cancellation", &context);
        }

        // 6. Visitors announcing themselves as new get the fixed welcome.
        if self
            .new_visitor_patterns
            .iter()
            .any(|pattern| pattern.is_match(input))
        {
            let updated = context.with_topic("greeting");
            return (NEW_VISITOR_WELCOME.to_owned(), updated, None);
        }

        // 7. Nothing applied; suggestions stay as they were.
        (DEFAULT_FALLBACK.to_owned(), context, None)
    }

    /// Reply directly with a named topic's canned response.
    ///
    /// Templates render against the pre-update context, so the topic
    /// being selected this turn is not yet part of the history they see.
    fn canned_reply(
        &self,
        topic: &str,
        context: &ConversationContext,
    ) -> (String, ConversationContext, Option<Vec<String>>) {
        match self.kb.get(topic) {
            Some(entry) => {
                let text = entry.response.resolve(context);
                let updated = context.with_topic(topic);
                (text, updated, Some(entry.follow_ups.clone()))
            }
            None => (MISSING_TOPIC_FALLBACK.to_owned(), context.clone(), None),
        }
    }

    /// First matching name pattern wins; the captured word is
    /// capitalized before storing.
    fn extract_user_name(&self, input: &str) -> Option<String> {
        for pattern in &self.name_patterns {
            if let Some(captures) = pattern.captures(input) {
                if let Some(word) = captures.get(1) {
                    return Some(capitalize(word.as_str()));
                }
            }
        }
        None
    }
}

/// Uppercase the first character, keep the rest as typed.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compile a fixed pattern list, dropping any that fail to parse.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
}
