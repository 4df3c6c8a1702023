//! Knowledge base index: the static topic catalog the router matches
//! against.
//!
//! Entries are loaded once at startup from the built-in catalog
//! ([`catalog`]), their matching text is tokenized exactly once and
//! cached, and nothing is mutated afterwards — the index is safe to share
//! across sessions. Load-time validation surfaces catalog
//! inconsistencies (duplicate topics, entries whose matching text
//! tokenizes to nothing, missing intent-anchor topics) as warnings, never
//! as errors: a degraded catalog still answers.

use std::fmt;

use chrono::Timelike;
use tracing::warn;

use crate::dialogue::context::ConversationContext;
use crate::nlp::tokenize;

pub mod catalog;

/// Topics the router addresses directly (intent short-circuits and the
/// misspelling second chance). Validation warns when any is missing.
pub const ANCHOR_TOPICS: &[&str] = &["greeting", "goodbye", "thanks", "cancellation"];

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A canned response: either a fixed string or a template rendered from
/// the conversation context.
///
/// The router never branches on the variant; it always goes through
/// [`Response::resolve`].
#[derive(Debug, Clone)]
pub enum Response {
    /// Fixed response text.
    Literal(String),
    /// Context-dependent response.
    Templated(Template),
}

impl Response {
    /// Render the response for the given context.
    pub fn resolve(&self, context: &ConversationContext) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Templated(template) => template.render(context),
        }
    }

    /// Text standing in for this response in the similarity corpus.
    ///
    /// Literal responses represent themselves; templates expose a fixed
    /// representative so the cached index never depends on context.
    pub fn representative(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Templated(template) => template.representative(),
        }
    }
}

/// Closed set of context-dependent response templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Salutation varying by time of day, recognized name, and whether
    /// the visitor has been chatting for a while.
    Greeting,
    /// Self-description varying with whether the visitor just asked the
    /// same thing.
    AboutAssistant,
}

impl Template {
    /// Render against the context carried into the current turn.
    pub fn render(self, context: &ConversationContext) -> String {
        match self {
            Self::Greeting => {
                let time = time_of_day(chrono::Local::now().hour());
                if let Some(name) = &context.user_name {
                    format!("{time}, {name}! Welcome back to Spindle Yarns. How can I assist you today?")
                } else if context.message_count > 5 {
                    format!("{time}! Great to see you again. What can I help you with today?")
                } else {
                    format!("{time}! Welcome to Spindle Yarns. How can I assist you today with our yarn products or services?")
                }
            }
            Self::AboutAssistant => {
                if context.recent_topics.iter().any(|t| t == "general") {
                    "I'm doing well, thanks for asking! I'm an assistant here to help you with \
                     information about Spindle Yarns' products and services. Is there something \
                     specific you'd like to know about our yarns?"
                        .to_owned()
                } else {
                    "I'm the Spindle Yarns assistant, here to provide information about our \
                     yarns and services and to answer any questions you might have. I'm \
                     functioning perfectly and ready to assist you!"
                        .to_owned()
                }
            }
        }
    }

    /// Context-free stand-in text used when indexing the entry.
    pub fn representative(self) -> &'static str {
        match self {
            Self::Greeting => {
                "Welcome to Spindle Yarns. How can I assist you today with our yarn products or services?"
            }
            Self::AboutAssistant => {
                "I'm the Spindle Yarns assistant, here to provide information about our yarns \
                 and services and to answer any questions you might have."
            }
        }
    }
}

/// Salutation prefix for the local hour.
pub fn time_of_day(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One static unit of canned domain knowledge.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    /// Unique topic key.
    pub topic: String,
    /// Seed terms for similarity matching.
    pub keywords: Vec<String>,
    /// Extra matching-only text indexed alongside keywords and response.
    pub detail: Option<String>,
    /// The canned or templated response.
    pub response: Response,
    /// Suggested follow-up questions, in display order.
    pub follow_ups: Vec<String>,
    /// Originating site page, informational only.
    pub page: Option<String>,
    /// Cached normalized tokens; computed once at load, never after.
    tokens: Vec<String>,
}

impl KnowledgeEntry {
    /// Create an entry. Tokens are cached when the entry joins a
    /// [`KnowledgeBase`].
    pub fn new(topic: &str, keywords: &[&str], response: Response, follow_ups: &[&str]) -> Self {
        Self {
            topic: topic.to_owned(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
            detail: None,
            response,
            follow_ups: follow_ups.iter().map(|q| (*q).to_owned()).collect(),
            page: None,
            tokens: Vec::new(),
        }
    }

    /// Attach extra matching-only text.
    #[must_use]
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_owned());
        self
    }

    /// Record the originating page label.
    #[must_use]
    pub fn with_page(mut self, page: &str) -> Self {
        self.page = Some(page.to_owned());
        self
    }

    /// Cached normalized tokens of the entry's combined matching text.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Combined matching text: keywords, detail, representative response.
    fn matching_text(&self) -> String {
        let mut parts: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        if let Some(detail) = &self.detail {
            parts.push(detail);
        }
        parts.push(self.response.representative());
        parts.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// Immutable, load-once index over all knowledge entries.
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build an index from explicit entries, caching each entry's tokens.
    pub fn new(mut entries: Vec<KnowledgeEntry>) -> Self {
        for entry in &mut entries {
            entry.tokens = tokenize(&entry.matching_text());
        }
        Self { entries }
    }

    /// Load the built-in catalog and log any validation findings.
    pub fn load() -> Self {
        let kb = Self::new(catalog::entries());
        for issue in kb.validate() {
            warn!(%issue, "knowledge base validation");
        }
        kb
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Look up one entry by topic key.
    ///
    /// The catalog is small enough that a scan beats carrying a second
    /// index structure.
    pub fn get(&self, topic: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.topic == topic)
    }

    /// Check catalog consistency.
    ///
    /// Findings are degraded-mode warnings, not errors: the engine must
    /// keep answering with whatever the catalog does contain.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (position, entry) in self.entries.iter().enumerate() {
            if self.entries[..position]
                .iter()
                .any(|prior| prior.topic == entry.topic)
            {
                issues.push(ValidationIssue::DuplicateTopic(entry.topic.clone()));
            }
            if entry.keywords.is_empty() {
                issues.push(ValidationIssue::EmptyKeywords(entry.topic.clone()));
            }
            if entry.tokens.is_empty() {
                issues.push(ValidationIssue::UnmatchableEntry(entry.topic.clone()));
            }
        }

        for &topic in ANCHOR_TOPICS {
            if self.get(topic).is_none() {
                issues.push(ValidationIssue::MissingAnchorTopic(topic));
            }
        }

        issues
    }
}

/// A catalog inconsistency found at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two entries share a topic key; lookups only ever see the first.
    DuplicateTopic(String),
    /// Entry has no keywords to seed matching.
    EmptyKeywords(String),
    /// Entry's matching text tokenizes to nothing, so it can never be
    /// selected by similarity.
    UnmatchableEntry(String),
    /// A topic the router addresses directly is absent.
    MissingAnchorTopic(&'static str),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTopic(topic) => write!(f, "duplicate topic key '{topic}'"),
            Self::EmptyKeywords(topic) => write!(f, "topic '{topic}' has no keywords"),
            Self::UnmatchableEntry(topic) => {
                write!(f, "topic '{topic}' has no usable matching tokens")
            }
            Self::MissingAnchorTopic(topic) => {
                write!(f, "anchor topic '{topic}' missing from catalog")
            }
        }
    }
}
