//! Per-session conversation state.
//!
//! One [`ConversationContext`] per user session, owned by the hosting
//! layer. The engine reads the incoming value and returns an updated
//! copy; it never mutates the caller's state in place. The host persists
//! the value between turns (and, for the bundled CLI, between runs).

use serde::{Deserialize, Serialize};

/// Maximum number of topics remembered in [`ConversationContext::recent_topics`].
pub const MAX_RECENT_TOPICS: usize = 3;

/// Short-term state carried across the turns of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationContext {
    /// Topic selected on the most recent routed turn.
    pub last_topic: Option<String>,
    /// Visitor's name, once a name pattern has been recognized.
    /// Never cleared automatically; later recognitions overwrite.
    pub user_name: Option<String>,
    /// Recently selected topics, most recent first, deduplicated,
    /// capped at [`MAX_RECENT_TOPICS`].
    pub recent_topics: Vec<String>,
    /// Messages seen this session; incremented by the host per turn.
    pub message_count: u32,
}

impl ConversationContext {
    /// Fresh context for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this context with `topic` recorded as the current one.
    ///
    /// The new `recent_topics` is the old list with `topic` pushed on
    /// front, deduplicated keeping the first occurrence, and truncated
    /// to [`MAX_RECENT_TOPICS`]. `message_count` is untouched — counting
    /// messages is the host's job.
    #[must_use]
    pub fn with_topic(&self, topic: &str) -> Self {
        let mut recent: Vec<String> = Vec::with_capacity(MAX_RECENT_TOPICS);
        for candidate in std::iter::once(topic).chain(self.recent_topics.iter().map(String::as_str))
        {
            if !recent.iter().any(|seen| seen == candidate) {
                recent.push(candidate.to_owned());
            }
        }
        recent.truncate(MAX_RECENT_TOPICS);

        Self {
            last_topic: Some(topic.to_owned()),
            user_name: self.user_name.clone(),
            recent_topics: recent,
            message_count: self.message_count,
        }
    }

    /// Copy of this context with the visitor's name recorded.
    #[must_use]
    pub fn with_user_name(&self, name: &str) -> Self {
        let mut updated = self.clone();
        updated.user_name = Some(name.to_owned());
        updated
    }

    /// Count one more message. Saturates rather than wrapping.
    pub fn record_message(&mut self) {
        self.message_count = self.message_count.saturating_add(1);
    }
}
