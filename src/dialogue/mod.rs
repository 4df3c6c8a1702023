//! Dialogue layer: per-session context, the router that picks a response
//! for each turn, and response personalization.

pub mod context;
pub mod personalize;
pub mod router;

pub use context::ConversationContext;
pub use router::{Reply, Router};
