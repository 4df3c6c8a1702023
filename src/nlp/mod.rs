//! Lightweight text processing for the matching engine.
//!
//! Four independent pieces, leaves first:
//! - [`tokenizer`] — lowercasing, punctuation stripping, stopword removal,
//!   rule-based suffix stemming
//! - [`similarity`] — term-frequency vectors and cosine similarity over
//!   tokenized text
//! - [`intent`] — ordered regex bank classifying raw utterances into coarse
//!   intents
//! - [`entities`] — regex extraction of quantities, dates, and known
//!   product/location mentions
//!
//! Everything here is deterministic, total (no failure modes for any string
//! input), and free of I/O.

pub mod entities;
pub mod intent;
pub mod similarity;
pub mod tokenizer;

pub use entities::{EntityBundle, EntityExtractor};
pub use intent::{Intent, IntentClassifier};
pub use similarity::{similarity, similarity_tokens};
pub use tokenizer::tokenize;
