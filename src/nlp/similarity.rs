//! Term-frequency cosine similarity between token sequences.
//!
//! Both sequences are projected onto the union of their distinct tokens,
//! weighted by relative frequency (occurrences / sequence length), and
//! compared by cosine. Scores land in `[0, 1]`; an empty side scores 0.

use crate::nlp::tokenizer::tokenize;

/// Similarity between two raw texts.
///
/// Tokenizes both sides and delegates to [`similarity_tokens`].
/// Symmetric and total: any pair of strings produces a score in `[0, 1]`.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    similarity_tokens(&tokenize(text_a), &tokenize(text_b))
}

/// Cosine similarity between two already-tokenized sequences.
///
/// The knowledge base caches entry tokens at load time, so per-turn
/// scoring only tokenizes the user's utterance once and reuses the
/// cached side through this function.
pub fn similarity_tokens<A, B>(tokens_a: &[A], tokens_b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    // Vocabulary: distinct terms from both sides, first-seen order.
    let mut vocabulary: Vec<&str> = Vec::new();
    for term in tokens_a
        .iter()
        .map(AsRef::as_ref)
        .chain(tokens_b.iter().map(AsRef::as_ref))
    {
        if !vocabulary.contains(&term) {
            vocabulary.push(term);
        }
    }

    let vector_a: Vec<f64> = vocabulary
        .iter()
        .map(|term| term_frequency(term, tokens_a))
        .collect();
    let vector_b: Vec<f64> = vocabulary
        .iter()
        .map(|term| term_frequency(term, tokens_b))
        .collect();

    cosine(&vector_a, &vector_b)
}

/// Relative frequency of `term` within a token sequence.
fn term_frequency<T: AsRef<str>>(term: &str, tokens: &[T]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens.iter().filter(|t| t.as_ref() == term).count();
    lossless_f64(count) / lossless_f64(tokens.len())
}

/// Cosine of two equal-length vectors, clamped to `[0, 1]`.
///
/// Returns 0 when either norm is zero. The zero-norm case cannot arise
/// from non-empty token sequences, but the guard keeps the function total.
fn cosine(vector_a: &[f64], vector_b: &[f64]) -> f64 {
    let dot: f64 = vector_a
        .iter()
        .zip(vector_b.iter())
        .map(|(a, b)| a * b)
        .sum();
    let magnitude_a = vector_a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let magnitude_b = vector_b.iter().map(|v| v * v).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    (dot / (magnitude_a * magnitude_b)).clamp(0.0, 1.0)
}

/// Widen a count to `f64` without triggering precision-loss casts.
///
/// Token sequence lengths fit comfortably in `u32`; the saturating
/// fallback only guards pathological inputs.
fn lossless_f64(n: usize) -> f64 {
    f64::from(u32::try_from(n).unwrap_or(u32::MAX))
}
