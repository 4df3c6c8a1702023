//! Tokenization and normalization for similarity matching.
//!
//! Pipeline: lowercase → strip punctuation → split on whitespace → drop
//! single-character tokens → drop stopwords → suffix-stem. Output tokens
//! are lowercase, punctuation-free, and stemmed; order of appearance is
//! preserved.

/// Common English function words and contractions dropped before matching.
///
/// Contractions are listed in their apostrophe form; punctuation stripping
/// happens before the stopword check, so they also fall out as their
/// fragments ("don" survives, "t" is dropped by the length filter).
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in",
    "on", "at", "to", "for", "with", "by", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "of", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
    "now", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "do", "does", "did", "doing", "have", "has",
    "had", "having", "would", "could", "ought", "i'm", "you're", "he's", "she's", "it's", "we're",
    "they're", "i've", "you've", "we've", "they've", "i'd", "you'd", "he'd", "she'd", "we'd",
    "they'd", "i'll", "you'll", "he'll", "she'll", "we'll", "they'll", "isn't", "aren't",
    "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't",
    "wouldn't", "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's",
    "that's", "who's", "what's", "here's", "there's", "when's", "where's", "why's", "how's",
];

/// Tokenize text into normalized, stemmed tokens.
///
/// Total: never fails, and empty or token-free input yields an empty
/// vector. Token order follows order of appearance in the input.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 1)
        .filter(|token| !STOPWORDS.contains(token))
        .map(stem)
        .collect()
}

/// Stem a single lowercase token using ordered suffix rules.
///
/// First matching rule wins. A rule is rejected (and the token returned
/// unchanged) when applying it would leave a stem of one character or
/// less; the `-ed` rule additionally requires the stem to stay longer
/// than two characters.
pub fn stem(word: &str) -> String {
    if let Some(rest) = word.strip_suffix("ing") {
        if rest.len() > 1 {
            return rest.to_owned();
        }
        return word.to_owned();
    }
    if let Some(rest) = word.strip_suffix("ly") {
        if rest.len() > 1 {
            return rest.to_owned();
        }
        return word.to_owned();
    }
    if let Some(rest) = word.strip_suffix("ies") {
        if !rest.is_empty() {
            return format!("{rest}y");
        }
        return word.to_owned();
    }
    if let Some(rest) = word.strip_suffix("es") {
        if rest.len() > 1 {
            return rest.to_owned();
        }
        return word.to_owned();
    }
    if let Some(rest) = word.strip_suffix('s') {
        if !rest.ends_with('s') {
            if rest.len() > 1 {
                return rest.to_owned();
            }
            return word.to_owned();
        }
    }
    if let Some(rest) = word.strip_suffix("ed") {
        if rest.len() > 2 {
            return rest.to_owned();
        }
        return word.to_owned();
    }
    word.to_owned()
}
