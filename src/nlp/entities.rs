//! Regex-based entity extraction from raw utterances.
//!
//! Four independent detectors: numeric quantities (with optional unit
//! suffix), date-like substrings, yarn-type mentions, and location
//! mentions. Detectors never fail and never cross-validate; a bundle with
//! all lists empty is a perfectly normal result.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Yarn vocabulary probed by substring membership.
const YARN_TYPES: &[&str] = &[
    "cotton",
    "polyester",
    "blend",
    "recycled",
    "organic",
    "vortex",
    "ring spun",
    "open end",
    "oe yarn",
];

/// Location vocabulary probed by substring membership.
const LOCATIONS: &[&str] = &["india", "karur", "tamil nadu", "sukkaliyur"];

/// Everything extracted from one utterance.
///
/// Numbers and dates keep duplicates in order of appearance; product and
/// location lists carry at most one entry per vocabulary term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    /// Numeric quantities, unit suffix included when present ("30 kg").
    pub numbers: Vec<String>,
    /// Date-like substrings ("12/03/2024", "3rd March 2024").
    pub dates: Vec<String>,
    /// Yarn-type vocabulary terms mentioned in the text.
    pub products: Vec<String>,
    /// Location vocabulary terms mentioned in the text.
    pub locations: Vec<String>,
}

impl EntityBundle {
    /// True when no detector found anything.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
            && self.dates.is_empty()
            && self.products.is_empty()
            && self.locations.is_empty()
    }
}

/// Compiled entity detectors.
#[derive(Debug)]
pub struct EntityExtractor {
    number_pattern: Option<Regex>,
    date_pattern: Option<Regex>,
}

impl EntityExtractor {
    /// Compile the detector patterns once.
    pub fn new() -> Self {
        let number_pattern =
            Regex::new(r"(?i)\b\d+(\.\d+)?\s*(kg|g|mm|cm|m|inch|inches|yards|counts|ne)?\b").ok();
        let date_pattern = Regex::new(
            r"(?i)\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{1,2}(?:st|nd|rd|th)?\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*(?:\s+\d{2,4})?)\b",
        )
        .ok();
        Self {
            number_pattern,
            date_pattern,
        }
    }

    /// Extract all entities from raw text.
    ///
    /// Total: empty input yields an all-empty bundle.
    pub fn extract(&self, text: &str) -> EntityBundle {
        if text.is_empty() {
            return EntityBundle::default();
        }

        let lower = text.to_lowercase();

        let numbers = self
            .number_pattern
            .iter()
            .flat_map(|pattern| pattern.find_iter(text))
            .map(|m| m.as_str().trim().to_owned())
            .collect();

        let dates = self
            .date_pattern
            .iter()
            .flat_map(|pattern| pattern.find_iter(text))
            .map(|m| m.as_str().to_owned())
            .collect();

        let products = YARN_TYPES
            .iter()
            .filter(|term| lower.contains(*term))
            .map(|term| (*term).to_owned())
            .collect();

        let locations = LOCATIONS
            .iter()
            .filter(|term| lower.contains(*term))
            .map(|term| (*term).to_owned())
            .collect();

        EntityBundle {
            numbers,
            dates,
            products,
            locations,
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
