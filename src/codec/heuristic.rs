//! Literal-versus-compressed classification of undecodable link text
//!
//! Compressed, base64-wrapped output looks like near-uniform noise: many
//! distinct characters and none dominating. Hand-typed charts reuse a few
//! symbols and separators over and over.

use std::collections::HashMap;

use crate::io::configuration::{LITERAL_MAX_DISTINCT_CHARS, LITERAL_MAX_FREQUENCY};

/// Character frequency summary of a string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterProfile {
    /// Number of distinct characters
    pub distinct_count: usize,
    /// Relative frequency of the most common character (0 for empty input)
    pub max_frequency: f64,
}

impl CharacterProfile {
    /// Count the characters of `text`
    pub fn of(text: &str) -> Self {
        let mut counts: HashMap<char, usize> = HashMap::new();
        let mut total = 0usize;
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        let max_frequency = if total == 0 {
            0.0
        } else {
            max_count as f64 / total as f64
        };

        Self {
            distinct_count: counts.len(),
            max_frequency,
        }
    }

    /// Whether the profile looks like compressed noise rather than a typed chart
    pub fn looks_compressed(&self) -> bool {
        self.distinct_count > LITERAL_MAX_DISTINCT_CHARS
            && self.max_frequency < LITERAL_MAX_FREQUENCY
    }
}

/// What an undecodable link value most likely is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A chart typed or pasted directly into the link
    Literal,
    /// A compressed value damaged beyond recovery
    Corrupted,
}

/// Classify text that failed to decode
pub fn classify(text: &str) -> Classification {
    if CharacterProfile::of(text).looks_compressed() {
        Classification::Corrupted
    } else {
        Classification::Literal
    }
}
