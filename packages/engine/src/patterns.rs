//! Parsed hyphenation data for one language.
//!
//! A [`PatternSet`] holds everything the word splitter needs: the pattern
//! table (Liang patterns keyed by their digit-free letter sequence), the
//! whole-word exception table, and the left/right hyphenation margins.
//! It is built once per language - by the parser or restored from cache -
//! and never mutated afterwards, so it can be shared freely between
//! concurrent splits.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hyphenation patterns, exceptions and margins for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    /// Pattern key (lowercase, digit-free, may contain `.` word boundary
    /// markers) to score string. A score string for a key of N characters
    /// has exactly N+1 digits, one per character gap.
    patterns: HashMap<String, String>,

    /// Length in characters of the longest pattern key. Bounds the
    /// substring search during splitting.
    max_pattern_length: usize,

    /// Whole-word overrides: lowercase word (hyphens removed) to its
    /// pre-determined fragment list.
    exceptions: HashMap<String, Vec<String>>,

    /// Minimum number of characters kept unbroken at the start of a word.
    min_left: usize,

    /// Minimum number of characters kept unbroken at the end of a word.
    min_right: usize,
}

impl PatternSet {
    /// Create a pattern set from already-parsed parts.
    pub fn new(
        patterns: HashMap<String, String>,
        max_pattern_length: usize,
        exceptions: HashMap<String, Vec<String>>,
        min_left: usize,
        min_right: usize,
    ) -> Self {
        Self {
            patterns,
            max_pattern_length,
            exceptions,
            min_left,
            min_right,
        }
    }

    /// Score string for a pattern key, if the key is known.
    pub fn score_string(&self, key: &str) -> Option<&str> {
        self.patterns.get(key).map(String::as_str)
    }

    /// Exception fragments for a lowercase word, if one is registered.
    pub fn exception(&self, word_lower: &str) -> Option<&[String]> {
        self.exceptions.get(word_lower).map(Vec::as_slice)
    }

    /// True if the lowercase word has a whole-word override.
    pub fn has_exception(&self, word_lower: &str) -> bool {
        self.exceptions.contains_key(word_lower)
    }

    /// Length in characters of the longest pattern key.
    pub fn max_pattern_length(&self) -> usize {
        self.max_pattern_length
    }

    /// Minimum unbroken characters at the start of a word.
    pub fn min_left(&self) -> usize {
        self.min_left
    }

    /// Minimum unbroken characters at the end of a word.
    pub fn min_right(&self) -> usize {
        self.min_right
    }

    /// Number of patterns in the table.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the table holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The full pattern table (used by caches).
    pub fn patterns(&self) -> &HashMap<String, String> {
        &self.patterns
    }

    /// The full exception table (used by caches).
    pub fn exceptions(&self) -> &HashMap<String, Vec<String>> {
        &self.exceptions
    }
}
